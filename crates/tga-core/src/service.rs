//! Per-message dispatch: `/start`, `/info`, everything else.
//!
//! `BotService` is the application context built once at startup and shared
//! by every handler invocation. It holds no per-chat state, so concurrent
//! updates need no locking.

use std::sync::Arc;

use crate::{
    auth::{extract_auth_token, AuthForwarder, AuthUser},
    commands::BotCommand,
    domain::{IncomingMessage, MessageRef, User},
    messaging::{port::MessagingPort, types::Reply},
    photo::{resolve_profile_photo, FileUrlBase, ProfilePhotoSource},
    profile::format_user_info,
    replies, Result,
};

pub struct BotService {
    messenger: Arc<dyn MessagingPort>,
    photos: Arc<dyn ProfilePhotoSource>,
    files: FileUrlBase,
    /// `None` disables the `auth_` deep-link flow; `/start auth_x` then
    /// behaves like a plain `/start`.
    auth: Option<Arc<dyn AuthForwarder>>,
    /// Own username (without `@`); commands addressed to other bots are ignored.
    bot_username: Option<String>,
}

impl BotService {
    pub fn new(
        messenger: Arc<dyn MessagingPort>,
        photos: Arc<dyn ProfilePhotoSource>,
        files: FileUrlBase,
        auth: Option<Arc<dyn AuthForwarder>>,
    ) -> Self {
        Self {
            messenger,
            photos,
            files,
            auth,
            bot_username: None,
        }
    }

    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    /// Handle one inbound message: exactly one reply to the originating chat.
    pub async fn handle(&self, msg: &IncomingMessage) -> Result<MessageRef> {
        let reply = self.reply_for(msg).await?;
        match reply.button {
            Some(button) => {
                self.messenger
                    .send_with_link(msg.chat_id, &reply.html, button)
                    .await
            }
            None => self.messenger.send_html(msg.chat_id, &reply.html).await,
        }
    }

    pub async fn reply_for(&self, msg: &IncomingMessage) -> Result<Reply> {
        match BotCommand::route(msg.text.as_deref(), self.bot_username.as_deref()) {
            BotCommand::Start { payload } => Ok(self.start(&msg.from, payload.as_deref()).await),
            BotCommand::Info => self.info(&msg.from).await,
            BotCommand::Other => Ok(Reply::text(replies::USAGE_HINT)),
        }
    }

    async fn start(&self, user: &User, payload: Option<&str>) -> Reply {
        let token = payload.and_then(extract_auth_token);
        match (token, self.auth.as_deref()) {
            (Some(token), Some(auth)) => self.complete_login(auth, user, token).await,
            _ => Reply::text(replies::welcome(&user.first_name)),
        }
    }

    async fn complete_login(&self, auth: &dyn AuthForwarder, user: &User, token: &str) -> Reply {
        let photo = resolve_profile_photo(self.photos.as_ref(), &self.files, user.id).await;
        let auth_user = AuthUser::new(user, &photo);

        match auth.complete(token, &auth_user).await {
            Ok(resp) if resp.success => {
                tracing::info!(user_id = user.id.0, "browser login completed");
                replies::auth_succeeded(resp.callback_url.as_deref(), resp.message.as_deref())
            }
            Ok(resp) => {
                tracing::warn!(
                    user_id = user.id.0,
                    extra = ?resp.extra,
                    "auth service reported failure"
                );
                Reply::text(replies::AUTH_FAILED)
            }
            Err(e) => {
                tracing::warn!(user_id = user.id.0, error = %e, "browser login failed");
                Reply::text(replies::AUTH_FAILED)
            }
        }
    }

    async fn info(&self, user: &User) -> Result<Reply> {
        let photo = resolve_profile_photo(self.photos.as_ref(), &self.files, user.id).await;
        let json = format_user_info(user, &photo)?;
        Ok(Reply::text(replies::profile(&json)))
    }
}
