//! Telegram adapter (teloxide).
//!
//! Implements the `tga-core` messaging and profile-photo ports over the Bot API.

use async_trait::async_trait;

use teloxide::{
    prelude::*,
    types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode},
};

pub mod handlers;
pub mod router;

use tga_core::{
    domain::{ChatId, MessageId, MessageRef, UserId},
    errors::Error,
    messaging::{port::MessagingPort, types::LinkButton},
    photo::ProfilePhotoSource,
    Result,
};

fn map_err(e: teloxide::RequestError) -> Error {
    Error::External(format!("telegram error: {e}"))
}

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }

    fn message_ref(chat_id: ChatId, msg: &Message) -> MessageRef {
        MessageRef {
            chat_id,
            message_id: MessageId(msg.id.0),
        }
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<MessageRef> {
        let msg = self
            .bot
            .send_message(Self::tg_chat(chat_id), html.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(map_err)?;

        Ok(Self::message_ref(chat_id, &msg))
    }

    async fn send_with_link(
        &self,
        chat_id: ChatId,
        html: &str,
        button: LinkButton,
    ) -> Result<MessageRef> {
        let url = match reqwest::Url::parse(&button.url) {
            Ok(url) => url,
            Err(e) => {
                // Telegram rejects the whole message on a bad button URL; keep the text.
                tracing::warn!(url = %button.url, error = %e, "dropping link button");
                return self.send_html(chat_id, html).await;
            }
        };
        let markup =
            InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(button.label, url)]]);

        let msg = self
            .bot
            .send_message(Self::tg_chat(chat_id), html.to_string())
            .parse_mode(ParseMode::Html)
            .reply_markup(markup)
            .await
            .map_err(map_err)?;

        Ok(Self::message_ref(chat_id, &msg))
    }
}

/// Profile photo lookups via `getUserProfilePhotos` + `getFile`.
#[derive(Clone)]
pub struct TelegramPhotoSource {
    bot: Bot,
}

impl TelegramPhotoSource {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl ProfilePhotoSource for TelegramPhotoSource {
    async fn largest_profile_photo(&self, user_id: UserId) -> Result<Option<String>> {
        let tg_user = u64::try_from(user_id.0)
            .map(teloxide::types::UserId)
            .map_err(|_| Error::External(format!("invalid user id: {}", user_id.0)))?;

        let photos = self
            .bot
            .get_user_profile_photos(tg_user)
            .limit(1)
            .await
            .map_err(map_err)?;

        let largest = photos.photos.first().and_then(|sizes| {
            sizes
                .iter()
                .max_by_key(|p| u64::from(p.width) * u64::from(p.height))
        });
        Ok(largest.map(|p| p.file.id.clone()))
    }

    async fn file_path(&self, file_id: &str) -> Result<String> {
        let file = self
            .bot
            .get_file(file_id.to_string())
            .await
            .map_err(map_err)?;
        Ok(file.path)
    }
}
