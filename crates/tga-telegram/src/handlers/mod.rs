//! Telegram update handlers.
//!
//! Each update is converted into a transport-free `IncomingMessage` and
//! handed to the shared `BotService`. Failures are logged here so one bad
//! update never reaches the dispatcher loop.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use tga_core::{
    domain::{ChatId, IncomingMessage, User, UserId},
    service::BotService,
};

pub async fn handle_message(msg: Message, service: Arc<BotService>) -> ResponseResult<()> {
    let Some(incoming) = incoming_message(&msg) else {
        tracing::debug!(chat_id = msg.chat.id.0, "ignoring message without sender");
        return Ok(());
    };

    if let Err(e) = service.handle(&incoming).await {
        tracing::error!(
            chat_id = incoming.chat_id.0,
            user_id = incoming.from.id.0,
            error = %e,
            "failed to reply"
        );
    }

    Ok(())
}

pub(crate) fn incoming_message(msg: &Message) -> Option<IncomingMessage> {
    let from = msg.from()?;
    let user = User {
        id: UserId(i64::try_from(from.id.0).ok()?),
        first_name: from.first_name.clone(),
        last_name: from.last_name.clone(),
        username: from.username.clone(),
        language_code: from.language_code.clone(),
        is_premium: from.is_premium,
    };

    Some(IncomingMessage {
        chat_id: ChatId(msg.chat.id.0),
        from: user,
        text: msg.text().map(str::to_string),
    })
}
