use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    messaging::types::LinkButton,
    Result,
};

/// Outbound messaging port.
///
/// All replies are Telegram-style HTML.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<MessageRef>;

    /// Send a message with a single inline button that opens `button.url`.
    async fn send_with_link(
        &self,
        chat_id: ChatId,
        html: &str,
        button: LinkButton,
    ) -> Result<MessageRef>;
}
