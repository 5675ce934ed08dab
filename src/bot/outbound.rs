//! Outbound delivery seam between handlers and the chat platform.

use async_trait::async_trait;
use teloxide::prelude::*;

use crate::error::BotError;

/// Push a text message to a chat. Implemented by [`teloxide::Bot`] in
/// production and by recording stubs in tests.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn send_text(&self, chat: ChatId, text: &str) -> Result<(), BotError>;
}

#[async_trait]
impl MessageSink for Bot {
    async fn send_text(&self, chat: ChatId, text: &str) -> Result<(), BotError> {
        self.send_message(chat, text.to_string())
            .await
            .map(|_| ())
            .map_err(|e| BotError::Delivery(e.to_string()))
    }
}
