//! Bot abstraction for sending messages, with and without a reply keyboard.
//!
//! Transport-agnostic; production code uses the teloxide adapter from bot-telegram,
//! tests substitute a recording implementation.

use crate::error::Result;
use crate::types::{Chat, Message, ReplyKeyboard};
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a text message with an attached static reply keyboard.
    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}
