//! Wraps teloxide::Bot and implements [`bot_core::Bot`]. Production code sends
//! messages via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use bot_core::{Bot as CoreBot, BotError, Chat, ReplyKeyboard, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, KeyboardButton, KeyboardMarkup},
};

/// Thin wrapper around teloxide::Bot that implements bot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Creates an adapter from a bot token, with an optional custom API URL
    /// (e.g. a local Bot API server).
    pub fn from_token(token: &str, api_url: Option<&str>) -> Result<Self> {
        let mut bot = teloxide::Bot::new(token);
        if let Some(url) = api_url {
            let url = reqwest::Url::parse(url)
                .map_err(|e| BotError::Config(format!("Invalid Telegram API URL: {}", e)))?;
            bot = bot.set_api_url(url);
        }
        Ok(Self { bot })
    }

    /// Returns the underlying teloxide::Bot for the runner.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

/// Renders a core [`ReplyKeyboard`] as teloxide keyboard markup.
fn to_keyboard_markup(keyboard: &ReplyKeyboard) -> KeyboardMarkup {
    let rows: Vec<Vec<KeyboardButton>> = keyboard
        .rows
        .iter()
        .map(|row| row.iter().map(|label| KeyboardButton::new(label)).collect())
        .collect();

    let mut markup = KeyboardMarkup::new(rows);
    markup.resize_keyboard = keyboard.resize;
    markup
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(to_keyboard_markup(keyboard))
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
