//! Start command handler: greeting plus the main menu keyboard.

use async_trait::async_trait;
use bot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::keyboard::main_keyboard;

const START_COMMAND: &str = "/start";

pub const GREETING: &str = "Здравствуйте! Я — НейроНавигатор 🧠

Ваш цифровой помощник по вопросам РАС и СДВГ.

Задайте любой вопрос — я отвечу по структуре:
Причина
Что делать

Выберите раздел или напишите вопрос.";

/// Replies to `/start` with the greeting and the 5-button keyboard,
/// independent of prior history. Any other text continues down the chain.
pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content != START_COMMAND {
            return Ok(HandlerResponse::Continue);
        }

        info!(user_id = message.user.id, "step: start command");
        self.bot
            .send_message_with_keyboard(&message.chat, GREETING, &main_keyboard())
            .await?;
        Ok(HandlerResponse::Reply(GREETING.to_string()))
    }
}
