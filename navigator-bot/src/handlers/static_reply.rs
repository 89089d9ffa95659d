//! Static-text button handlers: fixed reply for an exact button label.

use async_trait::async_trait;
use bot_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::keyboard::{BTN_FOR_PARENTS, BTN_URGENT_HELP};

pub const MELTDOWN_HELP: &str = "📌 Причина:
Мелтдаун возникает из-за сенсорной перегрузки или эмоционального перенапряжения.

✅ Что делать:
- Уберите лишние стимулы (свет, шум).
- Уведите в тихое место.
- Говорите короткими фразами.
- Не объясняйте в пик кризиса.
- Дайте время восстановиться.";

pub const PARENT_SUPPORT: &str = "📌 Причина:
Эмоциональное выгорание возникает из-за хронического стресса.

✅ Что делать:
- Выделяйте время для отдыха ежедневно.
- Просите помощи.
- Поддерживайте режим сна.
- Обсуждайте трудности со специалистом.";

/// Sends a fixed reply when the message text equals the button label exactly,
/// regardless of sender identity. Anything else continues down the chain.
pub struct StaticReplyHandler {
    bot: Arc<dyn Bot>,
    label: &'static str,
    reply: &'static str,
}

impl StaticReplyHandler {
    pub fn new(bot: Arc<dyn Bot>, label: &'static str, reply: &'static str) -> Self {
        Self { bot, label, reply }
    }

    /// The "🆘 Срочная помощь" button: meltdown-support text.
    pub fn meltdown_help(bot: Arc<dyn Bot>) -> Self {
        Self::new(bot, BTN_URGENT_HELP, MELTDOWN_HELP)
    }

    /// The "☕ Для родителей" button: burnout-support text.
    pub fn parent_support(bot: Arc<dyn Bot>) -> Self {
        Self::new(bot, BTN_FOR_PARENTS, PARENT_SUPPORT)
    }
}

#[async_trait]
impl Handler for StaticReplyHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content != self.label {
            return Ok(HandlerResponse::Continue);
        }

        info!(
            user_id = message.user.id,
            label = %self.label,
            "step: static button reply"
        );
        self.bot.send_message(&message.chat, self.reply).await?;
        Ok(HandlerResponse::Reply(self.reply.to_string()))
    }
}
