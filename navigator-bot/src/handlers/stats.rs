//! Admin statistics handler.

use async_trait::async_trait;
use bot_core::{Bot, BotError, Handler, HandlerResponse, Message, Result};
use question_log::QuestionRepository;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::keyboard::BTN_STATS;
use crate::stats::format_report;

pub const ACCESS_DENIED: &str = "⛔ Доступ запрещён.";

/// Days covered by the recency line of the report.
const STATS_WINDOW_DAYS: i64 = 7;

/// Replies to the "📊 Статистика" button with the usage report, but only for
/// the configured admin id. Any other sender gets the denial message and the
/// report is never computed. This interaction is not logged to the store.
pub struct StatsHandler {
    bot: Arc<dyn Bot>,
    repo: QuestionRepository,
    admin_id: i64,
}

impl StatsHandler {
    /// `admin_id` 0 means "no admin": the report is denied for every sender,
    /// including sender-less messages the adapter maps to user id 0.
    pub fn new(bot: Arc<dyn Bot>, repo: QuestionRepository, admin_id: i64) -> Self {
        Self {
            bot,
            repo,
            admin_id,
        }
    }
}

#[async_trait]
impl Handler for StatsHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.content != BTN_STATS {
            return Ok(HandlerResponse::Continue);
        }

        if self.admin_id == 0 || message.user.id != self.admin_id {
            warn!(
                user_id = message.user.id,
                "step: statistics denied for non-admin"
            );
            self.bot.send_message(&message.chat, ACCESS_DENIED).await?;
            return Ok(HandlerResponse::Reply(ACCESS_DENIED.to_string()));
        }

        let stats = self
            .repo
            .stats(STATS_WINDOW_DAYS)
            .await
            .map_err(|e| BotError::Database(e.to_string()))?;
        let report = format_report(&stats);

        info!(
            user_id = message.user.id,
            total = stats.total,
            "step: statistics report sent"
        );
        self.bot.send_message(&message.chat, &report).await?;
        Ok(HandlerResponse::Reply(report))
    }
}
