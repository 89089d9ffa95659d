//! Catch-all question handler: classify, log, respond, send.

use async_trait::async_trait;
use bot_core::{Bot, BotError, Handler, HandlerResponse, Message, Result};
use question_log::QuestionRepository;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::classifier::Classifier;
use crate::responder::Responder;

/// The default path for any text no fixed handler matched. Steps run fully
/// sequentially per message: classify the question, append it to the log with
/// the classifier's tag, get the structured answer, send it. Each invocation
/// creates exactly one new record; a failure after logging leaves the record
/// in place (logging and responding are independent side effects).
pub struct QuestionHandler {
    bot: Arc<dyn Bot>,
    repo: QuestionRepository,
    classifier: Classifier,
    responder: Responder,
}

impl QuestionHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        repo: QuestionRepository,
        classifier: Classifier,
        responder: Responder,
    ) -> Self {
        Self {
            bot,
            repo,
            classifier,
            responder,
        }
    }
}

#[async_trait]
impl Handler for QuestionHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let question = message.content.as_str();

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            "step: question handling started"
        );

        let category = self
            .classifier
            .classify(question)
            .await
            .map_err(|e| BotError::Ai(e.to_string()))?;

        self.repo
            .log_question(
                message.user.id,
                message.user.username.as_deref(),
                &category,
                question,
            )
            .await
            .map_err(|e| {
                error!(error = %e, user_id = message.user.id, "Failed to log question");
                BotError::Database(e.to_string())
            })?;

        let answer = self
            .responder
            .respond(question)
            .await
            .map_err(|e| BotError::Ai(e.to_string()))?;

        self.bot.send_message(&message.chat, &answer).await?;

        info!(
            user_id = message.user.id,
            category = %category,
            "step: question handled"
        );
        Ok(HandlerResponse::Reply(answer))
    }
}
