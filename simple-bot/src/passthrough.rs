//! Passthrough handler: one LLM call per message, apology on failure.

use async_trait::async_trait;
use bot_core::{Bot, Handler, HandlerResponse, Message, Result};
use llm_client::{ChatMessage, LlmClient};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Sent verbatim when the AI call fails; the failure itself is only logged.
pub const AI_ERROR_REPLY: &str = "Ошибка ИИ. Попробуй позже.";

const SYSTEM_PROMPT: &str = "Ты дружелюбный ассистент. Отвечай кратко и по делу.";

const TEMPERATURE: f32 = 0.4;

/// Catch-all handler: forwards the message text to the LLM and relays the
/// reply. On an AI error it sends [`AI_ERROR_REPLY`] instead of failing the
/// handler invocation.
pub struct PassthroughHandler {
    bot: Arc<dyn Bot>,
    llm: Arc<dyn LlmClient>,
}

impl PassthroughHandler {
    pub fn new(bot: Arc<dyn Bot>, llm: Arc<dyn LlmClient>) -> Self {
        Self { bot, llm }
    }
}

#[async_trait]
impl Handler for PassthroughHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(message.content.clone()),
        ];

        let reply = match self.llm.chat_completion(messages, TEMPERATURE).await {
            Ok(answer) => answer,
            Err(e) => {
                error!(error = %e, user_id = message.user.id, "AI call failed");
                AI_ERROR_REPLY.to_string()
            }
        };

        self.bot.send_message(&message.chat, &reply).await?;

        info!(user_id = message.user.id, "step: passthrough reply sent");
        Ok(HandlerResponse::Reply(reply))
    }
}
