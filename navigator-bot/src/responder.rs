//! Responder collaborator: one LLM call producing the structured answer.

use anyhow::Result;
use llm_client::{ChatMessage, LlmClient};
use std::sync::Arc;
use tracing::instrument;

/// System instruction requiring the "Причина / Что делать" answer structure.
const RESPOND_SYSTEM_PROMPT: &str = "Ты НейроНавигатор — ассистент по вопросам РАС и СДВГ.

Правила:
1. Если медицинский вопрос — опирайся на доказательную медицину.
2. Если бытовой — давай пошаговый алгоритм.
3. Если юридический — укажи на необходимость проверки законодательства.
4. Всегда дели ответ на:
Причина
Что делать
Используй списки.
";

/// Appended to every answer before sending.
pub const SIGNATURE: &str = "\n\n— НейроНавигатор 🧠";

const RESPOND_TEMPERATURE: f32 = 0.4;

/// Wraps one LLM call with the fixed answering prompt and appends the signature.
/// Failures propagate to the caller; the handler invocation aborts, not the process.
#[derive(Clone)]
pub struct Responder {
    llm: Arc<dyn LlmClient>,
}

impl Responder {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Returns the structured answer text with the signature appended.
    #[instrument(skip(self, question))]
    pub async fn respond(&self, question: &str) -> Result<String> {
        let messages = vec![
            ChatMessage::system(RESPOND_SYSTEM_PROMPT),
            ChatMessage::user(question),
        ];

        let mut answer = self
            .llm
            .chat_completion(messages, RESPOND_TEMPERATURE)
            .await?;
        answer.push_str(SIGNATURE);
        Ok(answer)
    }
}
