//! Classifier collaborator: one LLM call that maps a question to a category tag.

use anyhow::Result;
use llm_client::{ChatMessage, LlmClient};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::categories::is_known_tag;

/// System instruction constraining the model to a single lowercase tag.
const CLASSIFY_SYSTEM_PROMPT: &str = "Определи категорию вопроса. Ответь ОДНИМ словом из списка:

basics
sensory
communication
school
emotions
social
daily
interests
parent
therapy
teens
legal

Ничего кроме одного слова не пиши.";

/// Classification runs deterministically.
const CLASSIFY_TEMPERATURE: f32 = 0.0;

/// Wraps one LLM call with the fixed classification prompt.
/// The trimmed, lowercased model output is returned verbatim unless strict
/// validation is enabled, in which case an out-of-set tag is an error.
#[derive(Clone)]
pub struct Classifier {
    llm: Arc<dyn LlmClient>,
    strict: bool,
}

impl Classifier {
    pub fn new(llm: Arc<dyn LlmClient>, strict: bool) -> Self {
        Self { llm, strict }
    }

    /// Returns the category tag for the question. Transport/API errors propagate.
    #[instrument(skip(self, question))]
    pub async fn classify(&self, question: &str) -> Result<String> {
        let messages = vec![
            ChatMessage::system(CLASSIFY_SYSTEM_PROMPT),
            ChatMessage::user(question),
        ];

        let raw = self
            .llm
            .chat_completion(messages, CLASSIFY_TEMPERATURE)
            .await?;
        let category = raw.trim().to_lowercase();

        if self.strict && !is_known_tag(&category) {
            anyhow::bail!("Classifier returned unknown category: {}", category);
        }

        info!(category = %category, "Question classified");
        Ok(category)
    }
}
