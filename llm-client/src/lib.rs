//! # LLM client abstraction
//!
//! Defines [`ChatMessage`], the object-safe [`LlmClient`] trait, and an
//! OpenAI-compatible implementation. Provider is a pluggable capability: the
//! same client speaks to any endpoint that implements the OpenAI chat API,
//! selected via base URL and model.

use anyhow::Result;
use async_trait::async_trait;

mod openai_chat;

pub use openai_chat::{mask_token, OpenAIChatClient};

/// Role of a message, one-to-one with the chat API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// A single chat message, one element of the request `messages` array.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// LLM client interface: one synchronous request/response chat completion.
/// Temperature is per request because callers differ (classification runs at
/// 0.0, answering at 0.4).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply text for the given messages.
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        temperature: f32,
    ) -> Result<String>;
}
