//! OpenAI-compatible implementation of [`LlmClient`], built on async-openai.
//!
//! Works against the official API or any compatible endpoint via `with_base_url`
//! (the two bots use two different providers through this one client).

use anyhow::Result;
use async_openai::{
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use super::{ChatMessage, LlmClient, MessageRole};

/// Masks an API key for safe logging: first 7 chars + "***" + last 4 chars.
/// Keys of 11 chars or fewer become "***" so no part of a short key leaks.
/// Counts chars, not bytes, so non-ASCII keys never split a code point.
pub fn mask_token(token: &str) -> String {
    let len = token.chars().count();
    if len <= 11 {
        "***".to_string()
    } else {
        let head: String = token.chars().take(7).collect();
        let tail: String = token.chars().skip(len - 4).collect();
        format!("{}***{}", head, tail)
    }
}

/// Chat client for OpenAI-compatible APIs. Holds the API key only for masked logging.
#[derive(Clone)]
pub struct OpenAIChatClient {
    client: Arc<Client<async_openai::config::OpenAIConfig>>,
    model: String,
    api_key_for_logging: String,
}

const DEFAULT_MODEL: &str = "gpt-4o-mini";

impl OpenAIChatClient {
    /// Builds a client for the official API base URL.
    pub fn new(api_key: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new().with_api_key(api_key.clone());
        Self {
            client: Arc::new(Client::with_config(config)),
            model: DEFAULT_MODEL.to_string(),
            api_key_for_logging: api_key,
        }
    }

    /// Builds a client with a custom base URL (compatible providers, proxies).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            model: DEFAULT_MODEL.to_string(),
            api_key_for_logging: api_key,
        }
    }

    /// Overrides the model name.
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    fn to_api_message(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
        let content = msg.content.clone();
        let api_msg: ChatCompletionRequestMessage = match msg.role {
            MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
                .content(content)
                .build()?
                .into(),
            MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
                .content(content)
                .build()?
                .into(),
            MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
                .content(content)
                .build()?
                .into(),
        };
        Ok(api_msg)
    }
}

#[async_trait]
impl LlmClient for OpenAIChatClient {
    /// Sends one chat completion request and returns the first choice's content.
    ///
    /// Logs model, message count, masked API key, and token usage when reported.
    /// An empty choice list is an error.
    #[instrument(skip(self, messages))]
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        temperature: f32,
    ) -> Result<String> {
        let api_messages: Vec<ChatCompletionRequestMessage> = messages
            .iter()
            .map(Self::to_api_message)
            .collect::<Result<_>>()?;

        tracing::info!(
            model = %self.model,
            message_count = api_messages.len(),
            temperature = temperature,
            api_key = %mask_token(&self.api_key_for_logging),
            "chat_completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(api_messages)
            .temperature(temperature)
            .build()?;

        if let Ok(json) = serde_json::to_string_pretty(&request) {
            tracing::debug!(request_json = %json, "chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "chat_completion usage"
            );
        }

        match response.choices.first() {
            Some(choice) => Ok(choice.message.content.clone().unwrap_or_default()),
            None => anyhow::bail!("No response from LLM API"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: mask_token keeps first 7 and last 4 chars of a long key.**
    #[test]
    fn mask_token_long_key() {
        assert_eq!(mask_token("sk-abcd1234efgh5678"), "sk-abcd***5678");
    }

    /// **Test: mask_token fully hides keys of 11 chars or fewer.**
    #[test]
    fn mask_token_short_key() {
        assert_eq!(mask_token("short"), "***");
        assert_eq!(mask_token("elevenchars"), "***");
        assert_eq!(mask_token(""), "***");
    }

    /// **Test: mask_token counts chars, so multi-byte keys mask cleanly
    /// instead of splitting a code point at the cut.**
    #[test]
    fn mask_token_multibyte_key() {
        assert_eq!(mask_token("sk-проектный-ключ-2024"), "sk-прое***2024");
        // 11 chars but more than 11 bytes: still fully hidden.
        assert_eq!(mask_token("ключ-секрет"), "***");
    }

    /// **Test: builder sets the model used for requests.**
    #[test]
    fn with_model_overrides_default() {
        let client = OpenAIChatClient::new("key".to_string()).with_model("gpt-4o".to_string());
        assert_eq!(client.model, "gpt-4o");
    }
}
