//! Minimal config: Telegram token plus the LLM provider endpoint.
//! This variant talks to a different provider than navigator-bot, through the
//! same OpenAI-compatible client (base URL + key + model).

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct SimpleBotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// LLM_API_KEY
    pub api_key: String,
    /// LLM_BASE_URL, default DeepSeek's endpoint
    pub base_url: String,
    /// LLM_MODEL, default deepseek-chat
    pub model: String,
    /// LOG_FILE, default logs/simple-bot.log
    pub log_file: String,
}

impl SimpleBotConfig {
    /// Load from environment variables; required credentials fail fast.
    pub fn from_env() -> Result<Self> {
        let bot_token = env::var("BOT_TOKEN").context("BOT_TOKEN not set")?;
        let api_key = env::var("LLM_API_KEY").context("LLM_API_KEY not set")?;
        let base_url = env::var("LLM_BASE_URL")
            .unwrap_or_else(|_| "https://api.deepseek.com/v1".to_string());
        let model = env::var("LLM_MODEL").unwrap_or_else(|_| "deepseek-chat".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/simple-bot.log".to_string());

        Ok(Self {
            bot_token,
            api_key,
            base_url,
            model,
            log_file,
        })
    }

    /// Checks that the provider endpoint is a well-formed URL before any
    /// network setup happens.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.base_url).is_err() {
            anyhow::bail!("LLM_BASE_URL is not a valid URL: {}", self.base_url);
        }
        Ok(())
    }
}
