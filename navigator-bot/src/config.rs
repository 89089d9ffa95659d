//! Bot config: Telegram token, LLM credentials, admin id, database and log paths.
//! Loaded once from environment variables; required credentials fail fast.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL (optional, e.g. local Bot API server)
    pub telegram_api_url: Option<String>,
    /// OPENAI_API_KEY
    pub openai_api_key: String,
    /// OPENAI_BASE_URL (optional, for OpenAI-compatible providers)
    pub openai_base_url: Option<String>,
    /// MODEL, default gpt-4o-mini
    pub model: String,
    /// ADMIN_ID, default 0 meaning "no admin"
    pub admin_id: i64,
    /// DATABASE_URL, default stats.db
    pub database_url: String,
    /// LOG_FILE, default logs/navigator-bot.log
    pub log_file: String,
    /// STRICT_CATEGORIES, default false: when true an out-of-set classifier
    /// tag is rejected instead of stored verbatim
    pub strict_categories: bool,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let openai_api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let openai_base_url = env::var("OPENAI_BASE_URL").ok();
        let model = env::var("MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let admin_id = env::var("ADMIN_ID")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "stats.db".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/navigator-bot.log".to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let strict_categories = env::var("STRICT_CATEGORIES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(false);

        Ok(Self {
            bot_token,
            telegram_api_url,
            openai_api_key,
            openai_base_url,
            model,
            admin_id,
            database_url,
            log_file,
            strict_categories,
        })
    }

    /// Validate config: URL overrides must parse if set.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url) = self.telegram_api_url {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!("TELEGRAM_API_URL is set but not a valid URL: {}", url);
            }
        }
        if let Some(ref url) = self.openai_base_url {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!("OPENAI_BASE_URL is set but not a valid URL: {}", url);
            }
        }
        Ok(())
    }
}
