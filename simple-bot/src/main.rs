//! Binary for the minimal passthrough bot.

use anyhow::{Context, Result};
use bot_core::{init_tracing, Bot, HandlerChain};
use bot_telegram::{run_repl, TelegramBotAdapter};
use llm_client::{LlmClient, OpenAIChatClient};
use simple_bot::{PassthroughHandler, SimpleBotConfig};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = SimpleBotConfig::from_env()?;
    config.validate()?;

    if let Some(parent) = std::path::Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(parent).context("Failed to create log directory")?;
    }
    init_tracing(&config.log_file)?;

    info!(model = %config.model, base_url = %config.base_url, "Initializing bot");

    let llm: Arc<dyn LlmClient> = Arc::new(
        OpenAIChatClient::with_base_url(config.api_key.clone(), config.base_url.clone())
            .with_model(config.model.clone()),
    );

    let adapter = TelegramBotAdapter::from_token(&config.bot_token, None)?;
    let teloxide_bot = adapter.inner().clone();
    let bot: Arc<dyn Bot> = Arc::new(adapter);

    let chain = HandlerChain::new().add_handler(Arc::new(PassthroughHandler::new(bot, llm)));

    info!("Simple bot started");

    run_repl(teloxide_bot, chain).await
}
