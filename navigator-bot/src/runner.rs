//! Wiring and entry point: build dependencies from config, assemble the
//! handler chain, and run the long-polling loop.

use anyhow::{Context, Result};
use bot_core::{init_tracing, Bot, HandlerChain};
use bot_telegram::{run_repl, TelegramBotAdapter};
use llm_client::{LlmClient, OpenAIChatClient};
use question_log::QuestionRepository;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::classifier::Classifier;
use crate::config::BotConfig;
use crate::handlers::{QuestionHandler, StartHandler, StaticReplyHandler, StatsHandler};
use crate::responder::Responder;

/// Assembles the routing chain in priority order: start, the two static
/// buttons, admin statistics, and the catch-all question path last.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    repo: QuestionRepository,
    llm: Arc<dyn LlmClient>,
    admin_id: i64,
    strict_categories: bool,
) -> HandlerChain {
    let classifier = Classifier::new(llm.clone(), strict_categories);
    let responder = Responder::new(llm);

    HandlerChain::new()
        .add_handler(Arc::new(StartHandler::new(bot.clone())))
        .add_handler(Arc::new(StaticReplyHandler::meltdown_help(bot.clone())))
        .add_handler(Arc::new(StaticReplyHandler::parent_support(bot.clone())))
        .add_handler(Arc::new(StatsHandler::new(bot.clone(), repo.clone(), admin_id)))
        .add_handler(Arc::new(QuestionHandler::new(
            bot, repo, classifier, responder,
        )))
}

/// Main entry: validate config, init logging, open the store, build the LLM
/// client and handler chain, then run the REPL until the process is killed.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    if let Some(parent) = std::path::Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(parent).context("Failed to create log directory")?;
    }
    init_tracing(&config.log_file)?;

    info!(
        database_url = %config.database_url,
        model = %config.model,
        admin_configured = config.admin_id != 0,
        strict_categories = config.strict_categories,
        "Initializing bot"
    );

    let repo = QuestionRepository::new(&config.database_url)
        .await
        .context("Failed to open question log database")?;

    let chat_client = match config.openai_base_url.clone() {
        Some(base_url) => OpenAIChatClient::with_base_url(config.openai_api_key.clone(), base_url),
        None => OpenAIChatClient::new(config.openai_api_key.clone()),
    }
    .with_model(config.model.clone());
    let llm: Arc<dyn LlmClient> = Arc::new(chat_client);

    let adapter =
        TelegramBotAdapter::from_token(&config.bot_token, config.telegram_api_url.as_deref())?;
    let teloxide_bot = adapter.inner().clone();
    let bot: Arc<dyn Bot> = Arc::new(adapter);

    let chain = build_handler_chain(
        bot,
        repo,
        llm,
        config.admin_id,
        config.strict_categories,
    );

    info!("НейроНавигатор запущен 🚀");

    run_repl(teloxide_bot, chain).await
}
