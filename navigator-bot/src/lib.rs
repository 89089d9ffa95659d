//! # NeuroNavigator bot
//!
//! The logging variant: routes each inbound Telegram message to one of the
//! fixed handlers (start, two static replies, admin statistics) or the
//! catch-all question path (classify, log, respond). Wires bot-core,
//! bot-telegram, llm-client, and question-log; loads config from env.

pub mod categories;
pub mod classifier;
pub mod config;
pub mod handlers;
pub mod keyboard;
pub mod responder;
pub mod runner;
pub mod stats;

pub use categories::{is_known_tag, CATEGORY_TAGS};
pub use classifier::Classifier;
pub use config::BotConfig;
pub use responder::Responder;
pub use runner::{build_handler_chain, run_bot};
