//! # bot-telegram
//!
//! Telegram layer for the NeuroNavigator bots: adapters from teloxide types to
//! bot-core types, a [`bot_core::Bot`] implementation, and the long-polling runner.
//! Handles only Telegram connectivity and handler-chain execution; no persistence
//! or AI logic.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::run_repl;
