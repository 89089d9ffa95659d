//! # simple-bot
//!
//! The minimal variant: every text message is forwarded to an OpenAI-compatible
//! LLM provider and the reply is sent back. No persistence, no classification,
//! no keyboard. Any AI failure is converted to a static apology at the handler
//! boundary instead of propagating.

mod config;
mod passthrough;

pub use config::SimpleBotConfig;
pub use passthrough::{PassthroughHandler, AI_ERROR_REPLY};
