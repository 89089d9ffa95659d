//! # bot-core
//!
//! Core types and traits for the NeuroNavigator bots: [`Bot`], [`Handler`], [`HandlerChain`],
//! message and keyboard types, error types, and tracing initialization.
//! Transport-agnostic; bot-telegram provides the teloxide implementation.

pub mod bot;
pub mod chain;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use chain::HandlerChain;
pub use error::{BotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Message, ReplyKeyboard, ToCoreMessage, ToCoreUser, User,
};
