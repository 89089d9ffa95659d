//! Core types: user, chat, message, reply keyboard, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Sender identity (id plus optional handle and names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (private or group) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single inbound text message with sender and chat context.
/// Each message is handled independently; there is no multi-turn state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Builds a message with the current timestamp. Used by adapters and tests.
    pub fn new(id: impl Into<String>, user: User, chat: Chat, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user,
            chat,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Static reply keyboard layout: rows of button labels.
/// Transport adapters render this as the platform's native keyboard markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyKeyboard {
    pub rows: Vec<Vec<String>>,
    pub resize: bool,
}

impl ReplyKeyboard {
    /// One button per row, resized to content (the layout the main menu uses).
    pub fn single_column<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: labels.into_iter().map(|l| vec![l.into()]).collect(),
            resize: true,
        }
    }

    /// Flat list of all button labels, row by row.
    pub fn labels(&self) -> Vec<&str> {
        self.rows
            .iter()
            .flat_map(|row| row.iter().map(String::as_str))
            .collect()
    }
}

/// Handler result for the chain. `Reply(text)` carries the response body that was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Not this handler's message; pass to the next one.
    Continue,
    /// Message consumed, no response body to report.
    Stop,
    /// Message consumed and the given text was sent as the reply.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// One routing decision: a handler either consumes the message (Stop/Reply)
/// or lets the chain try the next handler (Continue).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Processes the message. Return Stop or Reply to end the chain.
    async fn handle(&self, message: &Message) -> crate::error::Result<HandlerResponse>;
}
