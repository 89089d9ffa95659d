//! Shared test doubles: a recording Bot and scriptable LlmClient, plus message builders.

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use bot_core::{Bot, Chat, Message, ReplyKeyboard, Result, User};
use llm_client::{ChatMessage, LlmClient};
use question_log::QuestionRepository;
use std::collections::VecDeque;
use std::sync::Mutex;
use tempfile::TempDir;

/// One message the mock bot "sent".
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
    pub keyboard: Option<ReplyKeyboard>,
}

/// Bot double that records every outbound message instead of talking to Telegram.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentMessage>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().expect("mock bot lock").clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().expect("mock bot lock").push(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
            keyboard: None,
        });
        Ok(())
    }

    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &ReplyKeyboard,
    ) -> Result<()> {
        self.sent.lock().expect("mock bot lock").push(SentMessage {
            chat_id: chat.id,
            text: text.to_string(),
            keyboard: Some(keyboard.clone()),
        });
        Ok(())
    }
}

/// LLM double that pops scripted replies in order; an empty script is an error
/// (simulates a transport/API failure).
pub struct ScriptedLlm {
    replies: Mutex<VecDeque<String>>,
    pub calls: Mutex<Vec<Vec<ChatMessage>>>,
}

impl ScriptedLlm {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// An LLM whose every call fails.
    pub fn failing() -> Self {
        Self::new(Vec::<String>::new())
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock llm lock").len()
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        _temperature: f32,
    ) -> AnyResult<String> {
        self.calls.lock().expect("mock llm lock").push(messages);
        self.replies
            .lock()
            .expect("mock llm lock")
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("simulated LLM API failure"))
    }
}

pub fn message_from(user_id: i64, username: Option<&str>, content: &str) -> Message {
    Message::new(
        "1",
        User {
            id: user_id,
            username: username.map(str::to_string),
            first_name: None,
            last_name: None,
        },
        Chat {
            id: 1000 + user_id,
            chat_type: "private".to_string(),
        },
        content,
    )
}

/// Opens a fresh repository backed by a file inside the given temp dir.
pub async fn test_repo(temp_dir: &TempDir) -> QuestionRepository {
    let db_path = temp_dir.path().join("stats.db");
    QuestionRepository::new(db_path.to_str().expect("utf-8 path"))
        .await
        .expect("Failed to create repository")
}
