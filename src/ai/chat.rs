//! Multi-turn chat on top of a single-prompt completion service

use chrono::{DateTime, Utc};
use tracing::warn;

use super::ChatCompletion;
use crate::error::{Result, ToolError};

pub const CHAT_GREETING: &str = "Hello! I'm your AI assistant. How can I help you today?";
pub const CHAT_APOLOGY: &str = "I'm sorry, I encountered an error. Please try again later.";

/// Messages of earlier turns included in each prompt
const HISTORY_WINDOW: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    fn label(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "Assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self { role, content: content.into(), timestamp: Utc::now() }
    }
}

/// Conversation state, starting with the assistant's greeting
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self { messages: vec![ChatMessage::new(ChatRole::Assistant, CHAT_GREETING)] }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn prompt_for(&self, input: &str) -> String {
        let start = self.messages.len().saturating_sub(HISTORY_WINDOW);
        let history = self.messages[start..]
            .iter()
            .map(|m| format!("{}: {}", m.role.label(), m.content))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "You are a helpful AI assistant.\n\nPrevious conversation:\n{}\n\nUser: {}\n\nAssistant:",
            history, input
        )
    }

    /// Send one user turn and record the reply.
    ///
    /// On failure the apology message is recorded as the assistant's turn and
    /// the error is returned.
    pub async fn send(&mut self, service: &dyn ChatCompletion, input: &str) -> Result<String> {
        if input.trim().is_empty() {
            return Err(ToolError::EmptyInput);
        }

        let prompt = self.prompt_for(input);
        self.messages.push(ChatMessage::new(ChatRole::User, input));

        match service.complete(&prompt).await {
            Ok(reply) => {
                self.messages.push(ChatMessage::new(ChatRole::Assistant, reply.clone()));
                Ok(reply)
            }
            Err(e) => {
                warn!("Chat turn failed: {}", e);
                self.messages.push(ChatMessage::new(ChatRole::Assistant, CHAT_APOLOGY));
                Err(e.into())
            }
        }
    }
}
