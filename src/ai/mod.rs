//! AI-backed tools
//!
//! Every AI tool builds a single prompt string and hands it to a
//! [`ChatCompletion`] implementation. The transport is injected so prompt
//! construction and error handling can be exercised without a network.

mod chat;
mod client;
mod prompts;

pub use chat::{ChatMessage, ChatRole, ChatSession, CHAT_APOLOGY, CHAT_GREETING};
pub use client::HttpCompletion;
pub use prompts::{detect_foreign_words, enhance_synonyms, rewrite, summarize, truncate_for_summary};

use async_trait::async_trait;
use thiserror::Error;

/// Failure of the external completion service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No service is configured or it could not be reached
    #[error("AI service is not available: {0}")]
    Unavailable(String),

    /// The service answered without any content
    #[error("The AI service returned an empty response.")]
    EmptyResponse,

    /// The service rejected or failed the request
    #[error("AI request failed: {0}")]
    Request(String),
}

/// A chat-completion capability: one prompt in, one text out
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ServiceError>;
}

/// Stand-in used when no endpoint or key is configured
#[derive(Debug, Clone)]
pub struct Unconfigured {
    reason: String,
}

impl Unconfigured {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[async_trait]
impl ChatCompletion for Unconfigured {
    async fn complete(&self, _prompt: &str) -> Result<String, ServiceError> {
        Err(ServiceError::Unavailable(self.reason.clone()))
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::Mutex;

    use super::*;

    /// Scripted completion that records every prompt it receives
    pub struct MockCompletion {
        responses: Mutex<Vec<Result<String, ServiceError>>>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl MockCompletion {
        pub fn new(responses: Vec<Result<String, ServiceError>>) -> Self {
            Self { responses: Mutex::new(responses), prompts: Mutex::new(Vec::new()) }
        }

        pub fn replying(text: &str) -> Self {
            Self::new(vec![Ok(text.to_string())])
        }

        pub fn last_prompt(&self) -> String {
            self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl ChatCompletion for MockCompletion {
        async fn complete(&self, prompt: &str) -> Result<String, ServiceError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                return Err(ServiceError::Unavailable("mock exhausted".into()));
            }
            responses.remove(0)
        }
    }
}
