//! OpenAI-compatible chat-completion client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{ChatCompletion, ServiceError, Unconfigured};
use crate::config::AiConfig;

#[derive(Debug, Serialize)]
struct RequestMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<RequestMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for `POST {base_url}/chat/completions`
#[derive(Clone)]
pub struct HttpCompletion {
    client: Client,
    base_url: String,
    model: String,
}

impl HttpCompletion {
    /// Build a client, reading the API key from the configured environment variable
    pub fn new(config: &AiConfig) -> Result<Self, ServiceError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ServiceError::Unavailable(format!("{} is not set", config.api_key_env)))?;
        Self::with_api_key(config, &api_key)
    }

    pub fn with_api_key(config: &AiConfig, api_key: &str) -> Result<Self, ServiceError> {
        if config.base_url.trim().is_empty() {
            return Err(ServiceError::Unavailable("no AI endpoint configured".into()));
        }

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", api_key))
                .map_err(|e| ServiceError::Unavailable(format!("Invalid API key format: {}", e)))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ServiceError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    /// The configured service, or [`Unconfigured`] explaining why there is none
    pub fn connect(config: &AiConfig) -> Box<dyn ChatCompletion> {
        match Self::new(config) {
            Ok(client) => Box::new(client),
            Err(e) => {
                warn!("AI tools disabled: {}", e);
                Box::new(Unconfigured::new(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl ChatCompletion for HttpCompletion {
    async fn complete(&self, prompt: &str) -> Result<String, ServiceError> {
        let url = format!("{}/chat/completions", self.base_url);
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![RequestMessage { role: "user", content: prompt }],
            stream: false,
        };

        debug!("Sending completion request: model={}, {} chars", self.model, prompt.len());

        let response = self.client.post(&url).json(&request).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ServiceError::Unavailable(e.to_string())
            } else {
                ServiceError::Request(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!("Completion request failed with {}", status);
            return Err(ServiceError::Request(format!("API error ({}): {}", status, error_text)));
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::Request(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ServiceError::EmptyResponse)
    }
}
