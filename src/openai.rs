//! Client for the upstream OpenAI-compatible chat completions API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompts::SYSTEM_PROMPT;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("OpenAI API key not configured. Please set OPENAI_API_KEY environment variable.")]
    MissingApiKey,
    #[error("OpenAI API error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("OpenAI API error: status {status}: {body}")]
    BadStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("OpenAI API error: response contained no choices")]
    EmptyCompletion,
}

#[derive(Deserialize, Serialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: ChatMessage,
}

pub struct CompletionClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl CompletionClient {
    pub fn new(base_url: String, api_key: Option<String>, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
            model,
        }
    }

    /// Send `user_message` to the completions API, prefixed with the analyst
    /// system prompt and any prior conversation turns, and return the
    /// assistant's text.
    pub async fn complete(
        &self,
        user_message: &str,
        conversation_history: Option<&[ChatMessage]>,
    ) -> Result<String, UpstreamError> {
        let api_key = self.api_key.as_ref().ok_or(UpstreamError::MissingApiKey)?;

        let mut messages = vec![ChatMessage::new("system", SYSTEM_PROMPT)];
        if let Some(history) = conversation_history {
            messages.extend_from_slice(history);
        }
        messages.push(ChatMessage::new("user", user_message));

        let request = CompletionRequest {
            model: &self.model,
            messages: &messages,
            temperature: 0.7,
            max_tokens: 1000,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::BadStatus { status, body });
        }

        let completion: CompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(UpstreamError::EmptyCompletion)
    }
}
