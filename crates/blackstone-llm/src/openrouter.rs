//! OpenRouter provider implementation
//!
//! Talks to OpenRouter's hosted chat-completions API. The provider is
//! constructed explicitly at process entry, used for the single analysis
//! call, and discarded at process exit; there is no global client state.
//!
//! The pipeline makes exactly one call per run, so unlike a long-lived
//! service client there is no retry or backoff here: any fault is returned
//! to the caller and the run ends.

use crate::{ChatMessage, ChatProvider, ChatRequest, LlmError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default OpenRouter API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1";

/// Default request timeout (the single call carries a whole document)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Referer header recommended by OpenRouter for request attribution
pub const DEFAULT_REFERER: &str = "https://github.com/your-org/blackstone";

/// Hosted chat-completion provider backed by OpenRouter
pub struct OpenRouterProvider {
    endpoint: String,
    api_key: String,
    referer: String,
    client: reqwest::Client,
}

/// Request body for the chat-completions endpoint
#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Response body from the chat-completions endpoint
#[derive(Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OpenRouterProvider {
    /// Create a provider against the default OpenRouter endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key)
    }

    /// Create a provider against a specific endpoint.
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL (e.g. "https://openrouter.ai/api/v1")
    /// - `api_key`: bearer credential for the service
    pub fn with_endpoint(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            referer: DEFAULT_REFERER.to_string(),
            client,
        }
    }

    /// Override the HTTP-Referer header sent with each request.
    pub fn with_referer(mut self, referer: impl Into<String>) -> Self {
        self.referer = referer.into();
        self
    }
}

impl ChatProvider for OpenRouterProvider {
    /// Send one chat-completion request
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The network request fails outright
    /// - The credential is rejected (HTTP 401/403)
    /// - A rate limit or credit quota is hit (HTTP 402/429)
    /// - The service returns any other non-success status
    /// - The response body cannot be decoded
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let body = CompletionRequest {
            model: &request.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            response_format: request.json_response.then_some(ResponseFormat {
                format_type: "json_object",
            }),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", &self.referer)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Auth(text));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS
            || status == reqwest::StatusCode::PAYMENT_REQUIRED
        {
            return Err(LlmError::RateLimited);
        }
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no choices".to_string()))?;

        Ok(choice.message.content)
    }
}
