//! Blackstone LLM Provider Layer
//!
//! Chat-completion providers behind a common [`ChatProvider`] trait.
//!
//! # Providers
//!
//! - `OpenRouterProvider`: hosted OpenRouter chat-completions API
//! - `MockProvider`: deterministic mock for testing, with call counting
//!
//! # Examples
//!
//! ```
//! use blackstone_llm::{ChatMessage, ChatProvider, ChatRequest, MockProvider};
//!
//! # async fn example() {
//! let provider = MockProvider::new(r#"{"ok": true}"#);
//! let request = ChatRequest::new("anthropic/claude-3-haiku")
//!     .message(ChatMessage::system("Reply with JSON."))
//!     .message(ChatMessage::user("hello"));
//! let body = provider.complete(&request).await.unwrap();
//! assert_eq!(body, r#"{"ok": true}"#);
//! assert_eq!(provider.call_count(), 1);
//! # }
//! ```

#![warn(missing_docs)]

pub mod openrouter;

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openrouter::OpenRouterProvider;

/// Errors that can occur during chat-completion calls
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or connection fault
    #[error("Transport error: {0}")]
    Transport(String),

    /// Credential rejected by the service
    #[error("Authentication rejected: {0}")]
    Auth(String),

    /// Rate limit or quota exhausted
    #[error("Rate limit or quota exceeded")]
    RateLimited,

    /// Any other non-success response from the service
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or status text
        message: String,
    },

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Role of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Fixed instructions for the model
    System,
    /// The content under analysis
    User,
}

/// One message in a chat-completion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role
    pub role: Role,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Create a system-role message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Create a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A complete chat-completion request
///
/// Temperature defaults to 0.0 (deterministic output preference) and the
/// JSON-object response directive is on by default; both can be overridden
/// through the builder methods.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// Model identifier (e.g. "anthropic/claude-3-haiku")
    pub model: String,
    /// Messages in conversation order
    pub messages: Vec<ChatMessage>,
    /// Maximum output-token budget
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Ask the service to return a bare JSON object as the body
    pub json_response: bool,
}

impl ChatRequest {
    /// Create a request for the given model with pipeline defaults.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            max_tokens: 4096,
            temperature: 0.0,
            json_response: true,
        }
    }

    /// Append a message.
    pub fn message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Override the output-token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Common interface over chat-completion backends
pub trait ChatProvider {
    /// Send one request and return the raw text of the first choice.
    fn complete(
        &self,
        request: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;
}

/// Mock chat provider for deterministic testing
///
/// Returns a pre-configured response without making any network calls, and
/// records every request it receives.
///
/// # Examples
///
/// ```
/// use blackstone_llm::{ChatProvider, ChatRequest, MockProvider};
///
/// # async fn example() {
/// let provider = MockProvider::new("canned response");
/// let request = ChatRequest::new("test-model");
/// assert_eq!(provider.complete(&request).await.unwrap(), "canned response");
/// assert_eq!(provider.call_count(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    response: String,
    fail_with: Option<String>,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockProvider {
    /// Create a MockProvider returning a fixed response body
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            fail_with: None,
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a MockProvider that fails every call with an API error
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: String::new(),
            fail_with: Some(message.into()),
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of times `complete` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// The most recent request, if any call was made
    pub fn last_request(&self) -> Option<ChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl ChatProvider for MockProvider {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;
        self.requests.lock().unwrap().push(request.clone());

        if let Some(message) = &self.fail_with {
            return Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            });
        }
        Ok(self.response.clone())
    }
}
