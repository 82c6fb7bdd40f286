//! Conversational engine for memchat.
//!
//! Provides a Gemini API client with:
//! - Single-turn text generation from a rendered prompt
//! - Lazy, paginated model listing
//! - Chat sessions with a bounded context window of prior turns
//! - Token usage tracking

pub mod conversation;
pub mod gemini;
pub mod models;
pub mod session;
pub mod token_tracker;

use async_trait::async_trait;

pub use conversation::{ContextWindow, Conversation, Role, Turn, DEFAULT_CONTEXT_TURNS};
pub use gemini::{GeminiClient, GeminiConfig};
pub use models::{model_stream, ModelInfo, ModelPage};
pub use session::{ChatError, ChatSession, SessionStore};
pub use token_tracker::TokenTracker;

/// A remote operation mapping a prompt to generated text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Generation, AiError>;
}

/// A remote source of model metadata, read one page at a time.
#[async_trait]
pub trait ModelCatalog: Send + Sync {
    /// Fetch the page addressed by `page_token` (`None` for the first page).
    async fn fetch_page(&self, page_token: Option<&str>) -> Result<ModelPage, AiError>;
}

/// Result of one generation call.
#[derive(Debug, Clone)]
pub struct Generation {
    pub text: String,
    /// Model version reported by the server, when present.
    pub model_version: Option<String>,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

/// Broad category of an [`AiError`], for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiErrorKind {
    Api,
    Unauthorized,
    RateLimited,
    Network,
    Parse,
    Timeout,
    EmptyResponse,
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Empty response: {0}")]
    EmptyResponse(String),
}

impl AiError {
    pub fn kind(&self) -> AiErrorKind {
        match self {
            AiError::ApiError(_) => AiErrorKind::Api,
            AiError::Unauthorized(_) => AiErrorKind::Unauthorized,
            AiError::RateLimited => AiErrorKind::RateLimited,
            AiError::NetworkError(_) => AiErrorKind::Network,
            AiError::ParseError(_) => AiErrorKind::Parse,
            AiError::Timeout => AiErrorKind::Timeout,
            AiError::EmptyResponse(_) => AiErrorKind::EmptyResponse,
        }
    }
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AiError::Timeout
        } else if e.is_decode() {
            AiError::ParseError(e.to_string())
        } else {
            AiError::NetworkError(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_usage_total_saturates() {
        let usage = TokenUsage {
            input_tokens: u64::MAX,
            output_tokens: 5,
        };
        assert_eq!(usage.total_tokens(), u64::MAX);
    }

    #[test]
    fn ai_error_display() {
        assert_eq!(AiError::RateLimited.to_string(), "Rate limited");
        assert_eq!(AiError::Timeout.to_string(), "Timeout");
        assert_eq!(
            AiError::ApiError("HTTP 500: boom".into()).to_string(),
            "API error: HTTP 500: boom"
        );
        assert_eq!(
            AiError::Unauthorized("API key not valid".into()).to_string(),
            "Unauthorized: API key not valid"
        );
    }

    #[test]
    fn ai_error_kind() {
        assert_eq!(AiError::RateLimited.kind(), AiErrorKind::RateLimited);
        assert_eq!(
            AiError::NetworkError("dns".into()).kind(),
            AiErrorKind::Network
        );
        assert_eq!(
            AiError::EmptyResponse("SAFETY".into()).kind(),
            AiErrorKind::EmptyResponse
        );
    }
}
