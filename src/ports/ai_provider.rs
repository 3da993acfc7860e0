//! Text generation port - interface to the remote AI service.
//!
//! The drafting flow needs exactly one thing from a model: turn a prompt into
//! text. Failures are reported as `AIError`, whose display text is what the
//! failure classifier reads, so every variant's message names its failure mode
//! in plain words ("rate limit", "api key", "not found", ...).
//!
//! # Example
//!
//! ```ignore
//! struct EchoGenerator;
//!
//! #[async_trait]
//! impl TextGenerator for EchoGenerator {
//!     async fn generate(&self, prompt: &str) -> Result<String, AIError> {
//!         Ok(format!("Title: Echo\nContent: {}", prompt))
//!     }
//!
//!     fn provider_info(&self) -> ProviderInfo {
//!         ProviderInfo::new("echo", "echo-1")
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for single-shot text generation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends `prompt` and returns the generated text.
    ///
    /// Exactly one upstream request is made; there is no retry.
    async fn generate(&self, prompt: &str) -> Result<String, AIError>;

    /// Provider name and model in use.
    fn provider_info(&self) -> ProviderInfo;
}

/// Provider information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "gemini", "mock").
    pub name: String,
    /// Model identifier (e.g., "gemini-1.5-flash").
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Text generation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AIError {
    /// Rate limited or out of quota.
    #[error("rate limit exceeded: {0}")]
    RateLimited(String),

    /// API key rejected.
    #[error("authentication failed, check the api key: {0}")]
    AuthenticationFailed(String),

    /// Model does not exist or is not enabled for this key.
    #[error("model '{model}' not found")]
    ModelNotFound { model: String },

    /// Prompt or response stopped by the provider's safety system.
    #[error("content blocked by safety filters: {0}")]
    Blocked(String),

    /// Request rejected as malformed.
    #[error("invalid argument: {0}")]
    InvalidRequest(String),

    /// Transport failure before a response arrived.
    #[error("connection failed: {0}")]
    Network(String),

    /// No response within the configured time.
    #[error("request timeout after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    /// Provider-side failure (5xx).
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Response body could not be understood.
    #[error("unexpected response: {0}")]
    Parse(String),
}

impl AIError {
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited(message.into())
    }

    pub fn authentication_failed(message: impl Into<String>) -> Self {
        Self::AuthenticationFailed(message.into())
    }

    pub fn model_not_found(model: impl Into<String>) -> Self {
        Self::ModelNotFound {
            model: model.into(),
        }
    }

    pub fn blocked(reason: impl Into<String>) -> Self {
        Self::Blocked(reason.into())
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
