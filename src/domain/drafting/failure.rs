//! Classification of upstream generation failures.
//!
//! The text service reports failures as free-form messages. They are mapped to
//! a fixed set of categories by scanning the lower-cased message against an
//! ordered rule table; the first rule with a matching needle wins.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::GenerationResult;

/// User-facing category of a failed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCategory {
    RateLimit,
    AuthFailure,
    ModelUnavailable,
    ContentBlocked,
    ConnectionError,
    InvalidRequest,
    Unknown,
}

/// Ordered classification rules. Order matters: a message mentioning both a
/// rate limit and a timeout is a rate limit.
const CLASSIFICATION_RULES: &[(&[&str], FailureCategory)] = &[
    (&["quota exceeded", "rate limit"], FailureCategory::RateLimit),
    (&["api key", "authentication"], FailureCategory::AuthFailure),
    (&["not found", "404"], FailureCategory::ModelUnavailable),
    (&["blocked", "safety"], FailureCategory::ContentBlocked),
    (&["connection", "timeout"], FailureCategory::ConnectionError),
    (&["invalid argument"], FailureCategory::InvalidRequest),
];

impl FailureCategory {
    /// Classifies a raw failure message.
    pub fn classify(message: &str) -> Self {
        let lowered = message.to_lowercase();
        CLASSIFICATION_RULES
            .iter()
            .find(|(needles, _)| needles.iter().any(|needle| lowered.contains(needle)))
            .map(|(_, category)| *category)
            .unwrap_or(FailureCategory::Unknown)
    }

    /// Stable snake_case name, used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureCategory::RateLimit => "rate_limit",
            FailureCategory::AuthFailure => "auth_failure",
            FailureCategory::ModelUnavailable => "model_unavailable",
            FailureCategory::ContentBlocked => "content_blocked",
            FailureCategory::ConnectionError => "connection_error",
            FailureCategory::InvalidRequest => "invalid_request",
            FailureCategory::Unknown => "unknown",
        }
    }

    /// Message shown to the user. Only `Unknown` echoes the original text.
    pub fn user_message(&self, original: &str) -> String {
        match self {
            FailureCategory::RateLimit => {
                "API rate limit exceeded. Please try again in a moment.".to_string()
            }
            FailureCategory::AuthFailure => {
                "API authentication failed. Please check the configured Gemini API key.".to_string()
            }
            FailureCategory::ModelUnavailable => {
                "AI model not available. Please try again later or contact support.".to_string()
            }
            FailureCategory::ContentBlocked => {
                "Content was blocked by safety filters. Please try a different keyword.".to_string()
            }
            FailureCategory::ConnectionError => {
                "Connection error. Please check your internet connection and try again."
                    .to_string()
            }
            FailureCategory::InvalidRequest => {
                "Invalid request. Please try a different keyword.".to_string()
            }
            FailureCategory::Unknown => format!("An unexpected error occurred: {}", original),
        }
    }
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GenerationResult {
    /// Converts an upstream failure message into a failed result.
    pub fn from_failure(message: &str) -> Self {
        let category = FailureCategory::classify(message);
        tracing::error!(category = category.as_str(), error = message, "draft generation failed");
        GenerationResult::failed(category.user_message(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_category() {
        let cases = [
            ("Quota exceeded for project", FailureCategory::RateLimit),
            ("Rate limit exceeded, please slow down", FailureCategory::RateLimit),
            ("API key not valid", FailureCategory::AuthFailure),
            ("Authentication failed", FailureCategory::AuthFailure),
            ("models/gemini-x is not found", FailureCategory::ModelUnavailable),
            ("HTTP 404", FailureCategory::ModelUnavailable),
            ("Response was blocked", FailureCategory::ContentBlocked),
            ("SAFETY finish reason", FailureCategory::ContentBlocked),
            ("connection refused", FailureCategory::ConnectionError),
            ("request timeout after 60s", FailureCategory::ConnectionError),
            ("400 Invalid argument: prompt", FailureCategory::InvalidRequest),
            ("something odd", FailureCategory::Unknown),
        ];

        for (message, expected) in cases {
            assert_eq!(FailureCategory::classify(message), expected, "{message}");
        }
    }

    #[test]
    fn first_matching_rule_wins() {
        // Mentions both an api key and a timeout: auth is checked first.
        assert_eq!(
            FailureCategory::classify("api key lookup timeout"),
            FailureCategory::AuthFailure
        );
        // "not found" precedes "connection".
        assert_eq!(
            FailureCategory::classify("connection target not found"),
            FailureCategory::ModelUnavailable
        );
    }

    #[test]
    fn rate_limit_failure_produces_empty_failed_result() {
        let result = GenerationResult::from_failure("Rate limit exceeded, please slow down");

        assert!(!result.success);
        assert_eq!(result.title, "");
        assert_eq!(result.content, "");
        assert_eq!(
            result.error.as_deref(),
            Some("API rate limit exceeded. Please try again in a moment.")
        );
    }

    #[test]
    fn unknown_failure_echoes_original_message() {
        let result = GenerationResult::from_failure("Kaboom: disk on fire");
        assert_eq!(
            result.error.as_deref(),
            Some("An unexpected error occurred: Kaboom: disk on fire")
        );
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&FailureCategory::ModelUnavailable).unwrap();
        assert_eq!(json, "\"model_unavailable\"");
        assert_eq!(FailureCategory::ConnectionError.to_string(), "connection_error");
    }
}
