//! Request and result types for draft generation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Maximum keyword length accepted for generation.
pub const MAX_KEYWORD_LENGTH: usize = 200;

/// Input to a single draft generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    keyword: String,
    category_hints: Vec<String>,
}

impl GenerationRequest {
    /// Creates a request, trimming the keyword.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the keyword is blank
    /// - `TooLong` if the keyword exceeds `MAX_KEYWORD_LENGTH` characters
    pub fn new(
        keyword: impl Into<String>,
        category_hints: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let keyword = keyword.into().trim().to_string();
        if keyword.is_empty() {
            return Err(ValidationError::empty_field("keyword"));
        }
        if keyword.chars().count() > MAX_KEYWORD_LENGTH {
            return Err(ValidationError::too_long("keyword", MAX_KEYWORD_LENGTH));
        }
        Ok(Self {
            keyword,
            category_hints,
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn category_hints(&self) -> &[String] {
        &self.category_hints
    }
}

/// Outcome of a draft generation, serialized as-is to API clients.
///
/// # Invariants
///
/// - `success == true`: `title` and `content` are non-empty, `content` ends in
///   `.`, `!` or `?`, and `error` is `None`
/// - `success == false`: `title` and `content` are empty and `error` holds a
///   user-facing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub success: bool,
    pub title: String,
    pub content: String,
    pub error: Option<String>,
}

impl GenerationResult {
    /// A successful draft.
    pub fn drafted(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            success: true,
            title: title.into(),
            content: content.into(),
            error: None,
        }
    }

    /// A failed generation carrying a user-facing message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            title: String::new(),
            content: String::new(),
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_trims_keyword() {
        let request = GenerationRequest::new("  rust  ", vec!["Tech".into()]).unwrap();
        assert_eq!(request.keyword(), "rust");
        assert_eq!(request.category_hints(), ["Tech".to_string()]);
    }

    #[test]
    fn request_rejects_blank_keyword() {
        assert_eq!(
            GenerationRequest::new("   ", vec![]),
            Err(ValidationError::empty_field("keyword"))
        );
    }

    #[test]
    fn request_rejects_overlong_keyword() {
        let keyword = "k".repeat(MAX_KEYWORD_LENGTH + 1);
        assert!(GenerationRequest::new(keyword, vec![]).is_err());
    }

    #[test]
    fn failed_result_has_empty_fields() {
        let result = GenerationResult::failed("boom");
        assert!(!result.success);
        assert!(result.title.is_empty());
        assert!(result.content.is_empty());
        assert_eq!(result.error.as_deref(), Some("boom"));
    }

    #[test]
    fn result_serializes_all_four_fields() {
        let json = serde_json::to_value(GenerationResult::drafted("Title here", "Body.")).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["title"], "Title here");
        assert_eq!(json["content"], "Body.");
        assert!(json["error"].is_null());
    }
}
