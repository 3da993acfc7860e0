//! AI provider configuration (Gemini)

use serde::Deserialize;
use std::time::Duration;
use url::Url;

use super::error::ValidationError;
use super::server::Environment;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key
    pub gemini_api_key: Option<String>,

    /// Model to generate with
    #[serde(default = "default_model")]
    pub model: String,

    /// REST endpoint root, up to and including the API version
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Check the model with a tiny prompt at startup and fall back to any
    /// model that supports `generateContent` if it is unavailable
    #[serde(default)]
    pub probe_on_startup: bool,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if Gemini is configured
    pub fn has_gemini(&self) -> bool {
        self.gemini_api_key
            .as_ref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if !self.has_gemini() {
            return Err(ValidationError::MissingRequired("AI__GEMINI_API_KEY"));
        }
        if self.model.trim().is_empty() {
            return Err(ValidationError::MissingRequired("AI__MODEL"));
        }
        let base = Url::parse(&self.base_url).map_err(|_| ValidationError::InvalidAiBaseUrl)?;
        if *environment == Environment::Production && base.scheme() != "https" {
            return Err(ValidationError::AiBaseUrlMustBeHttps);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            probe_on_startup: false,
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> AiConfig {
        AiConfig {
            gemini_api_key: Some("AIza-test".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert!(!config.probe_on_startup);
    }

    #[test]
    fn test_validation_requires_key() {
        assert_eq!(
            AiConfig::default().validate(&Environment::Development),
            Err(ValidationError::MissingRequired("AI__GEMINI_API_KEY"))
        );

        let blank = AiConfig {
            gemini_api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(!blank.has_gemini());
    }

    #[test]
    fn test_validation_base_url() {
        let config = AiConfig {
            base_url: "not a url".to_string(),
            ..configured()
        };
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::InvalidAiBaseUrl)
        );

        let config = AiConfig {
            base_url: "http://localhost:9999/v1beta".to_string(),
            ..configured()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::AiBaseUrlMustBeHttps)
        );
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(configured().validate(&Environment::Production).is_ok());
    }
}
