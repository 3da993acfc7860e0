//! Gemini Provider - Implementation of TextGenerator for Google's Gemini API.
//!
//! Uses the REST `generateContent` endpoint with the API key sent in the
//! `x-goog-api-key` header, so it never appears in a request URL or in
//! transport error text. One request per `generate` call; nothing is retried.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(api_key)
//!     .with_model("gemini-1.5-flash")
//!     .with_timeout(Duration::from_secs(60));
//!
//! let provider = GeminiProvider::new(config)?.resolve_model().await?;
//! ```
//!
//! # Errors
//!
//! Every failure becomes an `AIError` whose message names its failure mode
//! ("rate limit", "api key", "not found", "blocked", "connection", ...), which
//! is what the drafting failure classifier keys on.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::ports::{AIError, ProviderInfo, TextGenerator};

/// Prompt used to check that a model answers at all.
const PROBE_PROMPT: &str = "Say 'test'";

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Generation method a fallback model must support.
const GENERATE_METHOD: &str = "generateContent";

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-1.5-flash").
    pub model: String,
    /// API root including the version (default: https://generativelanguage.googleapis.com/v1beta).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a provider for the configured model.
    ///
    /// # Errors
    ///
    /// `Unavailable` if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::unavailable(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// The model requests are sent to.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Makes sure the configured model answers, switching models if it does not.
    ///
    /// Sends a short probe prompt. If that fails, lists the models available
    /// to the API key and takes the first one that supports `generateContent`.
    ///
    /// # Errors
    ///
    /// `Unavailable` when no usable model can be found.
    pub async fn resolve_model(mut self) -> Result<Self, AIError> {
        match self.generate_with(&self.config.model, PROBE_PROMPT).await {
            Ok(text) if !text.trim().is_empty() => {
                info!(model = %self.config.model, "Gemini model available");
                return Ok(self);
            }
            Ok(_) => debug!(model = %self.config.model, "Gemini model probe returned no text"),
            Err(err) => debug!(model = %self.config.model, error = %err, "Gemini model probe failed"),
        }

        let models = self.list_models().await.map_err(|err| {
            error!(error = %err, "Could not list available Gemini models");
            err
        })?;
        for model in &models {
            warn!(model = %model.name, methods = ?model.supported_generation_methods, "Available Gemini model");
        }

        match pick_model(&models) {
            Some(model) => {
                warn!(
                    configured = %self.config.model,
                    selected = %model,
                    "Configured Gemini model unavailable, falling back"
                );
                self.config.model = model;
                Ok(self)
            }
            None => Err(AIError::unavailable(
                "no available Gemini models found, check the API key",
            )),
        }
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.config.base_url, model)
    }

    fn models_url(&self) -> String {
        format!("{}/models", self.config.base_url)
    }

    async fn generate_with(&self, model: &str, prompt: &str) -> Result<String, AIError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.generate_url(model))
            .header(API_KEY_HEADER, self.config.api_key())
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let response = check_status(response, model).await?;

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("failed to parse response: {}", e)))?;

        extract_text(parsed)
    }

    async fn list_models(&self) -> Result<Vec<ModelDescription>, AIError> {
        let response = self
            .client
            .get(self.models_url())
            .header(API_KEY_HEADER, self.config.api_key())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let response = check_status(response, &self.config.model).await?;

        let parsed: ListModelsResponse = response
            .json()
            .await
            .map_err(|e| AIError::parse(format!("failed to parse model list: {}", e)))?;
        Ok(parsed.models)
    }

    fn transport_error(&self, err: reqwest::Error) -> AIError {
        if err.is_timeout() {
            AIError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else {
            AIError::network(err.without_url().to_string())
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, AIError> {
        self.generate_with(&self.config.model, prompt).await
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.model)
    }
}

/// Turns a non-success response into the matching `AIError`.
async fn check_status(response: Response, model: &str) -> Result<Response, AIError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = match response.text().await {
        Ok(body) => body,
        Err(err) => {
            debug!(%status, error = %err.without_url(), "Could not read Gemini error body");
            String::new()
        }
    };
    Err(status_error(status, &body, model))
}

fn status_error(status: StatusCode, body: &str, model: &str) -> AIError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string());

    match status.as_u16() {
        429 => AIError::rate_limited(message),
        401 | 403 => AIError::authentication_failed(message),
        404 => AIError::model_not_found(model),
        // An invalid key is reported as 400 INVALID_ARGUMENT.
        400 if message.to_lowercase().contains("api key") => AIError::authentication_failed(message),
        400 => AIError::invalid_request(message),
        500..=599 => AIError::unavailable(format!("server error {}: {}", status, message)),
        _ => AIError::unavailable(format!("unexpected status {}: {}", status, message)),
    }
}

/// Concatenated text of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String, AIError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(AIError::blocked(format!("prompt blocked ({})", reason)));
    }

    let candidate = match response.candidates.into_iter().next() {
        Some(candidate) => candidate,
        None => return Ok(String::new()),
    };

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() && candidate.finish_reason.as_deref() == Some("SAFETY") {
        return Err(AIError::blocked("response stopped for safety"));
    }

    Ok(text)
}

/// First model that supports `generateContent`, without the `models/` prefix.
fn pick_model(models: &[ModelDescription]) -> Option<String> {
    models
        .iter()
        .find(|m| {
            m.supported_generation_methods
                .iter()
                .any(|method| method == GENERATE_METHOD)
        })
        .map(|m| m.name.trim_start_matches("models/").to_string())
}

// ----- Gemini API Types -----

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelDescription>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelDescription {
    name: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::drafting::FailureCategory;
    use axum::extract::Path;
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::{get, post};
    use axum::{Json, Router};
    use serde_json::{json, Value};

    fn response(value: Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    fn category(err: &AIError) -> FailureCategory {
        FailureCategory::classify(&err.to_string())
    }

    #[test]
    fn config_builder_sets_fields() {
        let config = GeminiConfig::new("key")
            .with_model("gemini-pro")
            .with_base_url("http://localhost:1234/v1beta/")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.model, "gemini-pro");
        assert_eq!(config.base_url, "http://localhost:1234/v1beta");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.api_key(), "key");
    }

    #[test]
    fn api_key_is_not_printed_by_debug() {
        let config = GeminiConfig::new("super-secret-key");
        assert!(!format!("{:?}", config).contains("super-secret-key"));
    }

    #[test]
    fn extracts_text_of_first_candidate() {
        let text = extract_text(response(json!({
            "candidates": [
                {"content": {"parts": [{"text": "Title: A"}, {"text": "\nContent: B."}]}, "finishReason": "STOP"},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        })))
        .unwrap();

        assert_eq!(text, "Title: A\nContent: B.");
    }

    #[test]
    fn prompt_block_is_content_blocked() {
        let err = extract_text(response(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        })))
        .unwrap_err();

        assert!(matches!(err, AIError::Blocked(_)));
        assert_eq!(category(&err), FailureCategory::ContentBlocked);
    }

    #[test]
    fn safety_finish_without_text_is_content_blocked() {
        let err = extract_text(response(json!({
            "candidates": [{"finishReason": "SAFETY"}]
        })))
        .unwrap_err();

        assert_eq!(category(&err), FailureCategory::ContentBlocked);
    }

    #[test]
    fn no_candidates_is_empty_text() {
        assert_eq!(extract_text(response(json!({}))).unwrap(), "");
    }

    #[test]
    fn status_errors_classify_as_expected() {
        let body = r#"{"error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}}"#;
        let cases = [
            (StatusCode::TOO_MANY_REQUESTS, body, FailureCategory::RateLimit),
            (StatusCode::FORBIDDEN, "denied", FailureCategory::AuthFailure),
            (
                StatusCode::BAD_REQUEST,
                r#"{"error": {"message": "API key not valid. Please pass a valid API key."}}"#,
                FailureCategory::AuthFailure,
            ),
            (StatusCode::NOT_FOUND, "", FailureCategory::ModelUnavailable),
            (
                StatusCode::BAD_REQUEST,
                r#"{"error": {"message": "Request contains an invalid value"}}"#,
                FailureCategory::InvalidRequest,
            ),
            (StatusCode::INTERNAL_SERVER_ERROR, "boom", FailureCategory::Unknown),
        ];

        for (status, body, expected) in cases {
            let err = status_error(status, body, "gemini-1.5-flash");
            assert_eq!(category(&err), expected, "status {} gave {:?}", status, err);
        }
    }

    #[test]
    fn picks_first_model_supporting_generate_content() {
        let models = vec![
            ModelDescription {
                name: "models/embedding-001".to_string(),
                supported_generation_methods: vec!["embedContent".to_string()],
            },
            ModelDescription {
                name: "models/gemini-pro".to_string(),
                supported_generation_methods: vec![
                    "generateContent".to_string(),
                    "countTokens".to_string(),
                ],
            },
        ];

        assert_eq!(pick_model(&models), Some("gemini-pro".to_string()));
        assert_eq!(pick_model(&models[..1]), None);
    }

    /// Serves a fake Gemini API on an ephemeral port.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/v1beta", addr)
    }

    fn provider(base_url: String, model: &str) -> GeminiProvider {
        GeminiProvider::new(
            GeminiConfig::new("test-key")
                .with_base_url(base_url)
                .with_model(model)
                .with_timeout(Duration::from_secs(5)),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn generate_posts_prompt_and_returns_text() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(|Path(call): Path<String>, Json(body): Json<Value>| async move {
                assert_eq!(call, "gemini-1.5-flash:generateContent");
                let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or("");
                Json(json!({
                    "candidates": [{"content": {"parts": [{"text": format!("echo: {}", prompt)}]}}]
                }))
            }),
        );
        let base = serve(router).await;

        let text = provider(base, "gemini-1.5-flash").generate("hello").await.unwrap();

        assert_eq!(text, "echo: hello");
    }

    #[tokio::test]
    async fn rate_limited_response_maps_to_rate_limit() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(|| async {
                (
                    AxumStatus::TOO_MANY_REQUESTS,
                    Json(json!({"error": {"code": 429, "message": "Quota exceeded for requests"}})),
                )
            }),
        );
        let base = serve(router).await;

        let err = provider(base, "gemini-1.5-flash").generate("hello").await.unwrap_err();

        assert!(matches!(err, AIError::RateLimited(_)));
        assert_eq!(category(&err), FailureCategory::RateLimit);
    }

    #[tokio::test]
    async fn unreachable_host_is_connection_error() {
        let err = provider("http://127.0.0.1:9/v1beta".to_string(), "gemini-1.5-flash")
            .generate("hello")
            .await
            .unwrap_err();

        assert_eq!(category(&err), FailureCategory::ConnectionError);
        assert!(!err.to_string().contains("test-key"), "{}", err);
    }

    #[tokio::test]
    async fn api_key_travels_in_header_not_url() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(
                |headers: axum::http::HeaderMap, uri: axum::http::Uri| async move {
                    let key = headers
                        .get(API_KEY_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    let query = uri.query().unwrap_or_default().to_string();
                    Json(json!({
                        "candidates": [{"content": {"parts": [{"text": format!("{}|{}", key, query)}]}}]
                    }))
                },
            ),
        );
        let base = serve(router).await;

        let text = provider(base, "gemini-1.5-flash").generate("hello").await.unwrap();

        assert_eq!(text, "test-key|");
    }

    #[tokio::test]
    async fn resolve_model_falls_back_to_listed_model() {
        let router = Router::new()
            .route(
                "/v1beta/models/:call",
                post(|Path(call): Path<String>| async move {
                    if call.starts_with("gemini-pro:") {
                        (AxumStatus::OK, Json(json!({"candidates": [{"content": {"parts": [{"text": "test"}]}}]})))
                    } else {
                        (AxumStatus::NOT_FOUND, Json(json!({"error": {"message": "not found"}})))
                    }
                }),
            )
            .route(
                "/v1beta/models",
                get(|| async {
                    Json(json!({"models": [
                        {"name": "models/embedding-001", "supportedGenerationMethods": ["embedContent"]},
                        {"name": "models/gemini-pro", "supportedGenerationMethods": ["generateContent"]}
                    ]}))
                }),
            );
        let base = serve(router).await;

        let resolved = provider(base, "gemini-retired").resolve_model().await.unwrap();

        assert_eq!(resolved.model(), "gemini-pro");
        assert_eq!(resolved.provider_info().model, "gemini-pro");
    }

    #[tokio::test]
    async fn resolve_model_keeps_working_model() {
        let router = Router::new().route(
            "/v1beta/models/:call",
            post(|| async { Json(json!({"candidates": [{"content": {"parts": [{"text": "test"}]}}]})) }),
        );
        let base = serve(router).await;

        let resolved = provider(base, "gemini-1.5-flash").resolve_model().await.unwrap();

        assert_eq!(resolved.model(), "gemini-1.5-flash");
    }
}
