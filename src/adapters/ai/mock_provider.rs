//! Mock text generator for testing.
//!
//! Answers from a queue of canned responses and errors and records every
//! prompt it receives, so tests run without calling Gemini.
//!
//! # Example
//!
//! ```ignore
//! let generator = MockTextGenerator::new()
//!     .with_response("Title: Hello\nContent: World.")
//!     .with_error(AIError::rate_limited("429"));
//!
//! assert!(generator.generate("first").await.is_ok());
//! assert!(generator.generate("second").await.is_err());
//! assert_eq!(generator.call_count(), 2);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{AIError, ProviderInfo, TextGenerator};

/// Returned once the queue is empty.
pub const DEFAULT_MOCK_RESPONSE: &str =
    "Title: A Mock Article Title\nContent: This mock article body is long enough to pass every check.";

/// Mock text generator.
#[derive(Debug, Clone)]
pub struct MockTextGenerator {
    responses: Arc<Mutex<VecDeque<Result<String, AIError>>>>,
    info: ProviderInfo,
    delay: Duration,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl Default for MockTextGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTextGenerator {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful completion.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: AIError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    /// Prompts received, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn next_response(&self) -> Result<String, AIError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(DEFAULT_MOCK_RESPONSE.to_string()))
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AIError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_response()
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn answers_in_queue_order_then_default() {
        let generator = MockTextGenerator::new()
            .with_response("first")
            .with_error(AIError::rate_limited("slow down"));

        assert_eq!(generator.generate("a").await.unwrap(), "first");
        assert_eq!(
            generator.generate("b").await,
            Err(AIError::rate_limited("slow down"))
        );
        assert_eq!(generator.generate("c").await.unwrap(), DEFAULT_MOCK_RESPONSE);
    }

    #[tokio::test]
    async fn records_prompts() {
        let generator = MockTextGenerator::new();
        generator.generate("write about kayaks").await.unwrap();

        assert_eq!(generator.call_count(), 1);
        assert_eq!(generator.prompts(), vec!["write about kayaks".to_string()]);
    }

    #[tokio::test]
    async fn clones_share_state() {
        let generator = MockTextGenerator::new().with_response("shared");
        let clone = generator.clone();

        assert_eq!(clone.generate("x").await.unwrap(), "shared");
        assert_eq!(generator.call_count(), 1);
    }

    #[test]
    fn provider_info_names_mock() {
        let info = MockTextGenerator::new().provider_info();
        assert_eq!(info.name, "mock");
    }
}
