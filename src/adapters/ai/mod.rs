//! AI Provider Adapters.
//!
//! Implementations of the `TextGenerator` port.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini models over the REST API
//! - `MockTextGenerator` - Scripted responses for testing and offline runs

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::{MockTextGenerator, DEFAULT_MOCK_RESPONSE};
