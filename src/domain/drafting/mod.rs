//! Drafting - AI-assisted article drafts.
//!
//! Builds the generation prompt, extracts a title and body from whatever the
//! text service returns, and classifies service failures into user-facing
//! messages.

mod errors;
mod extractor;
mod failure;
mod normalize;
mod prompt;
mod result;

pub use errors::DraftingError;
pub use extractor::{ArticleDraftExtractor, DraftCandidate, ParseStrategy};
pub use failure::FailureCategory;
pub use normalize::{fallback_content, fallback_title, normalize_field, CONTENT_LABEL, TITLE_LABEL};
pub use prompt::build_prompt;
pub use result::{GenerationRequest, GenerationResult, MAX_KEYWORD_LENGTH};

/// Returned when the service answers with nothing usable.
pub const NO_CONTENT_MESSAGE: &str =
    "No content was generated. Please try again with a different keyword.";
