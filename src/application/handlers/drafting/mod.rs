//! Draft generation handler.

mod generate_draft;

pub use generate_draft::{GenerateDraftCommand, GenerateDraftHandler};
