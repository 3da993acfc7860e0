//! Articles written against a user's blogs.

mod aggregate;
mod errors;
mod status;

pub use aggregate::{
    reading_time_minutes, word_count, Article, ArticleText, NewArticle, MIN_CONTENT_LENGTH,
    MIN_CONTENT_WORDS, MIN_TITLE_LENGTH,
};
pub use errors::ArticleError;
pub use status::ArticleStatus;
