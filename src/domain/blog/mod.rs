//! Blogs - external publishing targets owned by a user.

mod aggregate;
mod details;
mod errors;

pub use aggregate::Blog;
pub use details::{
    parse_categories, validate_categories, validate_url, BlogDetails, MAX_CATEGORIES,
    MAX_CATEGORY_LENGTH,
};
pub use errors::BlogError;
