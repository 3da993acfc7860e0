//! Validated blog connection details.

use url::Url;

use crate::domain::foundation::{check_length, ValidationError};

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_URL_LENGTH: usize = 200;
pub const MIN_USERNAME_LENGTH: usize = 2;
pub const MAX_USERNAME_LENGTH: usize = 50;
pub const MIN_APIKEY_LENGTH: usize = 10;
pub const MAX_APIKEY_LENGTH: usize = 255;
pub const MAX_CATEGORIES: usize = 10;
pub const MAX_CATEGORY_LENGTH: usize = 50;

/// Splits a comma-separated category list, trimming entries and dropping blanks.
pub fn parse_categories(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trims categories, drops blanks, and enforces count and length limits.
pub fn validate_categories(categories: Vec<String>) -> Result<Vec<String>, ValidationError> {
    let categories: Vec<String> = categories
        .into_iter()
        .map(|category| category.trim().to_string())
        .filter(|category| !category.is_empty())
        .collect();

    if categories.len() > MAX_CATEGORIES {
        return Err(ValidationError::invalid_format(
            "categories",
            format!("at most {} categories allowed", MAX_CATEGORIES),
        ));
    }
    if categories
        .iter()
        .any(|category| category.chars().count() > MAX_CATEGORY_LENGTH)
    {
        return Err(ValidationError::invalid_format(
            "categories",
            format!(
                "each category must be {} characters or less",
                MAX_CATEGORY_LENGTH
            ),
        ));
    }
    Ok(categories)
}

/// Validates an absolute `http`/`https` URL.
pub fn validate_url(raw: &str) -> Result<String, ValidationError> {
    let raw = raw.trim();
    check_length("url", raw, 1, Some(MAX_URL_LENGTH))?;

    let parsed = Url::parse(raw)
        .map_err(|e| ValidationError::invalid_format("url", e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(raw.to_string()),
        "http" | "https" => Err(ValidationError::invalid_format("url", "missing host")),
        other => Err(ValidationError::invalid_format(
            "url",
            format!("unsupported scheme '{}'", other),
        )),
    }
}

/// Everything a user supplies when registering or editing a blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogDetails {
    pub name: String,
    pub url: String,
    pub username: String,
    pub apikey: String,
    pub categories: Vec<String>,
}

impl BlogDetails {
    /// Validates and normalizes all fields.
    ///
    /// # Errors
    ///
    /// The first failing field, in form order.
    pub fn new(
        name: &str,
        url: &str,
        username: &str,
        apikey: &str,
        categories: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        check_length("name", name, MIN_NAME_LENGTH, Some(MAX_NAME_LENGTH))?;
        let url = validate_url(url)?;
        let username = username.trim();
        check_length(
            "username",
            username,
            MIN_USERNAME_LENGTH,
            Some(MAX_USERNAME_LENGTH),
        )?;
        let apikey = apikey.trim();
        check_length(
            "apikey",
            apikey,
            MIN_APIKEY_LENGTH,
            Some(MAX_APIKEY_LENGTH),
        )?;
        let categories = validate_categories(categories)?;

        Ok(Self {
            name: name.to_string(),
            url,
            username: username.to_string(),
            apikey: apikey.to_string(),
            categories,
        })
    }
}
