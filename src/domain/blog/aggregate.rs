//! Blog aggregate.
//!
//! A blog is an external publishing target registered by a user. Articles are
//! written against a blog and are deleted with it.

use crate::domain::foundation::{BlogId, OwnedByUser, Timestamp, UserId};

use super::BlogDetails;

/// Number of trailing API key characters left visible when masked.
const VISIBLE_APIKEY_CHARS: usize = 4;

/// A registered blog.
///
/// # Invariants
///
/// - `name` is unique among the owner's blogs
/// - details always satisfy `BlogDetails` validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    id: BlogId,
    owner_id: UserId,
    details: BlogDetails,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Blog {
    /// Reconstitute a blog from persistence.
    pub fn reconstitute(
        id: BlogId,
        owner_id: UserId,
        details: BlogDetails,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id,
            details,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> BlogId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.details.name
    }

    pub fn url(&self) -> &str {
        &self.details.url
    }

    pub fn username(&self) -> &str {
        &self.details.username
    }

    /// The stored API key. Never serialize this directly.
    pub fn apikey(&self) -> &str {
        &self.details.apikey
    }

    pub fn categories(&self) -> &[String] {
        &self.details.categories
    }

    pub fn details(&self) -> &BlogDetails {
        &self.details
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// API key with everything but the last four characters hidden.
    pub fn masked_apikey(&self) -> String {
        let chars: Vec<char> = self.details.apikey.chars().collect();
        let visible: String = chars[chars.len().saturating_sub(VISIBLE_APIKEY_CHARS)..]
            .iter()
            .collect();
        format!("********{}", visible)
    }

    /// Comma-separated categories, or `No categories`.
    pub fn categories_display(&self) -> String {
        if self.details.categories.is_empty() {
            "No categories".to_string()
        } else {
            self.details.categories.join(", ")
        }
    }

    /// Replaces the connection details.
    pub fn update(&mut self, details: BlogDetails) {
        self.details = details;
        self.updated_at = Timestamp::now();
    }

    /// Case-insensitive substring search over name, URL and username.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [self.name(), self.url(), self.username()]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

impl OwnedByUser for Blog {
    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blog(apikey: &str, categories: Vec<String>) -> Blog {
        let now = Timestamp::now();
        Blog::reconstitute(
            BlogId::new(1).unwrap(),
            UserId::new(2).unwrap(),
            BlogDetails {
                name: "Field Notes".into(),
                url: "https://notes.example.com".into(),
                username: "editor".into(),
                apikey: apikey.into(),
                categories,
            },
            now,
            now,
        )
    }

    #[test]
    fn masked_apikey_keeps_last_four() {
        assert_eq!(blog("sk-0123456789", vec![]).masked_apikey(), "********6789");
    }

    #[test]
    fn masked_apikey_handles_short_keys() {
        assert_eq!(blog("abc", vec![]).masked_apikey(), "********abc");
    }

    #[test]
    fn categories_display_joins_or_reports_none() {
        assert_eq!(blog("0123456789", vec![]).categories_display(), "No categories");
        assert_eq!(
            blog("0123456789", vec!["a".into(), "b".into()]).categories_display(),
            "a, b"
        );
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let blog = blog("0123456789", vec![]);
        assert!(blog.matches("field"));
        assert!(blog.matches("EXAMPLE.COM"));
        assert!(blog.matches("edit"));
        assert!(!blog.matches("recipes"));
    }

    #[test]
    fn ownership_uses_owner_id() {
        let blog = blog("0123456789", vec![]);
        assert!(blog.is_owner(&UserId::new(2).unwrap()));
        assert!(!blog.is_owner(&UserId::new(3).unwrap()));
    }

    #[test]
    fn update_replaces_details() {
        let mut blog = blog("0123456789", vec![]);
        let mut details = blog.details().clone();
        details.name = "Renamed".into();
        blog.update(details);
        assert_eq!(blog.name(), "Renamed");
    }
}
