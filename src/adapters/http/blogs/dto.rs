//! Request and response types for blog endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::blog::{parse_categories, Blog};
use crate::domain::foundation::OwnedByUser;

/// Categories as either `"a, b"` or `["a", "b"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CategoriesInput {
    Text(String),
    List(Vec<String>),
}

impl Default for CategoriesInput {
    fn default() -> Self {
        CategoriesInput::List(Vec::new())
    }
}

impl CategoriesInput {
    /// Raw entries; trimming and limits are applied by `BlogDetails`.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            CategoriesInput::Text(text) => parse_categories(&text),
            CategoriesInput::List(list) => list,
        }
    }
}

/// Body of create and update requests.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogRequest {
    pub name: String,
    pub url: String,
    pub username: String,
    pub apikey: String,
    #[serde(default)]
    pub categories: CategoriesInput,
}

/// A blog as returned by the API. The API key only appears masked.
#[derive(Debug, Clone, Serialize)]
pub struct BlogResponse {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub username: String,
    pub masked_apikey: String,
    pub categories: Vec<String>,
    pub categories_display: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Blog> for BlogResponse {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id().as_i64(),
            name: blog.name().to_string(),
            url: blog.url().to_string(),
            username: blog.username().to_string(),
            masked_apikey: blog.masked_apikey(),
            categories: blog.categories().to_vec(),
            categories_display: blog.categories_display(),
            created_at: blog.created_at().to_rfc3339(),
            updated_at: blog.updated_at().to_rfc3339(),
        }
    }
}

/// Blog plus owner, for the admin listing.
#[derive(Debug, Clone, Serialize)]
pub struct AdminBlogResponse {
    pub owner_id: i64,
    #[serde(flatten)]
    pub blog: BlogResponse,
}

impl From<&Blog> for AdminBlogResponse {
    fn from(blog: &Blog) -> Self {
        Self {
            owner_id: blog.owner_id().as_i64(),
            blog: BlogResponse::from(blog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::blog::BlogDetails;
    use crate::domain::foundation::{BlogId, Timestamp, UserId};

    fn blog(categories: Vec<String>) -> Blog {
        let details = BlogDetails::new(
            "Garden Diary",
            "https://garden.example.com",
            "gardener",
            "secret-api-key-1234",
            categories,
        )
        .unwrap();
        let now = Timestamp::now();
        Blog::reconstitute(BlogId::new(4).unwrap(), UserId::new(2).unwrap(), details, now, now)
    }

    #[test]
    fn categories_accept_text_or_list() {
        let text: BlogRequest = serde_json::from_str(
            r#"{"name": "n", "url": "u", "username": "x", "apikey": "k", "categories": "Roses, , Soil "}"#,
        )
        .unwrap();
        assert_eq!(text.categories.into_vec(), vec!["Roses", "Soil"]);

        let list: BlogRequest = serde_json::from_str(
            r#"{"name": "n", "url": "u", "username": "x", "apikey": "k", "categories": ["Roses", "Soil"]}"#,
        )
        .unwrap();
        assert_eq!(list.categories.into_vec(), vec!["Roses", "Soil"]);

        let missing: BlogRequest =
            serde_json::from_str(r#"{"name": "n", "url": "u", "username": "x", "apikey": "k"}"#)
                .unwrap();
        assert!(missing.categories.into_vec().is_empty());
    }

    #[test]
    fn response_masks_api_key() {
        let json = serde_json::to_value(BlogResponse::from(&blog(vec![]))).unwrap();

        assert_eq!(json["masked_apikey"], "********1234");
        assert_eq!(json["categories_display"], "No categories");
        assert!(!json.to_string().contains("secret-api-key"));
    }

    #[test]
    fn admin_response_adds_owner() {
        let json =
            serde_json::to_value(AdminBlogResponse::from(&blog(vec!["Roses".into()]))).unwrap();

        assert_eq!(json["owner_id"], 2);
        assert_eq!(json["id"], 4);
        assert_eq!(json["categories_display"], "Roses");
    }
}
