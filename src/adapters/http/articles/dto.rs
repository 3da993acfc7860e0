//! Request and response types for article endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::article::{Article, ArticleStatus};
use crate::domain::foundation::OwnedByUser;

/// Body of create and update requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleRequest {
    pub blog_id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub status: ArticleStatus,
}

/// Query string of the article listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleListParams {
    pub blog_id: Option<i64>,
    pub status: Option<ArticleStatus>,
}

/// Body of a draft generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub keyword: String,
    #[serde(default)]
    pub blog_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleResponse {
    pub id: i64,
    pub blog_id: i64,
    pub title: String,
    pub content: String,
    pub status: ArticleStatus,
    pub word_count: usize,
    pub reading_time_minutes: u32,
    pub published_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Article> for ArticleResponse {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id().as_i64(),
            blog_id: article.blog_id().as_i64(),
            title: article.title().to_string(),
            content: article.content().to_string(),
            status: article.status(),
            word_count: article.word_count(),
            reading_time_minutes: article.reading_time_minutes(),
            published_at: article.published_at().map(|t| t.to_rfc3339()),
            created_at: article.created_at().to_rfc3339(),
            updated_at: article.updated_at().to_rfc3339(),
        }
    }
}

/// Article plus author, for the admin listing.
#[derive(Debug, Clone, Serialize)]
pub struct AdminArticleResponse {
    pub owner_id: i64,
    #[serde(flatten)]
    pub article: ArticleResponse,
}

impl From<&Article> for AdminArticleResponse {
    fn from(article: &Article) -> Self {
        Self {
            owner_id: article.owner_id().as_i64(),
            article: ArticleResponse::from(article),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleText, NewArticle};
    use crate::domain::foundation::{ArticleId, BlogId, Timestamp, UserId};

    const BODY: &str = "Sourdough needs flour, water, salt and a lively starter fed the night before baking.";

    fn article(status: ArticleStatus) -> Article {
        let now = Timestamp::now();
        Article::reconstitute(
            ArticleId::new(8).unwrap(),
            NewArticle::new(
                UserId::new(1).unwrap(),
                BlogId::new(2).unwrap(),
                ArticleText::new("Sourdough Basics", BODY).unwrap(),
                status,
            ),
            now,
            now,
        )
    }

    #[test]
    fn status_defaults_to_draft() {
        let request: ArticleRequest = serde_json::from_str(
            r#"{"blog_id": 2, "title": "Sourdough Basics", "content": "..."}"#,
        )
        .unwrap();

        assert_eq!(request.status, ArticleStatus::Draft);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = serde_json::from_str::<ArticleRequest>(
            r#"{"blog_id": 2, "title": "t", "content": "c", "status": "deleted"}"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn response_carries_reading_stats() {
        let json = serde_json::to_value(ArticleResponse::from(&article(ArticleStatus::Draft))).unwrap();

        assert_eq!(json["status"], "draft");
        assert_eq!(json["word_count"], 14);
        assert_eq!(json["reading_time_minutes"], 1);
        assert!(json["published_at"].is_null());
    }

    #[test]
    fn published_article_has_publication_time() {
        let json =
            serde_json::to_value(AdminArticleResponse::from(&article(ArticleStatus::Published)))
                .unwrap();

        assert_eq!(json["owner_id"], 1);
        assert!(json["published_at"].is_string());
    }

    #[test]
    fn generate_request_blog_is_optional() {
        let request: GenerateRequest = serde_json::from_str(r#"{"keyword": "sourdough"}"#).unwrap();

        assert_eq!(request.keyword, "sourdough");
        assert_eq!(request.blog_id, None);
    }
}
