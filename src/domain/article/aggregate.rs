//! Article aggregate.
//!
//! Articles belong to one author and are filed under one of the author's
//! blogs. `published_at` records the first time an article went live and is
//! never cleared, even if the article is later archived or returned to draft.

use crate::domain::foundation::{
    check_length, ArticleId, BlogId, OwnedByUser, Timestamp, UserId, ValidationError,
};

use super::ArticleStatus;

pub const MIN_TITLE_LENGTH: usize = 5;
pub const MAX_TITLE_LENGTH: usize = 200;
pub const MIN_CONTENT_LENGTH: usize = 50;
pub const MIN_CONTENT_WORDS: usize = 10;
pub const WORDS_PER_MINUTE: usize = 200;

/// Validated title and body of an article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleText {
    pub title: String,
    pub content: String,
}

impl ArticleText {
    /// Trims and validates title and content.
    ///
    /// # Errors
    ///
    /// - title outside 5-200 characters
    /// - content under 50 characters or under 10 words
    pub fn new(title: &str, content: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        check_length("title", title, MIN_TITLE_LENGTH, Some(MAX_TITLE_LENGTH))?;

        let content = content.trim();
        check_length("content", content, MIN_CONTENT_LENGTH, None)?;
        if word_count(content) < MIN_CONTENT_WORDS {
            return Err(ValidationError::invalid_format(
                "content",
                format!("must contain at least {} words", MIN_CONTENT_WORDS),
            ));
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time in whole minutes, never below one.
pub fn reading_time_minutes(text: &str) -> u32 {
    let minutes = (word_count(text) as f64 / WORDS_PER_MINUTE as f64).round() as u32;
    minutes.max(1)
}

/// Article data ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub owner_id: UserId,
    pub blog_id: BlogId,
    pub text: ArticleText,
    pub status: ArticleStatus,
    pub published_at: Option<Timestamp>,
}

impl NewArticle {
    /// Prepares an article for insertion, stamping `published_at` if it goes live immediately.
    pub fn new(owner_id: UserId, blog_id: BlogId, text: ArticleText, status: ArticleStatus) -> Self {
        Self {
            owner_id,
            blog_id,
            text,
            status,
            published_at: status.is_published().then(Timestamp::now),
        }
    }
}

/// A stored article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    owner_id: UserId,
    blog_id: BlogId,
    text: ArticleText,
    status: ArticleStatus,
    published_at: Option<Timestamp>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Article {
    /// Reconstitute an article from persistence.
    pub fn reconstitute(
        id: ArticleId,
        new_article: NewArticle,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            owner_id: new_article.owner_id,
            blog_id: new_article.blog_id,
            text: new_article.text,
            status: new_article.status,
            published_at: new_article.published_at,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn blog_id(&self) -> BlogId {
        self.blog_id
    }

    pub fn title(&self) -> &str {
        &self.text.title
    }

    pub fn content(&self) -> &str {
        &self.text.content
    }

    pub fn status(&self) -> ArticleStatus {
        self.status
    }

    pub fn published_at(&self) -> Option<&Timestamp> {
        self.published_at.as_ref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.text.content)
    }

    pub fn reading_time_minutes(&self) -> u32 {
        reading_time_minutes(&self.text.content)
    }

    /// Replaces text, blog and status.
    pub fn revise(&mut self, blog_id: BlogId, text: ArticleText, status: ArticleStatus) {
        self.blog_id = blog_id;
        self.text = text;
        self.transition_to(status);
        self.updated_at = Timestamp::now();
    }

    /// Moves to `status`, stamping `published_at` on the first publication.
    pub fn transition_to(&mut self, status: ArticleStatus) {
        if status.is_published() && self.published_at.is_none() {
            self.published_at = Some(Timestamp::now());
        }
        self.status = status;
    }

    /// Case-insensitive substring search over title and content.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.text.title.to_lowercase().contains(&query)
            || self.text.content.to_lowercase().contains(&query)
    }
}

impl OwnedByUser for Article {
    fn owner_id(&self) -> &UserId {
        &self.owner_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = "Sourdough needs a lively starter, patient proofing, and a very hot oven to shine.";

    fn text() -> ArticleText {
        ArticleText::new("Bread at Home", BODY).unwrap()
    }

    fn article(status: ArticleStatus) -> Article {
        let now = Timestamp::now();
        let new_article = NewArticle::new(
            UserId::new(1).unwrap(),
            BlogId::new(2).unwrap(),
            text(),
            status,
        );
        Article::reconstitute(ArticleId::new(3).unwrap(), new_article, now, now)
    }

    #[test]
    fn text_validation_rules() {
        assert_eq!(
            ArticleText::new("Tiny", BODY).unwrap_err(),
            ValidationError::too_short("title", MIN_TITLE_LENGTH)
        );
        assert_eq!(
            ArticleText::new("Good title", "too short").unwrap_err(),
            ValidationError::too_short("content", MIN_CONTENT_LENGTH)
        );

        let few_words = "Supercalifragilistic expialidocious antidisestablishmentarianism words";
        assert_eq!(
            ArticleText::new("Good title", few_words).unwrap_err().field(),
            "content"
        );
    }

    #[test]
    fn text_is_trimmed() {
        let text = ArticleText::new("  Bread at Home ", &format!("  {}  ", BODY)).unwrap();
        assert_eq!(text.title, "Bread at Home");
        assert_eq!(text.content, BODY);
    }

    #[test]
    fn reading_time_rounds_with_floor_of_one() {
        assert_eq!(reading_time_minutes("one two three"), 1);
        assert_eq!(reading_time_minutes(&"word ".repeat(299)), 1);
        assert_eq!(reading_time_minutes(&"word ".repeat(300)), 2);
        assert_eq!(reading_time_minutes(&"word ".repeat(1000)), 5);
    }

    #[test]
    fn draft_has_no_published_at() {
        assert!(article(ArticleStatus::Draft).published_at().is_none());
    }

    #[test]
    fn created_published_is_stamped() {
        assert!(article(ArticleStatus::Published).published_at().is_some());
    }

    #[test]
    fn published_at_is_set_once() {
        let mut article = article(ArticleStatus::Draft);
        article.transition_to(ArticleStatus::Published);
        let first = *article.published_at().unwrap();

        article.transition_to(ArticleStatus::Archived);
        article.transition_to(ArticleStatus::Published);

        assert_eq!(article.status(), ArticleStatus::Published);
        assert_eq!(article.published_at(), Some(&first));
    }

    #[test]
    fn revise_moves_article_between_blogs() {
        let mut article = article(ArticleStatus::Draft);
        article.revise(BlogId::new(9).unwrap(), text(), ArticleStatus::Draft);
        assert_eq!(article.blog_id().as_i64(), 9);
    }

    #[test]
    fn search_covers_title_and_content() {
        let article = article(ArticleStatus::Draft);
        assert!(article.matches("bread"));
        assert!(article.matches("OVEN"));
        assert!(!article.matches("pasta"));
    }
}
