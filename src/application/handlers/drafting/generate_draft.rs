//! GenerateDraftHandler - Drafts an article title and body from a keyword.
//!
//! One call to the text generator per command. Whatever comes back is turned
//! into a `GenerationResult`: upstream failures become a classified failure,
//! an empty answer becomes a "no content" failure, and anything else goes
//! through the extractor, which always succeeds.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::drafting::{
    build_prompt, ArticleDraftExtractor, DraftingError, GenerationRequest, GenerationResult,
    NO_CONTENT_MESSAGE,
};
use crate::domain::foundation::{BlogId, OwnedByUser, UserId};
use crate::ports::{BlogRepository, TextGenerator};

/// Command to draft an article.
#[derive(Debug, Clone)]
pub struct GenerateDraftCommand {
    pub author_id: UserId,
    pub keyword: String,
    /// Blog whose categories are passed to the model as hints.
    pub blog_id: Option<BlogId>,
}

/// Handler for draft generation.
pub struct GenerateDraftHandler {
    generator: Arc<dyn TextGenerator>,
    blogs: Arc<dyn BlogRepository>,
    extractor: ArticleDraftExtractor,
}

impl GenerateDraftHandler {
    pub fn new(generator: Arc<dyn TextGenerator>, blogs: Arc<dyn BlogRepository>) -> Self {
        Self {
            generator,
            blogs,
            extractor: ArticleDraftExtractor::new(),
        }
    }

    /// # Errors
    ///
    /// Only for a blank or oversized keyword, or a blog the author does not
    /// own. Generation problems are reported inside the `GenerationResult`.
    pub async fn handle(&self, cmd: GenerateDraftCommand) -> Result<GenerationResult, DraftingError> {
        let request = GenerationRequest::new(cmd.keyword, Vec::new())?;

        let hints = match cmd.blog_id {
            Some(blog_id) => {
                let blog = self
                    .blogs
                    .find_by_id(blog_id)
                    .await?
                    .filter(|blog| blog.is_owner(&cmd.author_id))
                    .ok_or(DraftingError::BlogNotFound(blog_id))?;
                blog.categories().to_vec()
            }
            None => Vec::new(),
        };
        let request = GenerationRequest::new(request.keyword(), hints)?;

        let provider = self.generator.provider_info();
        info!(
            keyword = %request.keyword(),
            provider = %provider.name,
            model = %provider.model,
            "Generating article draft"
        );

        let raw = match self.generator.generate(&build_prompt(&request)).await {
            Ok(raw) => raw,
            Err(err) => return Ok(GenerationResult::from_failure(&err.to_string())),
        };

        if raw.trim().is_empty() {
            warn!(keyword = %request.keyword(), "Text generator returned no content");
            return Ok(GenerationResult::failed(NO_CONTENT_MESSAGE));
        }

        Ok(self.extractor.extract(&raw, request.keyword()))
    }
}
