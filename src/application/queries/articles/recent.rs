use super::ArticleQueryService;
use crate::application::{dto::ArticleSummaryDto, error::ApplicationResult};

/// Size of the front-page listing.
pub const RECENT_ARTICLE_COUNT: u32 = 5;

impl ArticleQueryService {
    /// Newest articles first, with category and author names attached.
    pub async fn list_recent_articles(&self) -> ApplicationResult<Vec<ArticleSummaryDto>> {
        let summaries = self.read_repo.list_recent(RECENT_ARTICLE_COUNT).await?;
        Ok(summaries.into_iter().map(Into::into).collect())
    }
}
