use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct SearchArticlesQuery {
    pub query: String,
}

impl ArticleQueryService {
    /// Case-sensitive substring match on the title, ordered by id. The query
    /// is used verbatim, so an empty string returns every article.
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.search_by_title(&query.query).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
