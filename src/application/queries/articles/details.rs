use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDetailsDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleDetailsQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Requires a signed-in caller; no particular role.
    pub async fn get_article_details(
        &self,
        _actor: &AuthenticatedUser,
        query: GetArticleDetailsQuery,
    ) -> ApplicationResult<ArticleDetailsDto> {
        let id = ArticleId::new(query.id)?;
        let summary = self
            .read_repo
            .find_summary(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let like_count = self.like_repo.count_for_article(id).await?;
        let comments = self
            .comment_repo
            .list_for_article(id)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(ArticleDetailsDto::from_parts(summary, like_count, comments))
    }
}
