use super::{ArticleCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{AuthenticatedUser, LikeStatusDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct LikeArticleCommand {
    pub article_id: i64,
}

impl ArticleCommandService {
    pub async fn like_article(
        &self,
        actor: &AuthenticatedUser,
        command: LikeArticleCommand,
    ) -> ApplicationResult<LikeStatusDto> {
        let article_id = self.likeable_article(actor, command.article_id).await?;
        self.like_repo.like(article_id, actor.id).await?;
        self.like_status(article_id, true).await
    }

    /// Unliking an article the caller never liked is a no-op.
    pub async fn unlike_article(
        &self,
        actor: &AuthenticatedUser,
        command: LikeArticleCommand,
    ) -> ApplicationResult<LikeStatusDto> {
        let article_id = self.likeable_article(actor, command.article_id).await?;
        self.like_repo.unlike(article_id, actor.id).await?;
        self.like_status(article_id, false).await
    }

    async fn likeable_article(
        &self,
        actor: &AuthenticatedUser,
        raw_id: i64,
    ) -> ApplicationResult<ArticleId> {
        ensure_capability(actor, "articles", "like")?;
        let id = ArticleId::new(raw_id)?;
        match self.read_repo.find_by_id(id).await? {
            Some(_) => Ok(id),
            None => Err(ApplicationError::not_found("article not found")),
        }
    }

    async fn like_status(&self, article_id: ArticleId, liked: bool) -> ApplicationResult<LikeStatusDto> {
        let like_count = self.like_repo.count_for_article(article_id).await?;
        Ok(LikeStatusDto {
            article_id: article_id.into(),
            liked,
            like_count,
        })
    }
}
