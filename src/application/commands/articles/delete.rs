use super::{ArticleCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Removes the article; its comments and likes go with it.
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "articles", "delete")?;

        let id = ArticleId::new(command.id)?;
        if self.read_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("article not found"));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(article_id = %id, user_id = %actor.id, "article deleted");
        Ok(())
    }
}
