use super::CommentCommandService;
use crate::{
    application::{
        commands::articles::ensure_capability,
        dto::{AuthenticatedUser, CommentViewDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        comment::{CommentBody, CommentView, NewComment},
    },
};

pub struct CreateCommentCommand {
    pub article_id: i64,
    pub body: String,
}

impl CommentCommandService {
    /// Any signed-in user may comment. Unlike edits, a new comment only has
    /// to be non-blank.
    pub async fn create_comment(
        &self,
        actor: &AuthenticatedUser,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentViewDto> {
        ensure_capability(actor, "comments", "create")?;

        let body = CommentBody::new(command.body)?;
        let article_id = ArticleId::new(command.article_id)?;

        let article = self
            .article_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let author = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("unknown user"))?;

        let comment = self
            .write_repo
            .insert(NewComment {
                body,
                article_id,
                author_id: actor.id,
                created_at: self.clock.now(),
            })
            .await?;

        Ok(CommentView {
            comment,
            article_title: article.title,
            author_name: author.display_name,
            author_image: author.image_location,
        }
        .into())
    }
}
