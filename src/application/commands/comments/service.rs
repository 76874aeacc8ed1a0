use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::ArticleReadRepository,
        comment::{
            CanModifyCommentSpec, Comment, CommentAction, CommentId, CommentReadRepository,
            CommentWriteRepository,
        },
        user::UserRepository,
    },
};

pub struct CommentCommandService {
    pub(super) write_repo: Arc<dyn CommentWriteRepository>,
    pub(super) read_repo: Arc<dyn CommentReadRepository>,
    pub(super) article_repo: Arc<dyn ArticleReadRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        write_repo: Arc<dyn CommentWriteRepository>,
        read_repo: Arc<dyn CommentReadRepository>,
        article_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            article_repo,
            user_repo,
            clock,
        }
    }

    /// Loads the comment and checks that `actor` may apply `action` to it.
    pub(super) async fn load_modifiable(
        &self,
        actor: &AuthenticatedUser,
        id: CommentId,
        action: CommentAction,
    ) -> ApplicationResult<Comment> {
        let comment = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        let spec = CanModifyCommentSpec::new(&actor.capabilities, &comment, actor.id, action);
        if !spec.is_satisfied() {
            tracing::warn!(
                comment_id = %id,
                user_id = %actor.id,
                ?action,
                "comment modification rejected"
            );
            return Err(ApplicationError::unauthorized(
                "only the author or an admin may change this comment",
            ));
        }

        Ok(comment)
    }
}
