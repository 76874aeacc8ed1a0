use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::ApplicationResult,
    },
    domain::comment::{CommentAction, CommentId},
};

pub struct DeleteCommentCommand {
    pub id: i64,
}

impl CommentCommandService {
    /// Returns the comment as it was before removal.
    pub async fn delete_comment(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let id = CommentId::new(command.id)?;
        let comment = self.load_modifiable(actor, id, CommentAction::Delete).await?;

        self.write_repo.delete(id).await?;
        tracing::info!(comment_id = %id, user_id = %actor.id, "comment deleted");
        Ok(comment.into())
    }
}
