use super::CommentCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentDto},
        error::ApplicationResult,
    },
    domain::comment::{CommentAction, CommentBody, CommentId, CommentUpdate},
};

pub struct UpdateCommentCommand {
    pub id: i64,
    pub body: String,
}

impl CommentCommandService {
    pub async fn update_comment(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let id = CommentId::new(command.id)?;
        let mut comment = self.load_modifiable(actor, id, CommentAction::Update).await?;

        let body = CommentBody::edited(command.body)?;
        comment.set_body(body);

        let updated = self
            .write_repo
            .update(CommentUpdate {
                id,
                body: comment.body,
            })
            .await?;
        Ok(updated.into())
    }
}
