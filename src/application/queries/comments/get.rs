use super::CommentQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, CommentViewDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::comment::CommentId,
};

pub struct GetCommentQuery {
    pub id: i64,
}

impl CommentQueryService {
    pub async fn get_comment(
        &self,
        _actor: &AuthenticatedUser,
        query: GetCommentQuery,
    ) -> ApplicationResult<CommentViewDto> {
        let id = CommentId::new(query.id)?;
        let view = self
            .read_repo
            .find_view(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
        Ok(view.into())
    }
}
