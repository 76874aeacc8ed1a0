use super::CommentQueryService;
use crate::application::{dto::CommentViewDto, error::ApplicationResult};

impl CommentQueryService {
    pub async fn list_comments(&self) -> ApplicationResult<Vec<CommentViewDto>> {
        let views = self.read_repo.list_views().await?;
        Ok(views.into_iter().map(Into::into).collect())
    }
}
