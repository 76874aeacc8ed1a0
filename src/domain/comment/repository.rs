use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, CommentUpdate, CommentView, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentWriteRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Fails with `DomainError::NotFound` if the comment no longer exists.
    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
}

#[async_trait]
pub trait CommentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>>;
    async fn find_view(&self, id: CommentId) -> DomainResult<Option<CommentView>>;
    async fn list_views(&self) -> DomainResult<Vec<CommentView>>;
    /// Comments of one article, oldest first.
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<CommentView>>;
}
