use crate::domain::article::entity::{
    Article, ArticleHighlight, ArticleSummary, ArticleUpdate, LikedArticle, NewArticle,
};
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Applies the update only if the stored version still equals
    /// `expected_version`; otherwise fails with `DomainError::Conflict`.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Removes the article together with its comments and likes.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_summary(&self, id: ArticleId) -> DomainResult<Option<ArticleSummary>>;
    async fn exists_with_title(&self, title: &ArticleTitle) -> DomainResult<bool>;
    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<ArticleSummary>>;
    async fn search_by_title(&self, fragment: &str) -> DomainResult<Vec<Article>>;
    async fn most_commented(&self, limit: u32) -> DomainResult<Vec<ArticleHighlight>>;
    async fn most_liked(&self, limit: u32) -> DomainResult<Vec<LikedArticle>>;
}

#[async_trait]
pub trait ArticleLikeRepository: Send + Sync {
    /// Idempotent: liking twice keeps a single like.
    async fn like(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<()>;
    async fn unlike(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<()>;
    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64>;
}
