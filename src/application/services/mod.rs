// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{articles::ArticleCommandService, comments::CommentCommandService},
        dto::AuthenticatedUser,
        ports::{security::TokenManager, time::Clock},
        queries::{
            articles::ArticleQueryService, categories::CategoryQueryService,
            comments::CommentQueryService,
        },
    },
    domain::{
        article::{ArticleLikeRepository, ArticleReadRepository, ArticleWriteRepository},
        category::CategoryRepository,
        comment::{CommentReadRepository, CommentWriteRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        article_like_repo: Arc<dyn ArticleLikeRepository>,
        comment_write_repo: Arc<dyn CommentWriteRepository>,
        comment_read_repo: Arc<dyn CommentReadRepository>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&article_like_repo),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&article_like_repo),
            Arc::clone(&comment_read_repo),
        ));

        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_write_repo),
            Arc::clone(&comment_read_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&user_repo),
            Arc::clone(&clock),
        ));

        let comment_queries = Arc::new(CommentQueryService::new(Arc::clone(&comment_read_repo)));
        let category_queries = Arc::new(CategoryQueryService::new(category_repo));

        Self {
            article_commands,
            article_queries,
            comment_commands,
            comment_queries,
            category_queries,
            token_manager,
        }
    }

    /// Verify a raw bearer token and return the identity it asserts.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
