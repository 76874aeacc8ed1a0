use std::sync::Arc;

use crate::domain::{
    article::{ArticleLikeRepository, ArticleReadRepository},
    comment::CommentReadRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) like_repo: Arc<dyn ArticleLikeRepository>,
    pub(super) comment_repo: Arc<dyn CommentReadRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        like_repo: Arc<dyn ArticleLikeRepository>,
        comment_repo: Arc<dyn CommentReadRepository>,
    ) -> Self {
        Self {
            read_repo,
            like_repo,
            comment_repo,
        }
    }
}
