// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{ArticleLikeRepository, ArticleReadRepository, ArticleTitle, ArticleWriteRepository},
        category::{CategoryId, CategoryRepository},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) like_repo: Arc<dyn ArticleLikeRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        like_repo: Arc<dyn ArticleLikeRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            like_repo,
            clock,
        }
    }

    pub(super) async fn ensure_category_exists(&self, id: CategoryId) -> ApplicationResult<()> {
        match self.category_repo.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(ApplicationError::not_found(format!(
                "category {} not found",
                i64::from(id)
            ))),
        }
    }

    pub(super) async fn ensure_title_available(&self, title: &ArticleTitle) -> ApplicationResult<()> {
        if self.read_repo.exists_with_title(title).await? {
            tracing::warn!(title = %title, "article title already taken");
            Err(ApplicationError::duplicate_title(format!(
                "an article titled '{title}' already exists"
            )))
        } else {
            Ok(())
        }
    }
}
