use std::sync::Arc;

use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::category::CategoryRepository,
};

pub struct CategoryQueryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryQueryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    /// All categories, ordered by name.
    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.repo.list().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }
}
