use super::map_sqlx;
use crate::domain::category::{Category, CategoryId, CategoryName, CategoryRepository};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: CategoryName::new(row.name)?,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let row = sqlx::query_as::<_, CategoryRow>("SELECT id, name FROM categories WHERE id = $1")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            "SELECT id, name FROM categories ORDER BY name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Category::try_from).collect()
    }
}
