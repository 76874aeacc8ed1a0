use super::map_sqlx;
use crate::domain::article::{ArticleId, ArticleTitle};
use crate::domain::comment::{
    Comment, CommentBody, CommentId, CommentReadRepository, CommentUpdate, CommentView,
    CommentWriteRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{DisplayName, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const VIEW_SELECT: &str = "SELECT cm.id, cm.body, cm.article_id, cm.author_id, cm.created_at,
        a.title AS article_title, u.display_name AS author_name,
        u.image_location AS author_image
 FROM comments cm
 JOIN articles a ON a.id = cm.article_id
 JOIN users u ON u.id = cm.author_id";

#[derive(Clone)]
pub struct PostgresCommentWriteRepository {
    pool: PgPool,
}

impl PostgresCommentWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresCommentReadRepository {
    pool: PgPool,
}

impl PostgresCommentReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    body: String,
    article_id: i64,
    author_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.id)?,
            body: CommentBody::from_stored(row.body),
            article_id: ArticleId::new(row.article_id)?,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct CommentViewRow {
    #[sqlx(flatten)]
    comment: CommentRow,
    article_title: String,
    author_name: String,
    author_image: Option<String>,
}

impl TryFrom<CommentViewRow> for CommentView {
    type Error = DomainError;

    fn try_from(row: CommentViewRow) -> Result<Self, Self::Error> {
        Ok(CommentView {
            comment: Comment::try_from(row.comment)?,
            article_title: ArticleTitle::new(row.article_title)?,
            author_name: DisplayName::new(row.author_name)?,
            author_image: row.author_image,
        })
    }
}

#[async_trait]
impl CommentWriteRepository for PostgresCommentWriteRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let NewComment {
            body,
            article_id,
            author_id,
            created_at,
        } = comment;

        let row = sqlx::query_as::<_, CommentRow>(
            "INSERT INTO comments (body, article_id, author_id, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, body, article_id, author_id, created_at",
        )
        .bind(body.as_str())
        .bind(i64::from(article_id))
        .bind(i64::from(author_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn update(&self, update: CommentUpdate) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(
            "UPDATE comments SET body = $1 WHERE id = $2
             RETURNING id, body, article_id, author_id, created_at",
        )
        .bind(update.body.as_str())
        .bind(i64::from(update.id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;

        Comment::try_from(row)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CommentReadRepository for PostgresCommentReadRepository {
    async fn find_by_id(&self, id: CommentId) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(
            "SELECT id, body, article_id, author_id, created_at FROM comments WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn find_view(&self, id: CommentId) -> DomainResult<Option<CommentView>> {
        let sql = format!("{VIEW_SELECT} WHERE cm.id = $1");
        let row = sqlx::query_as::<_, CommentViewRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(CommentView::try_from).transpose()
    }

    async fn list_views(&self) -> DomainResult<Vec<CommentView>> {
        let sql = format!("{VIEW_SELECT} ORDER BY cm.id ASC");
        let rows = sqlx::query_as::<_, CommentViewRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(CommentView::try_from).collect()
    }

    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<CommentView>> {
        let sql = format!(
            "{VIEW_SELECT} WHERE cm.article_id = $1 ORDER BY cm.created_at ASC, cm.id ASC"
        );
        let rows = sqlx::query_as::<_, CommentViewRow>(&sql)
            .bind(i64::from(article_id))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(CommentView::try_from).collect()
    }
}
