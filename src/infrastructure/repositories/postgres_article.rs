// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleHighlight, ArticleId, ArticleLikeRepository,
    ArticleReadRepository, ArticleSummary, ArticleTitle, ArticleUpdate, ArticleVersion,
    ArticleWriteRepository, ImageLocation, LikedArticle, NewArticle,
};
use crate::domain::category::{CategoryId, CategoryName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{DisplayName, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleLikeRepository {
    pool: PgPool,
}

impl PostgresArticleLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: String,
    image_location: Option<String>,
    category_id: i64,
    author_id: i64,
    created_at: DateTime<Utc>,
    version: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            image_location: ImageLocation::parse_optional(row.image_location)?,
            category_id: CategoryId::new(row.category_id)?,
            author_id: UserId::new(row.author_id)?,
            created_at: row.created_at,
            version: ArticleVersion::new(row.version)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleSummaryRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    category_name: String,
    author_name: String,
    author_image: Option<String>,
}

impl TryFrom<ArticleSummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: ArticleSummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            article: Article::try_from(row.article)?,
            category_name: CategoryName::new(row.category_name)?,
            author_name: DisplayName::new(row.author_name)?,
            author_image: row.author_image,
        })
    }
}

#[derive(Debug, FromRow)]
struct HighlightRow {
    id: i64,
    title: String,
    image_location: Option<String>,
}

impl TryFrom<HighlightRow> for ArticleHighlight {
    type Error = DomainError;

    fn try_from(row: HighlightRow) -> Result<Self, Self::Error> {
        Ok(ArticleHighlight {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            image_location: ImageLocation::parse_optional(row.image_location)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct LikedArticleRow {
    #[sqlx(flatten)]
    article: ArticleRow,
    liked_by: Vec<i64>,
}

impl TryFrom<LikedArticleRow> for LikedArticle {
    type Error = DomainError;

    fn try_from(row: LikedArticleRow) -> Result<Self, Self::Error> {
        Ok(LikedArticle {
            article: Article::try_from(row.article)?,
            liked_by: row
                .liked_by
                .into_iter()
                .map(UserId::new)
                .collect::<DomainResult<_>>()?,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            body,
            image_location,
            category_id,
            author_id,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, body, image_location, category_id, author_id, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, title, body, image_location, category_id, author_id, created_at, version",
        )
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(image_location.map(String::from))
        .bind(i64::from(category_id))
        .bind(i64::from(author_id))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            body,
            image_location,
            category_id,
            expected_version,
        } = update;

        let maybe_row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles
             SET title = $1, body = $2, image_location = $3, category_id = $4, version = version + 1
             WHERE id = $5 AND version = $6
             RETURNING id, title, body, image_location, category_id, author_id, created_at, version",
        )
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(image_location.map(String::from))
        .bind(i64::from(category_id))
        .bind(i64::from(id))
        .bind(i64::from(expected_version))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::Conflict("article update conflict, please retry".into()))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, body, image_location, category_id, author_id, created_at, version
             FROM articles WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_summary(&self, id: ArticleId) -> DomainResult<Option<ArticleSummary>> {
        let row = sqlx::query_as::<_, ArticleSummaryRow>(
            "SELECT a.id, a.title, a.body, a.image_location, a.category_id, a.author_id,
                    a.created_at, a.version,
                    c.name AS category_name, u.display_name AS author_name,
                    u.image_location AS author_image
             FROM articles a
             JOIN categories c ON c.id = a.category_id
             JOIN users u ON u.id = a.author_id
             WHERE a.id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleSummary::try_from).transpose()
    }

    async fn exists_with_title(&self, title: &ArticleTitle) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM articles WHERE title = $1)")
            .bind(title.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list_recent(&self, limit: u32) -> DomainResult<Vec<ArticleSummary>> {
        let rows = sqlx::query_as::<_, ArticleSummaryRow>(
            "SELECT a.id, a.title, a.body, a.image_location, a.category_id, a.author_id,
                    a.created_at, a.version,
                    c.name AS category_name, u.display_name AS author_name,
                    u.image_location AS author_image
             FROM articles a
             JOIN categories c ON c.id = a.category_id
             JOIN users u ON u.id = a.author_id
             ORDER BY a.created_at DESC, a.id DESC
             LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleSummary::try_from).collect()
    }

    async fn search_by_title(&self, fragment: &str) -> DomainResult<Vec<Article>> {
        // strpos is a plain case-sensitive match; LIKE would treat % and _ as
        // wildcards.
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, title, body, image_location, category_id, author_id, created_at, version
             FROM articles
             WHERE strpos(title, $1) > 0
             ORDER BY id ASC",
        )
        .bind(fragment)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn most_commented(&self, limit: u32) -> DomainResult<Vec<ArticleHighlight>> {
        let rows = sqlx::query_as::<_, HighlightRow>(
            "SELECT a.id, a.title, a.image_location
             FROM articles a
             JOIN comments cm ON cm.article_id = a.id
             GROUP BY a.id
             ORDER BY COUNT(cm.id) DESC, a.id ASC
             LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleHighlight::try_from).collect()
    }

    async fn most_liked(&self, limit: u32) -> DomainResult<Vec<LikedArticle>> {
        let rows = sqlx::query_as::<_, LikedArticleRow>(
            "SELECT a.id, a.title, a.body, a.image_location, a.category_id, a.author_id,
                    a.created_at, a.version,
                    COALESCE(
                        array_agg(l.user_id ORDER BY l.user_id) FILTER (WHERE l.user_id IS NOT NULL),
                        '{}'::BIGINT[]
                    ) AS liked_by
             FROM articles a
             LEFT JOIN article_likes l ON l.article_id = a.id
             GROUP BY a.id
             ORDER BY COUNT(l.user_id) DESC, a.id ASC
             LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(LikedArticle::try_from).collect()
    }
}

#[async_trait]
impl ArticleLikeRepository for PostgresArticleLikeRepository {
    async fn like(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO article_likes (article_id, user_id) VALUES ($1, $2)
             ON CONFLICT (article_id, user_id) DO NOTHING",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(user_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn unlike(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<()> {
        sqlx::query("DELETE FROM article_likes WHERE article_id = $1 AND user_id = $2")
            .bind(i64::from(article_id))
            .bind(i64::from(user_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn count_for_article(&self, article_id: ArticleId) -> DomainResult<u64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM article_likes WHERE article_id = $1")
            .bind(i64::from(article_id))
            .fetch_one(&self.pool)
            .await
            .map(|count| count as u64)
            .map_err(map_sqlx)
    }
}
