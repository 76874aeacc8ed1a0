// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_category;
mod postgres_comment;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_article::{
    PostgresArticleLikeRepository, PostgresArticleReadRepository, PostgresArticleWriteRepository,
};
pub use postgres_category::PostgresCategoryRepository;
pub use postgres_comment::{PostgresCommentReadRepository, PostgresCommentWriteRepository};
pub use postgres_user::PostgresUserRepository;
