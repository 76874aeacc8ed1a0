use crate::domain::article::{Article, ArticleHighlight, ArticleSummary, LikedArticle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{comments::CommentViewDto, serde_time, users::AuthorDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub image_location: Option<String>,
    pub category_id: i64,
    pub author_id: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub version: i64,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            body: article.body.into_inner(),
            image_location: article.image_location.map(|image| image.into_inner()),
            category_id: article.category_id.into(),
            author_id: article.author_id.into(),
            created_at: article.created_at,
            version: article.version.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub article: ArticleDto,
    pub category_name: String,
    pub author: AuthorDto,
}

impl From<ArticleSummary> for ArticleSummaryDto {
    fn from(summary: ArticleSummary) -> Self {
        let author = AuthorDto::new(
            summary.article.author_id,
            summary.author_name,
            summary.author_image,
        );
        Self {
            article: summary.article.into(),
            category_name: summary.category_name.into(),
            author,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailsDto {
    pub article: ArticleDto,
    pub category_name: String,
    pub author: AuthorDto,
    pub like_count: u64,
    pub comments: Vec<CommentViewDto>,
}

impl ArticleDetailsDto {
    pub fn from_parts(
        summary: ArticleSummary,
        like_count: u64,
        comments: Vec<CommentViewDto>,
    ) -> Self {
        let ArticleSummaryDto {
            article,
            category_name,
            author,
        } = summary.into();
        Self {
            article,
            category_name,
            author,
            like_count,
            comments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleHighlightDto {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image_location: Option<String>,
}

impl From<ArticleHighlight> for ArticleHighlightDto {
    fn from(highlight: ArticleHighlight) -> Self {
        Self {
            id: highlight.id.into(),
            title: highlight.title.into_inner(),
            image_location: highlight.image_location.map(|image| image.into_inner()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LikedArticleDto {
    pub article: ArticleDto,
    pub like_count: usize,
    pub liked_by: Vec<i64>,
}

impl From<LikedArticle> for LikedArticleDto {
    fn from(liked: LikedArticle) -> Self {
        let like_count = liked.like_count();
        Self {
            article: liked.article.into(),
            like_count,
            liked_by: liked.liked_by.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LikeStatusDto {
    pub article_id: i64,
    pub liked: bool,
    pub like_count: u64,
}
