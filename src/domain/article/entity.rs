// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleBody, ArticleId, ArticleTitle, ArticleVersion, ImageLocation,
};
use crate::domain::category::{CategoryId, CategoryName};
use crate::domain::user::{DisplayName, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub image_location: Option<ImageLocation>,
    pub category_id: CategoryId,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub version: ArticleVersion,
}

impl Article {
    /// Replace the editable content. Author and creation time are left
    /// untouched.
    pub fn revise(
        &mut self,
        title: ArticleTitle,
        body: ArticleBody,
        image_location: Option<ImageLocation>,
        category_id: CategoryId,
    ) {
        self.title = title;
        self.body = body;
        self.image_location = image_location;
        self.category_id = category_id;
    }

    pub fn has_title(&self, title: &ArticleTitle) -> bool {
        &self.title == title
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub image_location: Option<ImageLocation>,
    pub category_id: CategoryId,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Full replacement of an article's editable fields, conditional on the
/// version the caller read. Author and creation time are not part of it.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub image_location: Option<ImageLocation>,
    pub category_id: CategoryId,
    pub expected_version: ArticleVersion,
}

impl ArticleUpdate {
    pub fn from_revised(article: &Article, expected_version: ArticleVersion) -> Self {
        Self {
            id: article.id,
            title: article.title.clone(),
            body: article.body.clone(),
            image_location: article.image_location.clone(),
            category_id: article.category_id,
            expected_version,
        }
    }
}

/// Article joined with the names shown in listings.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub article: Article,
    pub category_name: CategoryName,
    pub author_name: DisplayName,
    pub author_image: Option<String>,
}

/// Projection returned by the most-commented ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleHighlight {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub image_location: Option<ImageLocation>,
}

#[derive(Debug, Clone)]
pub struct LikedArticle {
    pub article: Article,
    pub liked_by: Vec<UserId>,
}

impl LikedArticle {
    pub fn like_count(&self) -> usize {
        self.liked_by.len()
    }
}
