use crate::domain::comment::{Comment, CommentView};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{serde_time, users::AuthorDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentDto {
    pub id: i64,
    pub body: String,
    pub article_id: i64,
    pub author_id: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id.into(),
            body: comment.body.into_inner(),
            article_id: comment.article_id.into(),
            author_id: comment.author_id.into(),
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentViewDto {
    pub comment: CommentDto,
    pub article_title: String,
    pub author: AuthorDto,
}

impl From<CommentView> for CommentViewDto {
    fn from(view: CommentView) -> Self {
        let author = AuthorDto::new(view.comment.author_id, view.author_name, view.author_image);
        Self {
            comment: view.comment.into(),
            article_title: view.article_title.into_inner(),
            author,
        }
    }
}
