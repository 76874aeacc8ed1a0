use crate::domain::article::{ArticleId, ArticleTitle};
use crate::domain::comment::value_objects::{CommentBody, CommentId};
use crate::domain::user::{DisplayName, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Comment {
    pub id: CommentId,
    pub body: CommentBody,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn set_body(&mut self, body: CommentBody) {
        self.body = body;
    }

    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewComment {
    pub body: CommentBody,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Only the body of a comment is ever rewritten.
#[derive(Debug, Clone)]
pub struct CommentUpdate {
    pub id: CommentId,
    pub body: CommentBody,
}

/// Comment joined with its article title and author details.
#[derive(Debug, Clone)]
pub struct CommentView {
    pub comment: Comment,
    pub article_title: ArticleTitle,
    pub author_name: DisplayName,
    pub author_image: Option<String>,
}
