use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

/// Minimum body length, in characters, accepted when a comment is edited.
pub const MIN_EDITED_COMMENT_LENGTH: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "comment id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CommentId> for i64 {
    fn from(value: CommentId) -> Self {
        value.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    /// Body of a freshly posted comment: it must be present, no minimum
    /// length applies.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("comment body is required".into()));
        }
        Ok(Self(value))
    }

    /// Body supplied on edit: at least `MIN_EDITED_COMMENT_LENGTH` characters,
    /// counted on the raw input.
    pub fn edited(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() < MIN_EDITED_COMMENT_LENGTH {
            return Err(DomainError::Validation(format!(
                "comment must be at least {MIN_EDITED_COMMENT_LENGTH} characters long"
            )));
        }
        Ok(Self(value))
    }

    /// Body read back from storage. It already passed `new` or `edited` on
    /// the way in, and an edited body may be whitespace only.
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CommentBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CommentBody> for String {
    fn from(value: CommentBody) -> Self {
        value.0
    }
}
