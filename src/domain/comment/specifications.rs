use std::collections::HashSet;

use crate::domain::comment::entity::Comment;
use crate::domain::user::value_objects::{Capability, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentAction {
    Update,
    Delete,
}

impl CommentAction {
    fn any(self) -> &'static str {
        match self {
            CommentAction::Update => "update:any",
            CommentAction::Delete => "delete:any",
        }
    }

    fn own(self) -> &'static str {
        match self {
            CommentAction::Update => "update:own",
            CommentAction::Delete => "delete:own",
        }
    }
}

/// A comment may be changed by its author, or by anyone holding the
/// `:any` capability (admins).
pub struct CanModifyCommentSpec<'a> {
    capabilities: &'a HashSet<Capability>,
    comment: &'a Comment,
    user_id: UserId,
    action: CommentAction,
}

impl<'a> CanModifyCommentSpec<'a> {
    pub fn new(
        capabilities: &'a HashSet<Capability>,
        comment: &'a Comment,
        user_id: UserId,
        action: CommentAction,
    ) -> Self {
        Self {
            capabilities,
            comment,
            user_id,
            action,
        }
    }

    pub fn is_satisfied(&self) -> bool {
        self.has_capability("comments", self.action.any())
            || (self.has_capability("comments", self.action.own())
                && self.comment.is_authored_by(self.user_id))
    }

    fn has_capability(&self, resource: &str, action: &str) -> bool {
        self.capabilities
            .iter()
            .any(|cap| cap.matches(resource, action))
    }
}
