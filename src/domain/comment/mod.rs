pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Comment, CommentUpdate, CommentView, NewComment};
pub use repository::{CommentReadRepository, CommentWriteRepository};
pub use specifications::{CanModifyCommentSpec, CommentAction};
pub use value_objects::{CommentBody, CommentId, MIN_EDITED_COMMENT_LENGTH};
