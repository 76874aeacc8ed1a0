mod get;
mod list;
mod service;

pub use get::GetCommentQuery;
pub use service::CommentQueryService;
