// src/application/commands/articles/mod.rs
mod capability;
mod create;
mod delete;
mod like;
mod service;
mod update;

pub(crate) use capability::ensure_capability;
pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use delete::DeleteArticleCommand;
pub use like::LikeArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
