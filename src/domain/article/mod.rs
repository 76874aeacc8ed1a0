pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{
    Article, ArticleHighlight, ArticleSummary, ArticleUpdate, LikedArticle, NewArticle,
};
pub use repository::{ArticleLikeRepository, ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleBody, ArticleId, ArticleTitle, ArticleVersion, ImageLocation};
