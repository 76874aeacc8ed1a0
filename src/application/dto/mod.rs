pub mod articles;
pub mod auth;
pub mod categories;
pub mod comments;
pub mod serde_time;
pub mod users;

pub use articles::{
    ArticleDetailsDto, ArticleDto, ArticleHighlightDto, ArticleSummaryDto, LikeStatusDto,
    LikedArticleDto,
};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use categories::CategoryDto;
pub use comments::{CommentDto, CommentViewDto};
pub use users::AuthorDto;
