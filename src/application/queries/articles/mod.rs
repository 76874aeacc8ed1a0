mod details;
mod rankings;
mod recent;
mod search;
mod service;

pub use details::GetArticleDetailsQuery;
pub use rankings::{MAX_RANKING_COUNT, RankArticlesQuery};
pub use recent::RECENT_ARTICLE_COUNT;
pub use search::SearchArticlesQuery;
pub use service::ArticleQueryService;
