use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleHighlightDto, LikedArticleDto},
    error::ApplicationResult,
};

pub const MAX_RANKING_COUNT: u32 = 100;

pub struct RankArticlesQuery {
    pub count: u32,
}

impl RankArticlesQuery {
    /// `None` when nothing should be fetched at all.
    fn limit(&self) -> Option<u32> {
        match self.count {
            0 => None,
            count => Some(count.min(MAX_RANKING_COUNT)),
        }
    }
}

impl ArticleQueryService {
    /// Articles with the most comments, ties broken by ascending id.
    /// Articles nobody commented on are left out.
    pub async fn most_commented_articles(
        &self,
        query: RankArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleHighlightDto>> {
        let Some(limit) = query.limit() else {
            return Ok(Vec::new());
        };
        let records = self.read_repo.most_commented(limit).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Articles with the most likes, ties broken by ascending id. Articles
    /// without likes still qualify.
    pub async fn most_liked_articles(
        &self,
        query: RankArticlesQuery,
    ) -> ApplicationResult<Vec<LikedArticleDto>> {
        let Some(limit) = query.limit() else {
            return Ok(Vec::new());
        };
        let records = self.read_repo.most_liked(limit).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_count_fetches_nothing() {
        assert_eq!(RankArticlesQuery { count: 0 }.limit(), None);
    }

    #[test]
    fn count_is_clamped() {
        assert_eq!(RankArticlesQuery { count: 3 }.limit(), Some(3));
        assert_eq!(
            RankArticlesQuery { count: 5_000 }.limit(),
            Some(MAX_RANKING_COUNT)
        );
    }
}
