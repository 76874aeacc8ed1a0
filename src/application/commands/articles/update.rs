use super::{ArticleCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleBody, ArticleId, ArticleTitle, ArticleUpdate, ArticleVersion, ImageLocation},
        category::CategoryId,
        errors::DomainError,
    },
};

/// Full replacement of an article's editable fields.
///
/// `expected_version` is the version the client last saw. When omitted the
/// version read at the start of the update is used instead.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub image_location: Option<String>,
    pub category_id: i64,
    pub expected_version: Option<i64>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "update")?;

        let id = ArticleId::new(command.id)?;
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let image_location = ImageLocation::parse_optional(command.image_location)?;
        let category_id = CategoryId::new(command.category_id)?;
        let client_version = command.expected_version.map(ArticleVersion::new).transpose()?;

        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let expected_version = client_version.unwrap_or(article.version);
        if expected_version != article.version {
            tracing::warn!(article_id = %id, "stale article version on update");
            return Err(ApplicationError::conflict(
                "article was modified by another request",
            ));
        }

        if !article.has_title(&title) {
            self.ensure_title_available(&title).await?;
        }
        self.ensure_category_exists(category_id).await?;

        article.revise(title, body, image_location, category_id);
        let update = ArticleUpdate::from_revised(&article, expected_version);

        match self.write_repo.update(update).await {
            Ok(updated) => Ok(updated.into()),
            Err(DomainError::Conflict(_)) => {
                // Zero rows matched: either the article is gone or someone
                // else bumped the version first.
                match self.read_repo.find_by_id(id).await? {
                    None => Err(ApplicationError::not_found("article not found")),
                    Some(_) => {
                        tracing::warn!(article_id = %id, "concurrent article update");
                        Err(ApplicationError::conflict(
                            "article was modified by another request",
                        ))
                    }
                }
            }
            Err(err) => Err(err.into()),
        }
    }
}
