// src/application/commands/articles/create.rs
use super::{ArticleCommandService, capability::ensure_capability};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleBody, ArticleTitle, ImageLocation, NewArticle},
        category::CategoryId,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub image_location: Option<String>,
    pub category_id: i64,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    image_location: Option<String>,
    category_id: Option<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn image_location(mut self, image_location: impl Into<String>) -> Self {
        self.image_location = Some(image_location.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
            image_location: self.image_location,
            category_id: self.category_id.ok_or("category is required")?,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;

        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let image_location = ImageLocation::parse_optional(command.image_location)?;
        let category_id = CategoryId::new(command.category_id)?;

        self.ensure_category_exists(category_id).await?;
        self.ensure_title_available(&title).await?;

        let new_article = NewArticle {
            title,
            body,
            image_location,
            category_id,
            author_id: actor.id,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, author_id = %actor.id, "article created");
        Ok(created.into())
    }
}
