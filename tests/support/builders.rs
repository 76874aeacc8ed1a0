// tests/support/builders.rs
use chrono::Duration;
use dgn_core::application::{
    commands::{
        articles::{CreateArticleCommand, UpdateArticleCommand},
        comments::CreateCommentCommand,
    },
    dto::AuthenticatedUser,
};
use dgn_core::domain::user::{Role, UserId};

use super::mocks::{
    store::{ADMIN_ID, AUTHOR_ID, NEWS_CATEGORY, OTHER_READER_ID, READER_ID},
    time::fixed_now,
};

pub fn actor(id: i64, role: Role) -> AuthenticatedUser {
    let now = fixed_now();
    AuthenticatedUser {
        id: UserId::new(id).expect("invalid user id"),
        display_name: format!("user-{id}"),
        role,
        capabilities: role.default_capabilities(),
        issued_at: now,
        expires_at: now + Duration::hours(1),
    }
}

pub fn reader() -> AuthenticatedUser {
    actor(READER_ID, Role::Reader)
}

pub fn other_reader() -> AuthenticatedUser {
    actor(OTHER_READER_ID, Role::Reader)
}

pub fn author() -> AuthenticatedUser {
    actor(AUTHOR_ID, Role::Author)
}

pub fn admin() -> AuthenticatedUser {
    actor(ADMIN_ID, Role::Admin)
}

pub fn create_article(title: &str) -> CreateArticleCommand {
    CreateArticleCommand::builder()
        .title(title)
        .body("Some body text")
        .category_id(NEWS_CATEGORY)
        .build()
        .expect("complete command")
}

pub struct UpdateArticleBuilder {
    command: UpdateArticleCommand,
}

impl UpdateArticleBuilder {
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            command: UpdateArticleCommand {
                id,
                title: title.into(),
                body: "Revised body".into(),
                image_location: None,
                category_id: NEWS_CATEGORY,
                expected_version: None,
            },
        }
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.command.body = body.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.command.image_location = Some(image.into());
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.command.category_id = category_id;
        self
    }

    pub fn version(mut self, version: i64) -> Self {
        self.command.expected_version = Some(version);
        self
    }

    pub fn build(self) -> UpdateArticleCommand {
        self.command
    }
}

pub fn create_comment(article_id: i64, body: &str) -> CreateCommentCommand {
    CreateCommentCommand {
        article_id,
        body: body.into(),
    }
}
