use crate::domain::user::{User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public face of a user as shown next to articles and comments.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: i64,
    pub display_name: String,
    #[serde(default)]
    pub image_location: Option<String>,
}

impl AuthorDto {
    pub fn new(id: UserId, display_name: impl Into<String>, image_location: Option<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            image_location,
        }
    }
}

impl From<User> for AuthorDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            display_name: user.display_name.into(),
            image_location: user.image_location,
        }
    }
}
