// src/domain/user/entity.rs
use crate::domain::user::value_objects::{DisplayName, Role, UserId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub display_name: DisplayName,
    pub image_location: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}
