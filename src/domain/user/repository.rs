use crate::domain::errors::DomainResult;
use crate::domain::user::{entity::User, value_objects::UserId};
use async_trait::async_trait;

/// Users are provisioned by the identity service; this crate only reads them.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;
}
