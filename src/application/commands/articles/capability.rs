// src/application/commands/articles/capability.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

pub(crate) fn ensure_capability(
    actor: &AuthenticatedUser,
    resource: &str,
    action: &str,
) -> ApplicationResult<()> {
    if actor.has_capability(resource, action) {
        Ok(())
    } else {
        tracing::warn!(
            user_id = %actor.id,
            role = %actor.role,
            "rejected {resource}:{action}"
        );
        Err(ApplicationError::unauthorized(format!(
            "missing capability {resource}:{action}"
        )))
    }
}
