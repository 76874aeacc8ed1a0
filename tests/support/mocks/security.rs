// tests/support/mocks/security.rs
use async_trait::async_trait;
use dgn_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::ApplicationError,
    ports::security::TokenManager,
};
use dgn_core::domain::user::Role;

use super::store::{ADMIN_ID, AUTHOR_ID, OTHER_READER_ID, READER_ID};
use crate::support::builders::actor;

/// テスト用トークン定数
pub const READER_TOKEN: &str = "reader-token";
pub const OTHER_READER_TOKEN: &str = "other-reader-token";
pub const AUTHOR_TOKEN: &str = "author-token";
pub const ADMIN_TOKEN: &str = "admin-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

#[derive(Clone, Debug, Default)]
pub struct DummyTokenManager;

#[async_trait]
impl TokenManager for DummyTokenManager {
    async fn issue(&self, _subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        Err(ApplicationError::infrastructure("not implemented"))
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        match token {
            READER_TOKEN => Ok(actor(READER_ID, Role::Reader)),
            OTHER_READER_TOKEN => Ok(actor(OTHER_READER_ID, Role::Reader)),
            AUTHOR_TOKEN => Ok(actor(AUTHOR_ID, Role::Author)),
            ADMIN_TOKEN => Ok(actor(ADMIN_ID, Role::Admin)),
            EXPIRED_TOKEN => Err(ApplicationError::unauthorized("expired token")),
            _ => Err(ApplicationError::unauthorized("invalid token")),
        }
    }
}
