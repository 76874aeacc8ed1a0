// src/infrastructure/security/claims.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Role, UserId};
use biscuit_auth::{Authorizer, builder::Fact, error};
use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// Read the caller identity out of an authorized token.
///
/// Queries only see facts from the authority block, so blocks appended by
/// the token holder cannot change the user or the role. Capabilities come
/// from the role alone.
pub fn read_claims(authorizer: &mut Authorizer) -> ApplicationResult<AuthenticatedUser> {
    let (user_id, display_name) = single(
        query::<(i64, String)>(authorizer, "claim($id, $name) <- user($id, $name)")?,
        "user",
    )?;
    let (role,) = single(query::<(String,)>(authorizer, "claim($r) <- role($r)")?, "role")?;
    let (issued_at,) = single(
        query::<(SystemTime,)>(authorizer, "claim($t) <- issued_at($t)")?,
        "issued_at",
    )?;
    let (expires_at,) = single(
        query::<(SystemTime,)>(authorizer, "claim($t) <- expires_at($t)")?,
        "expires_at",
    )?;

    let id = UserId::new(user_id).map_err(|_| ApplicationError::unauthorized("invalid user id"))?;
    let role: Role = role
        .parse()
        .map_err(|_| ApplicationError::unauthorized("unknown role"))?;

    Ok(AuthenticatedUser {
        id,
        display_name,
        role,
        capabilities: role.default_capabilities(),
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

fn query<T>(authorizer: &mut Authorizer, rule: &str) -> ApplicationResult<Vec<T>>
where
    T: TryFrom<Fact, Error = error::Token>,
{
    authorizer
        .query(rule)
        .map_err(|err| ApplicationError::unauthorized(err.to_string()))
}

fn single<T>(mut values: Vec<T>, claim: &str) -> ApplicationResult<T> {
    match values.len() {
        1 => Ok(values.remove(0)),
        0 => Err(ApplicationError::unauthorized(format!("missing {claim}"))),
        _ => Err(ApplicationError::unauthorized(format!("ambiguous {claim}"))),
    }
}
