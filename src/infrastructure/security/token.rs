// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Verifies Biscuit bearer tokens against the root public key.
///
/// Tokens are minted by the identity service. A manager built with
/// [`BiscuitTokenManager::signer`] can also issue them, which the
/// `issue_token` development binary relies on.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Option<Arc<KeyPair>>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn verifier(public_key_hex: &str) -> ApplicationResult<Self> {
        let public = PublicKey::from_bytes_hex(public_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self {
            root: None,
            public,
            ttl: Duration::ZERO,
        })
    }

    pub fn signer(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self::from_keypair(KeyPair::from(&private), ttl))
    }

    pub fn from_keypair(keypair: KeyPair, ttl: Duration) -> Self {
        let public = keypair.public();
        Self {
            root: Some(Arc::new(keypair)),
            public,
            ttl,
        }
    }

    pub fn public_key_hex(&self) -> String {
        self.public.to_bytes_hex()
    }
}

fn build_code_and_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (String, HashMap<String, Term>) {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), i64::from(subject.user_id).into());
    params.insert("uname".to_string(), subject.display_name.clone().into());
    params.insert("urole".to_string(), subject.role.as_str().into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());

    let code = String::from(
        r#"
                user({uid}, {uname});
                role({urole});
                issued_at({issued});
                expires_at({exp});
                check if time($now), $now >= {issued};
                check if time($now), $now <= {exp};
                "#,
    );

    (code, params)
}

fn ttl_to_expires_in_seconds(ttl: Duration) -> i64 {
    ChronoDuration::from_std(ttl)
        .unwrap_or_else(|_| ChronoDuration::seconds(ttl.as_secs() as i64))
        .num_seconds()
        .max(0)
}

fn build_and_serialize_biscuit(
    code: &str,
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> ApplicationResult<String> {
    let token = Biscuit::builder()
        .code_with_params(code, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| ApplicationError::infrastructure("no signing key configured"))?;

        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let (code, params) = build_code_and_params(&subject, issued_at, expires_at);

        let token = build_and_serialize_biscuit(&code, params, root)?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: ttl_to_expires_in_seconds(self.ttl),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let mut authorizer = AuthorizerBuilder::new()
            .code("allow if user($id, $name)")
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .time()
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        super::claims::read_claims(&mut authorizer)
    }
}
