//! Mint a bearer token for local development.
//!
//! Usage: `issue_token <user-id> <display-name> <reader|author|admin>`, with
//! `BISCUIT_ROOT_PRIVATE_KEY` set to the hex private key matching the
//! service's `BISCUIT_ROOT_PUBLIC_KEY`. `TOKEN_TTL_SECONDS` defaults to 3600.
use anyhow::{Context, Result, bail};
use dgn_core::application::{dto::TokenSubject, ports::security::TokenManager};
use dgn_core::domain::user::{Role, UserId};
use dgn_core::infrastructure::security::token::BiscuitTokenManager;
use std::{env, time::Duration};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().skip(1).collect();
    let [user_id, display_name, role] = args.as_slice() else {
        bail!("usage: issue_token <user-id> <display-name> <reader|author|admin>");
    };

    let user_id = UserId::new(user_id.parse().context("user id must be an integer")?)?;
    let role: Role = role.parse()?;

    let private_key =
        env::var("BISCUIT_ROOT_PRIVATE_KEY").context("BISCUIT_ROOT_PRIVATE_KEY is not set")?;
    let ttl = env::var("TOKEN_TTL_SECONDS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(3600);

    let manager = BiscuitTokenManager::signer(&private_key, Duration::from_secs(ttl))?;
    let issued = manager
        .issue(TokenSubject::new(user_id, display_name.clone(), role))
        .await?;

    println!("{}", issued.token);
    eprintln!("expires at {}", issued.expires_at.to_rfc3339());
    Ok(())
}
