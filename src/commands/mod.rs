//! Command implementations for the ESPN league CLI

pub mod activity;
pub mod common;
pub mod league_data;
pub mod matchups;


use tracing::debug;

use crate::{
    cli::LeagueArgs, espn::http::ClientConfig, league::LeagueClient, Credentials, EspnError,
    LeagueId, LeagueIdentity, Result, LEAGUE_ID_ENV_VAR,
};

/// Resolve league ID from option or environment variable.
///
/// A set but unparseable environment value is an `InvalidNumber` error.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }
    match std::env::var(LEAGUE_ID_ENV_VAR) {
        Ok(raw) => raw.trim().parse::<LeagueId>(),
        Err(_) => Err(EspnError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}

/// Build the league identity from CLI args and the environment.
pub fn resolve_identity(args: &LeagueArgs) -> Result<LeagueIdentity> {
    Ok(LeagueIdentity {
        league_id: resolve_league_id(args.league_id)?,
        season: args.season,
        credentials: Credentials::from_env(),
    })
}

/// Connect a client for the league named by `args`.
pub async fn connect(args: &LeagueArgs) -> Result<LeagueClient> {
    let identity = resolve_identity(args)?;
    let config = ClientConfig::from_env();
    debug!(
        league_id = %identity.league_id,
        season = %identity.season,
        authenticated = identity.credentials.is_some(),
        base_url = %config.base_url,
        "connecting"
    );
    LeagueClient::connect(identity, config).await
}
