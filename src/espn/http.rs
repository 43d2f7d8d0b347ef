//! HTTP transport for ESPN's fantasy v3 API.
//!
//! [`EspnHttp`] owns one pooled `reqwest::Client`, the immutable endpoint
//! configuration, and the default headers (JSON accept plus session cookies).
//! Every response status is checked before decoding:
//!
//! - `401` → [`EspnError::Authorization`]
//! - `404` → [`EspnError::NotFound`]
//! - any other non-200 → [`EspnError::UnknownServer`]

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client, StatusCode,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::{LeagueId, Season},
    core::http::{default_headers, Credentials},
    error::EspnError,
    espn::types::ErrorBody,
    Result, BASE_URL_ENV_VAR,
};


/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

/// Header ESPN reads server-side filters from.
pub const FANTASY_FILTER_HEADER: &str = "x-fantasy-filter";

/// ESPN `view` names used by the client.
pub mod views {
    pub const TEAM: &str = "mTeam";
    pub const BOXSCORE: &str = "mBoxscore";
    pub const MATCHUP_SCORE: &str = "mMatchupScore";
    pub const DRAFT_DETAIL: &str = "mDraftDetail";
    pub const SETTINGS: &str = "mSettings";
    pub const PLAYER_CARD: &str = "kona_playercard";
    pub const PLAYER_INFO: &str = "kona_player_info";
    pub const PLAYERS: &str = "players_wl";
    pub const PRO_TEAM_SCHEDULES: &str = "proTeamSchedules";
}

/// Endpoint configuration, fixed for the lifetime of a client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: FFL_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("espn-league/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another host (test doubles, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Default configuration, with the base URL overridden by `ESPN_FFL_BASE_URL` if set.
    pub fn from_env() -> Self {
        match std::env::var(BASE_URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(url),
            _ => Self::default(),
        }
    }
}

/// Map a non-success status and its body to the crate error taxonomy.
pub fn status_error(status: StatusCode, body: &str) -> EspnError {
    let message = || {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message())
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string())
    };

    match status {
        StatusCode::UNAUTHORIZED => EspnError::Authorization { message: message() },
        StatusCode::NOT_FOUND => EspnError::NotFound { message: message() },
        other => EspnError::UnknownServer {
            status: other.as_u16(),
        },
    }
}

/// Thin GET-and-decode layer over `reqwest`.
#[derive(Debug, Clone)]
pub struct EspnHttp {
    client: Client,
    config: ClientConfig,
    headers: HeaderMap,
}

impl EspnHttp {
    pub fn new(config: ClientConfig, credentials: Option<&Credentials>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            headers: default_headers(credentials)?,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `{base}/seasons/{year}/segments/0/leagues/{league_id}`
    pub fn league_url(&self, league_id: LeagueId, season: Season) -> String {
        format!(
            "{}/seasons/{}/segments/0/leagues/{}",
            self.config.base_url, season, league_id
        )
    }

    /// `{base}/seasons/{year}/players`
    pub fn players_url(&self, season: Season) -> String {
        format!("{}/seasons/{}/players", self.config.base_url, season)
    }

    /// `{base}/seasons/{year}`
    pub fn season_url(&self, season: Season) -> String {
        format!("{}/seasons/{}", self.config.base_url, season)
    }

    /// GET `url` with `view` plus extra query params, optionally filtered.
    pub async fn get_view<T: DeserializeOwned>(
        &self,
        url: &str,
        view: &str,
        params: &[(&str, String)],
        filter: Option<HeaderValue>,
    ) -> Result<T> {
        let mut query: Vec<(&str, String)> = Vec::with_capacity(params.len() + 1);
        query.push(("view", view.to_string()));
        query.extend(params.iter().cloned());

        let mut builder = self
            .client
            .get(url)
            .headers(self.headers.clone())
            .query(&query);
        if let Some(value) = filter {
            debug!(view, filter = ?value, "applying fantasy filter");
            builder = builder.header(FANTASY_FILTER_HEADER, value);
        }

        debug!(url, view, ?params, "GET");
        let res = builder.send().await?;
        let status = res.status();
        let body = res.text().await?;

        if status != StatusCode::OK {
            debug!(url, view, status = status.as_u16(), "ESPN request failed");
            return Err(status_error(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
