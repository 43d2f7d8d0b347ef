//! Error types for the ESPN league client

use std::fmt;

use thiserror::Error;

use crate::cli::types::{TeamId, Week};


pub type Result<T> = std::result::Result<T, EspnError>;

/// Which directory a failed cross-reference was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Team,
    Owner,
    Player,
    ProTeam,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RecordKind::Team => "team",
            RecordKind::Owner => "owner",
            RecordKind::Player => "player",
            RecordKind::ProTeam => "pro team",
        };
        write!(f, "{}", s)
    }
}

#[derive(Error, Debug)]
pub enum EspnError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The league is private and the request carried no (or stale) cookies.
    #[error("Private league, authentication required: {message}")]
    Authorization { message: String },

    #[error("Invalid league: {message}")]
    NotFound { message: String },

    #[error("Unknown error with status code {status}")]
    UnknownServer { status: u16 },

    /// A team, player, or pro-team reference has no record in the fetched directory.
    #[error("No {kind} record found for id {id}")]
    MissingData { kind: RecordKind, id: String },

    /// An owner id shared by several teams cannot pick one of them.
    #[error("Owner {owner_id} owns {} teams: {teams:?}", .teams.len())]
    AmbiguousOwner { owner_id: String, teams: Vec<TeamId> },

    #[error("No matchup found for team {team_id} in week {week}")]
    MatchupNotFound { week: Week, team_id: TeamId },

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid team key: {key}")]
    InvalidTeamKey { key: String },
}

impl EspnError {
    pub(crate) fn missing(kind: RecordKind, id: impl fmt::Display) -> Self {
        EspnError::MissingData {
            kind,
            id: id.to_string(),
        }
    }

    /// HTTP status carried by a server-side failure, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            EspnError::Authorization { .. } => Some(401),
            EspnError::NotFound { .. } => Some(404),
            EspnError::UnknownServer { status } => Some(*status),
            EspnError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
