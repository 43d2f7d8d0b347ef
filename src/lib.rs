//! ESPN Fantasy Football League Client
//!
//! A read-only Rust client for ESPN's fantasy football league API. It
//! authenticates with the `espn_s2`/`SWID` session cookies, fetches league,
//! team, player, pro-team, matchup, transaction, and draft data, and
//! normalizes ESPN's nested payloads into linked records.
//!
//! ## Features
//!
//! - **Directories**: teams (by team id or owner id), players, and NFL teams with schedules
//! - **Boxscores**: per-slot roster lines and points for a team and week
//! - **Transactions**: recent adds, drops, and trades with teams and players resolved
//! - **Draft**: picks with player names and drafting teams
//! - **Free agents**: the available player pool for a scoring period
//! - **Schedules**: weekly opponents and margins of victory
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_league::{league::LeagueClient, Credentials, LeagueId, Season};
//!
//! # async fn example() -> espn_league::Result<()> {
//! let client = LeagueClient::new(LeagueId::new(123456), Season::new(2024), Credentials::from_env()).await?;
//!
//! for team in client.teams().iter() {
//!     println!("{}: {}", team.id, team.team_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export ESPN_FFL_LEAGUE_ID=123456
//! export ESPN_S2=...        # private leagues only
//! export ESPN_SWID={...}    # private leagues only
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;
pub mod league;

// Re-export commonly used types
pub use cli::types::{LeagueId, PlayerId, Position, Season, TeamId, Week};
pub use core::http::Credentials;
pub use error::{EspnError, RecordKind, Result};
pub use espn::http::ClientConfig;
pub use league::{FreeAgentQuery, LeagueClient, LeagueIdentity, TeamKey};

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_FFL_LEAGUE_ID";
pub const SWID_ENV_VAR: &str = "ESPN_SWID";
pub const S2_ENV_VAR: &str = "ESPN_S2";
pub const BASE_URL_ENV_VAR: &str = "ESPN_FFL_BASE_URL";
