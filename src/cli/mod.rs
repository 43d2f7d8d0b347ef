//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{LeagueId, Position, Season, TeamId, Week};

use crate::league::TeamKey;

/// League selection and output options shared by every command
#[derive(Debug, Args)]
pub struct LeagueArgs {
    /// League ID (or set `ESPN_FFL_LEAGUE_ID` env var).
    #[clap(long, short, global = true)]
    pub league_id: Option<LeagueId>,

    /// Season year (e.g. 2025).
    #[clap(long, short, global = true, default_value_t = Season::default())]
    pub season: Season,

    /// Output results as JSON instead of text lines.
    #[clap(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Parser)]
#[clap(name = "espn-league", about = "Read-only ESPN fantasy football league client")]
pub struct ESPN {
    #[clap(flatten)]
    pub league: LeagueArgs,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the league's teams
    Teams,

    /// Show one team, looked up by team id or owner id
    Team {
        /// Team id (numeric) or owner member id (`{GUID}`)
        key: TeamKey,
    },

    /// Search the season's player directory
    Players {
        /// Filter by player name (substring match).
        #[clap(long, short = 'n')]
        name: Option<String>,

        /// Maximum number of players to print.
        #[clap(long, default_value_t = 25)]
        limit: usize,
    },

    /// List NFL teams with bye weeks
    ProTeams,

    /// Show one team's boxscore for a week
    Boxscore {
        #[clap(long, short)]
        week: Week,

        #[clap(long, short)]
        team: TeamId,
    },

    /// Show a team's schedule with margins of victory
    Schedule {
        #[clap(long, short)]
        team: TeamId,
    },

    /// Show the league's recent transactions
    Transactions,

    /// Show draft results
    Draft,

    /// Show available free agents
    FreeAgents {
        /// Scoring period to rank and score by.
        #[clap(long, short)]
        week: Option<Week>,

        /// Filter by eligible position: QB, RB, WR, TE, K, D/ST, FLEX.
        #[clap(long, short = 'p', value_parser = clap::value_parser!(Position))]
        position: Option<Position>,

        /// Maximum number of players to return.
        #[clap(long, default_value_t = crate::core::filters::FREE_AGENT_LIMIT)]
        limit: usize,
    },

    /// Show league name, size, and scoring items
    Settings,
}
