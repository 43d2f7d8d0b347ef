//! Normalized league records.
//!
//! Everything here is built from the raw payloads in `crate::espn::types` with
//! cross-references already resolved, so callers never chase ids.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::{
    cli::types::{
        slots::{BENCH_SLOT, IR_SLOT},
        LeagueId, PlayerId, Season, TeamId, Week,
    },
    core::http::Credentials,
    espn::types::{PlayerStats, ProGame},
};

/// Placeholder text used for roster slots with nobody assigned.
pub const EMPTY_SLOT: &str = "empty";

/// Team name reported for ESPN's team id 0 (waivers, free agency).
pub const NO_TEAM: &str = "None";

/// Abbreviation of ESPN's pro-team id 0, the free-agent pseudo team.
pub const FREE_AGENT_PRO_TEAM: &str = "FA";

/// Which league and season a client talks to, and as whom.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueIdentity {
    pub league_id: LeagueId,
    pub season: Season,
    pub credentials: Option<Credentials>,
}

impl LeagueIdentity {
    pub fn new(league_id: LeagueId, season: Season) -> Self {
        Self {
            league_id,
            season,
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub points_for: f64,
    pub points_against: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub abbrev: String,
    pub team_name: String,
    pub nickname: String,
    /// Primary owner's member id.
    pub owner_id: Option<String>,
    pub owner_name: Option<String>,
    /// Every owning member id, primary owner first.
    pub owners: Vec<String>,
    pub waiver_rank: Option<u32>,
    pub budget_spent: u32,
    pub trades: u32,
    pub acquisitions: u32,
    pub drops: u32,
    pub record: TeamRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub default_position: String,
    pub pro_team_id: u32,
    pub eligible_slots: BTreeSet<u8>,
    pub injury_status: Option<String>,
}

impl Player {
    pub fn is_eligible_for(&self, slot_id: u8) -> bool {
        self.eligible_slots.contains(&slot_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProTeam {
    pub id: u32,
    pub abbrev: String,
    pub name: String,
    pub bye_week: Option<Week>,
    /// Games keyed by scoring period, in week order.
    pub schedule: BTreeMap<Week, Vec<ProGame>>,
}

impl ProTeam {
    /// Opponent pro-team id for `week`, `None` on a bye or unscheduled week.
    pub fn opponent(&self, week: Week) -> Option<u32> {
        let game = self.schedule.get(&week)?.first()?;
        if game.home_pro_team_id == self.id {
            Some(game.away_pro_team_id)
        } else {
            Some(game.home_pro_team_id)
        }
    }
}

/// A filled roster slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxscorePlayer {
    pub id: PlayerId,
    pub name: String,
    pub pro_team: String,
    pub eligible_slots: Vec<String>,
    pub stats: Vec<PlayerStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxscoreEntry {
    pub slot_id: u8,
    pub slot: String,
    /// `None` is the empty placeholder for an unfilled slot.
    pub player: Option<BoxscorePlayer>,
    pub points: f64,
}

impl BoxscoreEntry {
    pub fn is_empty(&self) -> bool {
        self.player.is_none()
    }

    pub fn player_name(&self) -> &str {
        self.player.as_ref().map_or(EMPTY_SLOT, |p| p.name.as_str())
    }

    /// Bench and IR slots do not count toward the team score.
    pub fn is_starter(&self) -> bool {
        self.slot_id != BENCH_SLOT && self.slot_id != IR_SLOT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Boxscore {
    pub team_id: TeamId,
    pub team_name: String,
    pub season: Season,
    pub week: Week,
    pub team_points: f64,
    pub opponent_id: Option<TeamId>,
    pub opponent_name: Option<String>,
    pub opponent_points: Option<f64>,
    pub entries: Vec<BoxscoreEntry>,
}

/// Player as referenced from a transaction item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRef {
    pub id: PlayerId,
    pub name: String,
    pub position: String,
    pub pro_team: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionItem {
    pub from_team: String,
    pub to_team: String,
    pub player: PlayerRef,
    pub pick_number: Option<u32>,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: String,
    pub kind: String,
    pub bid_amount: Option<u32>,
    pub scoring_period: Week,
    pub status: String,
    pub sub_order: Option<u32>,
    /// Epoch milliseconds.
    pub proposed_date: Option<i64>,
    pub team: Team,
    pub items: Vec<TransactionItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftPick {
    pub round: u32,
    pub round_pick: u32,
    pub overall_pick: u32,
    pub player_id: PlayerId,
    pub player_name: String,
    pub team_id: TeamId,
    pub team: Team,
    pub bid_amount: Option<u32>,
    pub keeper: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Availability {
    FreeAgent,
    Waivers,
}

impl Availability {
    pub fn from_status(status: &str) -> Option<Self> {
        match status {
            "FREEAGENT" => Some(Availability::FreeAgent),
            "WAIVERS" => Some(Availability::Waivers),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreeAgent {
    pub player: Player,
    pub pro_team: String,
    pub availability: Availability,
    pub percent_owned: f64,
    pub points: Option<f64>,
    pub projected_points: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledMatchup {
    pub week: Week,
    pub team_id: TeamId,
    /// `None` on a bye.
    pub opponent: Option<Team>,
    pub points_for: f64,
    pub points_against: Option<f64>,
    /// Margin of victory, negative for a loss.
    pub margin: Option<f64>,
}
