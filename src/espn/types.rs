//! Raw ESPN payload models.
//!
//! These mirror ESPN's wire format closely and are deserialized straight from
//! the API responses. Normalized records live in `crate::league::models`.

use crate::cli::types::{PlayerId, Season, TeamId, Week};
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

fn de_str_key_map_u8_f64<'de, D>(deserializer: D) -> Result<BTreeMap<u8, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, f64> = Deserialize::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(k, v)| k.parse::<u8>().map(|kk| (kk, v)).map_err(D::Error::custom))
        .collect()
}

fn de_str_key_map_week_games<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<Week, Vec<ProGame>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: BTreeMap<String, Vec<ProGame>> = Deserialize::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(k, v)| {
            k.parse::<u16>()
                .map(|kk| (Week::new(kk), v))
                .map_err(D::Error::custom)
        })
        .collect()
}

/// ESPN error body: `{"messages": [...], "details": [{"message": ...}]}`.
/// Older responses use `{"error": [{"message": ...}]}`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Vec<ErrorDetail>,
    #[serde(default)]
    pub messages: Vec<String>,
    #[serde(default)]
    pub details: Vec<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// First server-supplied message, checking the legacy `error` list first.
    pub fn message(&self) -> Option<String> {
        self.error
            .iter()
            .find_map(|e| e.message.clone())
            .or_else(|| self.messages.first().cloned())
            .or_else(|| self.details.iter().find_map(|d| d.message.clone()))
    }
}

// --- mTeam ---------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct TeamsEnvelope {
    #[serde(default)]
    pub teams: Vec<RawTeam>,
    #[serde(default)]
    pub members: Vec<RawMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTeam {
    pub id: TeamId,
    #[serde(default)]
    pub abbrev: Option<String>,
    /// Newer payloads carry a single display name
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(rename = "primaryOwner", default)]
    pub primary_owner: Option<String>,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(rename = "waiverRank", default)]
    pub waiver_rank: Option<u32>,
    #[serde(rename = "transactionCounter", default)]
    pub transaction_counter: TransactionCounter,
    #[serde(default)]
    pub record: Option<RawRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionCounter {
    #[serde(rename = "acquisitionBudgetSpent", default)]
    pub acquisition_budget_spent: u32,
    #[serde(default)]
    pub acquisitions: u32,
    #[serde(default)]
    pub drops: u32,
    #[serde(default)]
    pub trades: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub overall: RawRecordLine,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecordLine {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    #[serde(rename = "pointsFor", default)]
    pub points_for: f64,
    #[serde(rename = "pointsAgainst", default)]
    pub points_against: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMember {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
}

// --- players_wl / shared player shape -------------------------------------

/// Player data from ESPN API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawPlayer {
    pub id: PlayerId,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "defaultPositionId", default)]
    pub default_position_id: i32,
    #[serde(rename = "proTeamId", default)]
    pub pro_team_id: u32,
    #[serde(rename = "eligibleSlots", default)]
    pub eligible_slots: Vec<u8>,
    #[serde(rename = "injuryStatus", default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub ownership: Option<Ownership>,
    #[serde(default)]
    pub stats: Vec<PlayerStats>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Ownership {
    #[serde(rename = "percentOwned", default)]
    pub percent_owned: f64,
}

/// Player statistics for a specific period
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerStats {
    #[serde(rename = "seasonId")]
    pub season_id: Season,
    #[serde(rename = "scoringPeriodId")]
    pub scoring_period_id: Week,
    /// 0 = actual, 1 = projected
    #[serde(rename = "statSourceId")]
    pub stat_source_id: u8,
    #[serde(rename = "statSplitTypeId")]
    pub stat_split_type_id: u8,
    #[serde(rename = "appliedTotal", default)]
    pub applied_total: Option<f64>,
    #[serde(default)]
    pub stats: BTreeMap<String, f64>,
}

// --- proTeamSchedules ------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ProTeamsEnvelope {
    pub settings: ProTeamSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProTeamSettings {
    #[serde(rename = "proTeams", default)]
    pub pro_teams: Vec<RawProTeam>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProTeam {
    pub id: u32,
    pub abbrev: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// 0 when the team has no bye (e.g. the FA pseudo team)
    #[serde(rename = "byeWeek", default)]
    pub bye_week: u16,
    #[serde(
        rename = "proGamesByScoringPeriod",
        deserialize_with = "de_str_key_map_week_games",
        default
    )]
    pub pro_games_by_scoring_period: BTreeMap<Week, Vec<ProGame>>,
}

/// A single NFL game as listed in a pro team's schedule.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProGame {
    pub id: u64,
    /// Kickoff, epoch milliseconds
    #[serde(default)]
    pub date: Option<i64>,
    #[serde(rename = "homeProTeamId")]
    pub home_pro_team_id: u32,
    #[serde(rename = "awayProTeamId")]
    pub away_pro_team_id: u32,
    #[serde(rename = "scoringPeriodId")]
    pub scoring_period_id: Week,
}

// --- mBoxscore / mMatchupScore -------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleEnvelope {
    #[serde(default)]
    pub schedule: Vec<RawMatchup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMatchup {
    #[serde(rename = "matchupPeriodId")]
    pub matchup_period_id: Week,
    pub home: RawMatchupSide,
    /// Absent on bye weeks
    #[serde(default)]
    pub away: Option<RawMatchupSide>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMatchupSide {
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    #[serde(rename = "totalPoints", default)]
    pub total_points: f64,
    #[serde(rename = "rosterForCurrentScoringPeriod", default)]
    pub roster_for_current_scoring_period: Option<RawRoster>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRoster {
    #[serde(rename = "appliedStatTotal", default)]
    pub applied_stat_total: f64,
    #[serde(default)]
    pub entries: Vec<RawRosterEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRosterEntry {
    #[serde(rename = "lineupSlotId")]
    pub lineup_slot_id: u8,
    #[serde(rename = "playerPoolEntry", default)]
    pub player_pool_entry: Option<RawPlayerPoolEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPlayerPoolEntry {
    #[serde(rename = "appliedStatTotal", default)]
    pub applied_stat_total: Option<f64>,
    #[serde(default)]
    pub player: Option<RawPlayer>,
}

// --- kona_playercard (transactions) ---------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct TransactionsEnvelope {
    #[serde(default)]
    pub transactions: Vec<RawTransaction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTransaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(rename = "bidAmount", default)]
    pub bid_amount: Option<u32>,
    #[serde(rename = "scoringPeriodId")]
    pub scoring_period_id: Week,
    pub status: String,
    #[serde(rename = "subOrder", default)]
    pub sub_order: Option<u32>,
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    #[serde(rename = "proposedDate", default)]
    pub proposed_date: Option<i64>,
    #[serde(default)]
    pub items: Vec<RawTransactionItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTransactionItem {
    #[serde(rename = "fromTeamId", default)]
    pub from_team_id: TeamId,
    #[serde(rename = "toTeamId", default)]
    pub to_team_id: TeamId,
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(rename = "overallPickNumber", default)]
    pub overall_pick_number: Option<u32>,
    #[serde(rename = "type")]
    pub kind: String,
}

// --- mDraftDetail ----------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct DraftEnvelope {
    #[serde(rename = "draftDetail")]
    pub draft_detail: RawDraftDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDraftDetail {
    #[serde(default)]
    pub drafted: bool,
    #[serde(rename = "inProgress", default)]
    pub in_progress: bool,
    #[serde(default)]
    pub picks: Vec<RawDraftPick>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDraftPick {
    #[serde(rename = "overallPickNumber")]
    pub overall_pick_number: u32,
    #[serde(rename = "roundId")]
    pub round_id: u32,
    #[serde(rename = "roundPickNumber", default)]
    pub round_pick_number: u32,
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    #[serde(rename = "bidAmount", default)]
    pub bid_amount: Option<u32>,
    #[serde(default)]
    pub keeper: bool,
}

// --- kona_player_info (free agents) ---------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerPoolEnvelope {
    #[serde(default)]
    pub players: Vec<RawPoolPlayer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPoolPlayer {
    pub id: PlayerId,
    #[serde(rename = "onTeamId", default)]
    pub on_team_id: TeamId,
    #[serde(default)]
    pub status: Option<String>,
    pub player: RawPlayer,
}

// --- mSettings -------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoringItem {
    #[serde(rename = "statId")]
    pub stat_id: u16,
    /// Base points for this stat (used when no override exists for the player's slot)
    pub points: f64,
    /// Overrides by lineup slot id (keys come in as strings)
    #[serde(
        rename = "pointsOverrides",
        deserialize_with = "de_str_key_map_u8_f64",
        default
    )]
    pub points_overrides: BTreeMap<u8, f64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScoringSettings {
    #[serde(rename = "scoringItems", default)]
    pub scoring_items: Vec<ScoringItem>,
}

/// Root we deserialize out of mSettings
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LeagueSettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub size: u32,
    #[serde(rename = "scoringSettings")]
    pub scoring_settings: ScoringSettings,
}

/// Top-level envelope for mSettings
#[derive(Deserialize)]
pub struct LeagueEnvelope {
    pub settings: LeagueSettings,
}
