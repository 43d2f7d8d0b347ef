//! Lookup tables built when a client connects.
//!
//! Each directory owns its records and resolves references by id; a miss is a
//! [`EspnError::MissingData`] rather than a silent default.

use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

use serde::Serialize;

use crate::{
    cli::types::{position::position_name, PlayerId, TeamId, Week},
    error::{EspnError, RecordKind},
    espn::types::{RawPlayer, RawProTeam, RawTeam, TeamsEnvelope},
    league::models::{Player, ProTeam, Team, TeamRecord, FREE_AGENT_PRO_TEAM, NO_TEAM},
    Result,
};

/// A team lookup key: the team's own id or its owning member's id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamKey {
    Id(TeamId),
    Owner(String),
}

impl From<TeamId> for TeamKey {
    fn from(id: TeamId) -> Self {
        TeamKey::Id(id)
    }
}

impl From<u32> for TeamKey {
    fn from(id: u32) -> Self {
        TeamKey::Id(TeamId::new(id))
    }
}

impl From<&str> for TeamKey {
    fn from(owner_id: &str) -> Self {
        TeamKey::Owner(owner_id.to_string())
    }
}

impl From<String> for TeamKey {
    fn from(owner_id: String) -> Self {
        TeamKey::Owner(owner_id)
    }
}

/// Numeric input is a team id; anything else is an owner id (ESPN member GUIDs).
impl FromStr for TeamKey {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(EspnError::InvalidTeamKey { key: s.to_string() });
        }
        Ok(match s.parse::<u32>() {
            Ok(id) => TeamKey::Id(TeamId::new(id)),
            Err(_) => TeamKey::Owner(s.to_string()),
        })
    }
}

/// Teams indexed by team id, with a separate owner-id index onto the same records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamDirectory {
    teams: BTreeMap<TeamId, Team>,
    #[serde(skip)]
    by_owner: HashMap<String, Vec<TeamId>>,
}

impl TeamDirectory {
    pub fn from_envelope(envelope: TeamsEnvelope) -> Self {
        let owner_names: HashMap<&str, String> = envelope
            .members
            .iter()
            .filter_map(|m| {
                let name = m.display_name.clone().or_else(|| {
                    match (m.first_name.as_deref(), m.last_name.as_deref()) {
                        (Some(first), Some(last)) => Some(format!("{} {}", first, last)),
                        _ => None,
                    }
                })?;
                Some((m.id.as_str(), name))
            })
            .collect();

        let mut directory = Self::default();
        for raw in &envelope.teams {
            let team = normalize_team(raw, &owner_names);
            directory.insert(team);
        }
        directory
    }

    /// Add or replace a team; every owning member id is indexed.
    pub fn insert(&mut self, team: Team) {
        if let Some(previous) = self.teams.get(&team.id) {
            for owner in &previous.owners {
                if let Some(ids) = self.by_owner.get_mut(owner) {
                    ids.retain(|id| *id != team.id);
                }
            }
            self.by_owner.retain(|_, ids| !ids.is_empty());
        }
        for owner in &team.owners {
            let ids = self.by_owner.entry(owner.clone()).or_default();
            if !ids.contains(&team.id) {
                ids.push(team.id);
            }
        }
        self.teams.insert(team.id, team);
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Teams in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    pub fn by_id(&self, id: TeamId) -> Result<&Team> {
        self.teams
            .get(&id)
            .ok_or_else(|| EspnError::missing(RecordKind::Team, id))
    }

    /// The single team `owner_id` owns or co-owns.
    ///
    /// A member owning several teams is [`EspnError::AmbiguousOwner`]; use
    /// [`TeamDirectory::teams_for_owner`] to list them.
    pub fn by_owner(&self, owner_id: &str) -> Result<&Team> {
        match self.by_owner.get(owner_id).map(Vec::as_slice) {
            Some([id]) => self.by_id(*id),
            Some(ids) if ids.len() > 1 => Err(EspnError::AmbiguousOwner {
                owner_id: owner_id.to_string(),
                teams: ids.to_vec(),
            }),
            _ => Err(EspnError::missing(RecordKind::Owner, owner_id)),
        }
    }

    /// All teams `owner_id` owns or co-owns, in id order.
    pub fn teams_for_owner(&self, owner_id: &str) -> Vec<&Team> {
        let mut ids = self.by_owner.get(owner_id).cloned().unwrap_or_default();
        ids.sort();
        ids.iter().filter_map(|id| self.teams.get(id)).collect()
    }

    pub fn get(&self, key: &TeamKey) -> Result<&Team> {
        match key {
            TeamKey::Id(id) => self.by_id(*id),
            TeamKey::Owner(owner) => self.by_owner(owner),
        }
    }

    /// Team name for a transaction side; team id 0 is [`NO_TEAM`].
    pub fn name_or_none(&self, id: TeamId) -> Result<String> {
        if id.is_none() {
            return Ok(NO_TEAM.to_string());
        }
        Ok(self.by_id(id)?.team_name.clone())
    }
}

fn normalize_team(raw: &RawTeam, owner_names: &HashMap<&str, String>) -> Team {
    let nickname = raw.nickname.clone().unwrap_or_default();
    let team_name = raw.name.clone().unwrap_or_else(|| {
        let full = match raw.location.as_deref() {
            Some(location) if !location.is_empty() => format!("{} {}", location, nickname),
            _ => nickname.clone(),
        };
        full.trim().to_string()
    });
    let owner_id = raw
        .primary_owner
        .clone()
        .or_else(|| raw.owners.first().cloned());
    let owners: Vec<String> = owner_id
        .iter()
        .chain(raw.owners.iter())
        .fold(Vec::new(), |mut acc, id| {
            if !acc.contains(id) {
                acc.push(id.clone());
            }
            acc
        });
    let owner_name = owner_id
        .as_deref()
        .and_then(|id| owner_names.get(id).cloned());
    let record = raw
        .record
        .as_ref()
        .map(|r| TeamRecord {
            wins: r.overall.wins,
            losses: r.overall.losses,
            ties: r.overall.ties,
            points_for: r.overall.points_for,
            points_against: r.overall.points_against,
        })
        .unwrap_or_default();

    Team {
        id: raw.id,
        abbrev: raw.abbrev.clone().unwrap_or_default(),
        team_name,
        nickname,
        owner_id,
        owner_name,
        owners,
        waiver_rank: raw.waiver_rank,
        budget_spent: raw.transaction_counter.acquisition_budget_spent,
        trades: raw.transaction_counter.trades,
        acquisitions: raw.transaction_counter.acquisitions,
        drops: raw.transaction_counter.drops,
        record,
    }
}

/// Season-wide player directory keyed by player id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlayerDirectory {
    players: BTreeMap<PlayerId, Player>,
}

impl PlayerDirectory {
    pub fn from_raw(raw: &[RawPlayer]) -> Self {
        Self {
            players: raw.iter().map(|p| (p.id, normalize_player(p))).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn get(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .get(&id)
            .ok_or_else(|| EspnError::missing(RecordKind::Player, id))
    }

    /// Case-insensitive substring search on player names.
    pub fn search<'a>(&'a self, needle: &str) -> impl Iterator<Item = &'a Player> + 'a {
        let needle = needle.to_lowercase();
        self.players
            .values()
            .filter(move |p| p.name.to_lowercase().contains(&needle))
    }
}

pub(crate) fn normalize_player(raw: &RawPlayer) -> Player {
    Player {
        id: raw.id,
        name: raw.full_name.clone().unwrap_or_else(|| raw.id.to_string()),
        default_position: position_name(raw.default_position_id),
        pro_team_id: raw.pro_team_id,
        eligible_slots: raw.eligible_slots.iter().copied().collect(),
        injury_status: raw.injury_status.clone(),
    }
}

/// NFL teams keyed by id, also reachable by abbreviation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProTeamDirectory {
    teams: BTreeMap<u32, ProTeam>,
    #[serde(skip)]
    by_abbrev: HashMap<String, u32>,
}

impl ProTeamDirectory {
    pub fn from_raw(raw: &[RawProTeam]) -> Self {
        let mut directory = Self::default();
        for team in raw {
            directory
                .by_abbrev
                .insert(team.abbrev.to_uppercase(), team.id);
            directory.teams.insert(
                team.id,
                ProTeam {
                    id: team.id,
                    abbrev: team.abbrev.clone(),
                    name: match (team.location.as_deref(), team.name.as_deref()) {
                        (Some(location), Some(name)) => format!("{} {}", location, name),
                        (None, Some(name)) => name.to_string(),
                        _ => team.abbrev.clone(),
                    },
                    bye_week: (team.bye_week > 0).then(|| Week::new(team.bye_week)),
                    schedule: team.pro_games_by_scoring_period.clone(),
                },
            );
        }
        directory
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProTeam> {
        self.teams.values()
    }

    pub fn get(&self, id: u32) -> Result<&ProTeam> {
        self.teams
            .get(&id)
            .ok_or_else(|| EspnError::missing(RecordKind::ProTeam, id))
    }

    /// Lookup by abbreviation, case-insensitive (`"buf"`, `"BUF"`).
    pub fn by_abbrev(&self, abbrev: &str) -> Result<&ProTeam> {
        let id = self
            .by_abbrev
            .get(&abbrev.to_uppercase())
            .ok_or_else(|| EspnError::missing(RecordKind::ProTeam, abbrev))?;
        self.get(*id)
    }

    /// Abbreviation for a player's pro team; id 0 is always [`FREE_AGENT_PRO_TEAM`].
    pub fn abbrev(&self, id: u32) -> Result<String> {
        if id == 0 {
            return Ok(FREE_AGENT_PRO_TEAM.to_string());
        }
        Ok(self.get(id)?.abbrev.clone())
    }
}
