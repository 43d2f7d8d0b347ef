//! Free-agent pool normalization (`view=kona_player_info`).

use crate::{
    cli::types::{Position, Season, Week},
    core::filters::FREE_AGENT_LIMIT,
    espn::{
        compute::{applied_points, ACTUAL_SOURCE, PROJECTED_SOURCE},
        types::RawPoolPlayer,
    },
    league::{
        directory::{normalize_player, ProTeamDirectory},
        models::{Availability, FreeAgent},
    },
    Result,
};

/// What to ask ESPN's player pool for.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeAgentQuery {
    /// Scoring period to rank and score by; `None` lets ESPN use the current one.
    pub week: Option<Week>,
    pub position: Option<Position>,
    pub limit: usize,
}

impl Default for FreeAgentQuery {
    fn default() -> Self {
        Self {
            week: None,
            position: None,
            limit: FREE_AGENT_LIMIT,
        }
    }
}

impl FreeAgentQuery {
    pub fn for_week(week: Week) -> Self {
        Self {
            week: Some(week),
            ..Self::default()
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Keep unowned, available players that match the query, in ESPN's order.
pub fn normalize_free_agents(
    raw: &[RawPoolPlayer],
    query: &FreeAgentQuery,
    season: Season,
    pro_teams: &ProTeamDirectory,
) -> Result<Vec<FreeAgent>> {
    let mut agents = Vec::new();

    for entry in raw {
        if agents.len() >= query.limit {
            break;
        }
        if !entry.on_team_id.is_none() {
            continue;
        }
        let Some(availability) = entry.status.as_deref().and_then(Availability::from_status)
        else {
            continue;
        };
        if let Some(position) = query.position {
            if !position.is_eligible(&entry.player.eligible_slots) {
                continue;
            }
        }

        let (points, projected_points) = match query.week {
            Some(week) => (
                applied_points(&entry.player.stats, season, week, ACTUAL_SOURCE),
                applied_points(&entry.player.stats, season, week, PROJECTED_SOURCE),
            ),
            None => (None, None),
        };

        agents.push(FreeAgent {
            player: normalize_player(&entry.player),
            pro_team: pro_teams.abbrev(entry.player.pro_team_id)?,
            availability,
            percent_owned: entry
                .player
                .ownership
                .as_ref()
                .map_or(0.0, |o| o.percent_owned),
            points,
            projected_points,
        });
    }

    Ok(agents)
}
