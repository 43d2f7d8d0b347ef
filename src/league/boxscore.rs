//! Boxscore normalization (`view=mBoxscore`).

use tracing::debug;

use crate::{
    cli::types::{
        slots::{lineup_slot_name, slot_names},
        Season, TeamId, Week,
    },
    error::EspnError,
    espn::types::{RawMatchup, RawMatchupSide, RawRosterEntry},
    league::{
        directory::{ProTeamDirectory, TeamDirectory},
        models::{Boxscore, BoxscoreEntry, BoxscorePlayer},
    },
    Result,
};

/// Team id substituted for the away side of a matchup that has none (bye week).
pub const MISSING_AWAY_TEAM: TeamId = TeamId(99);

fn away_team_id(matchup: &RawMatchup) -> TeamId {
    matchup
        .away
        .as_ref()
        .map_or(MISSING_AWAY_TEAM, |side| side.team_id)
}

/// Find the requested team's side of its matchup in `week`, plus the opposing side.
fn select_side(
    schedule: &[RawMatchup],
    week: Week,
    team_id: TeamId,
) -> Option<(&RawMatchupSide, Option<&RawMatchupSide>)> {
    let matchup = schedule.iter().find(|m| {
        m.matchup_period_id == week && (m.home.team_id == team_id || away_team_id(m) == team_id)
    })?;

    if matchup.home.team_id == team_id {
        Some((&matchup.home, matchup.away.as_ref()))
    } else {
        matchup.away.as_ref().map(|away| (away, Some(&matchup.home)))
    }
}

fn normalize_entry(entry: &RawRosterEntry, pro_teams: &ProTeamDirectory) -> Result<BoxscoreEntry> {
    let slot = lineup_slot_name(entry.lineup_slot_id).to_string();
    let pool = entry.player_pool_entry.as_ref();

    let Some(player) = pool.and_then(|p| p.player.as_ref()) else {
        return Ok(BoxscoreEntry {
            slot_id: entry.lineup_slot_id,
            slot,
            player: None,
            points: 0.0,
        });
    };

    Ok(BoxscoreEntry {
        slot_id: entry.lineup_slot_id,
        slot,
        player: Some(BoxscorePlayer {
            id: player.id,
            name: player
                .full_name
                .clone()
                .unwrap_or_else(|| player.id.to_string()),
            pro_team: pro_teams.abbrev(player.pro_team_id)?,
            eligible_slots: slot_names(&player.eligible_slots),
            stats: player.stats.clone(),
        }),
        points: pool.and_then(|p| p.applied_stat_total).unwrap_or(0.0),
    })
}

/// Build one team's boxscore for `week` out of the league schedule payload.
pub fn normalize_boxscore(
    schedule: &[RawMatchup],
    season: Season,
    week: Week,
    team_id: TeamId,
    teams: &TeamDirectory,
    pro_teams: &ProTeamDirectory,
) -> Result<Boxscore> {
    let (side, opponent) =
        select_side(schedule, week, team_id).ok_or(EspnError::MatchupNotFound { week, team_id })?;

    let (team_points, entries) = match &side.roster_for_current_scoring_period {
        Some(roster) => {
            let entries = roster
                .entries
                .iter()
                .map(|e| normalize_entry(e, pro_teams))
                .collect::<Result<Vec<_>>>()?;
            (roster.applied_stat_total, entries)
        }
        None => {
            debug!(%team_id, %week, "matchup side has no roster, using totalPoints");
            (side.total_points, Vec::new())
        }
    };

    let opponent_name = opponent
        .map(|o| teams.by_id(o.team_id).map(|t| t.team_name.clone()))
        .transpose()?;

    Ok(Boxscore {
        team_id: side.team_id,
        team_name: teams.by_id(side.team_id)?.team_name.clone(),
        season,
        week,
        team_points,
        opponent_id: opponent.map(|o| o.team_id),
        opponent_name,
        opponent_points: opponent.map(|o| {
            o.roster_for_current_scoring_period
                .as_ref()
                .map_or(o.total_points, |r| r.applied_stat_total)
        }),
        entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::types::PlayerId,
        espn::types::{ProTeamsEnvelope, ScheduleEnvelope, TeamsEnvelope},
        error::RecordKind,
    };
    use serde_json::json;

    fn teams() -> TeamDirectory {
        let envelope: TeamsEnvelope = serde_json::from_value(json!({
            "teams": [
                { "id": 1, "location": "Team", "nickname": "Alpha" },
                { "id": 2, "location": "Team", "nickname": "Beta" },
                { "id": 5, "location": "Team", "nickname": "Bye" }
            ]
        }))
        .unwrap();
        TeamDirectory::from_envelope(envelope)
    }

    fn pro_teams() -> ProTeamDirectory {
        let envelope: ProTeamsEnvelope = serde_json::from_value(json!({
            "settings": { "proTeams": [
                { "id": 2, "abbrev": "Buf" },
                { "id": 12, "abbrev": "KC" }
            ]}
        }))
        .unwrap();
        ProTeamDirectory::from_raw(&envelope.settings.pro_teams)
    }

    fn schedule() -> Vec<RawMatchup> {
        let envelope: ScheduleEnvelope = serde_json::from_value(json!({
            "schedule": [
                {
                    "matchupPeriodId": 3,
                    "home": {
                        "teamId": 1,
                        "totalPoints": 99.0,
                        "rosterForCurrentScoringPeriod": {
                            "appliedStatTotal": 104.3,
                            "entries": [
                                {
                                    "lineupSlotId": 0,
                                    "playerId": 3918298,
                                    "playerPoolEntry": {
                                        "appliedStatTotal": 28.7,
                                        "player": {
                                            "id": 3918298,
                                            "fullName": "Josh Allen",
                                            "defaultPositionId": 1,
                                            "proTeamId": 2,
                                            "eligibleSlots": [0, 7, 20, 21],
                                            "stats": [{
                                                "seasonId": 2024,
                                                "scoringPeriodId": 3,
                                                "statSourceId": 0,
                                                "statSplitTypeId": 1,
                                                "appliedTotal": 28.7,
                                                "stats": { "3": 263.0 }
                                            }]
                                        }
                                    }
                                },
                                {
                                    "lineupSlotId": 23,
                                    "playerPoolEntry": {}
                                }
                            ]
                        }
                    },
                    "away": {
                        "teamId": 2,
                        "totalPoints": 88.1,
                        "rosterForCurrentScoringPeriod": {
                            "appliedStatTotal": 88.1,
                            "entries": [
                                {
                                    "lineupSlotId": 2,
                                    "playerPoolEntry": {
                                        "player": {
                                            "id": 3116385,
                                            "fullName": "Isiah Pacheco",
                                            "defaultPositionId": 2,
                                            "proTeamId": 12,
                                            "eligibleSlots": [2, 3, 23, 20, 21]
                                        }
                                    }
                                }
                            ]
                        }
                    }
                },
                {
                    "matchupPeriodId": 3,
                    "home": { "teamId": 5, "totalPoints": 77.0 }
                }
            ]
        }))
        .unwrap();
        envelope.schedule
    }

    #[test]
    fn test_home_side_selected_with_empty_slot() {
        let box_score = normalize_boxscore(
            &schedule(),
            Season::new(2024),
            Week::new(3),
            TeamId::new(1),
            &teams(),
            &pro_teams(),
        )
        .unwrap();

        assert_eq!(box_score.team_id, TeamId::new(1));
        assert_eq!(box_score.team_name, "Team Alpha");
        assert_eq!(box_score.team_points, 104.3);
        assert_eq!(box_score.opponent_id, Some(TeamId::new(2)));
        assert_eq!(box_score.opponent_name.as_deref(), Some("Team Beta"));
        assert_eq!(box_score.opponent_points, Some(88.1));
        assert_eq!(box_score.entries.len(), 2);

        let qb = &box_score.entries[0];
        assert_eq!(qb.slot, "QB");
        assert_eq!(qb.points, 28.7);
        let player = qb.player.as_ref().unwrap();
        assert_eq!(player.id, PlayerId::new(3918298));
        assert_eq!(player.pro_team, "Buf");
        assert_eq!(player.eligible_slots, vec!["QB", "OP", "BE", "IR"]);
        assert_eq!(player.stats.len(), 1);

        let flex = &box_score.entries[1];
        assert!(flex.is_empty());
        assert_eq!(flex.slot, "RB/WR/TE");
        assert_eq!(flex.player_name(), "empty");
        assert_eq!(flex.points, 0.0);
    }

    #[test]
    fn test_away_side_selected_and_missing_points_default_to_zero() {
        let box_score = normalize_boxscore(
            &schedule(),
            Season::new(2024),
            Week::new(3),
            TeamId::new(2),
            &teams(),
            &pro_teams(),
        )
        .unwrap();

        assert_eq!(box_score.team_id, TeamId::new(2));
        assert_eq!(box_score.opponent_id, Some(TeamId::new(1)));
        assert_eq!(box_score.entries.len(), 1);
        assert_eq!(box_score.entries[0].player_name(), "Isiah Pacheco");
        assert_eq!(box_score.entries[0].points, 0.0);
    }

    #[test]
    fn test_bye_week_team_has_no_opponent() {
        let box_score = normalize_boxscore(
            &schedule(),
            Season::new(2024),
            Week::new(3),
            TeamId::new(5),
            &teams(),
            &pro_teams(),
        )
        .unwrap();

        assert!(box_score.opponent_id.is_none());
        assert!(box_score.opponent_points.is_none());
        assert_eq!(box_score.team_points, 77.0);
        assert!(box_score.entries.is_empty());
    }

    #[test]
    fn test_sentinel_team_id_never_matches_missing_away_side() {
        let result = normalize_boxscore(
            &schedule(),
            Season::new(2024),
            Week::new(3),
            MISSING_AWAY_TEAM,
            &teams(),
            &pro_teams(),
        );

        assert!(matches!(result, Err(EspnError::MatchupNotFound { .. })));
    }

    #[test]
    fn test_wrong_week_is_matchup_not_found() {
        let result = normalize_boxscore(
            &schedule(),
            Season::new(2024),
            Week::new(4),
            TeamId::new(1),
            &teams(),
            &pro_teams(),
        );

        match result {
            Err(EspnError::MatchupNotFound { week, team_id }) => {
                assert_eq!(week, Week::new(4));
                assert_eq!(team_id, TeamId::new(1));
            }
            other => panic!("Expected MatchupNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_pro_team_is_missing_data() {
        let pro_teams = ProTeamDirectory::default();
        let result = normalize_boxscore(
            &schedule(),
            Season::new(2024),
            Week::new(3),
            TeamId::new(1),
            &teams(),
            &pro_teams,
        );

        assert!(matches!(
            result,
            Err(EspnError::MissingData {
                kind: RecordKind::ProTeam,
                ..
            })
        ));
    }
}
