//! Season schedule and margins of victory (`view=mMatchupScore`).

use crate::{
    cli::types::TeamId,
    espn::types::RawMatchup,
    league::{directory::TeamDirectory, models::ScheduledMatchup},
    Result,
};

/// One team's matchups in week order, opponents linked and margins computed.
pub fn normalize_team_schedule(
    schedule: &[RawMatchup],
    team_id: TeamId,
    teams: &TeamDirectory,
) -> Result<Vec<ScheduledMatchup>> {
    teams.by_id(team_id)?;

    let mut matchups = Vec::new();
    for m in schedule {
        let (side, opponent) = match &m.away {
            _ if m.home.team_id == team_id => (&m.home, m.away.as_ref()),
            Some(away) if away.team_id == team_id => (away, Some(&m.home)),
            _ => continue,
        };

        let points_against = opponent.map(|o| o.total_points);
        matchups.push(ScheduledMatchup {
            week: m.matchup_period_id,
            team_id,
            opponent: opponent
                .map(|o| teams.by_id(o.team_id).cloned())
                .transpose()?,
            points_for: side.total_points,
            points_against,
            margin: points_against.map(|against| side.total_points - against),
        });
    }

    matchups.sort_by_key(|m| m.week);
    Ok(matchups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::types::Week,
        espn::types::{ScheduleEnvelope, TeamsEnvelope},
    };
    use serde_json::json;

    fn teams() -> TeamDirectory {
        let envelope: TeamsEnvelope = serde_json::from_value(json!({
            "teams": [
                { "id": 1, "name": "Team Alpha" },
                { "id": 2, "name": "Team Beta" },
                { "id": 3, "name": "Team Gamma" }
            ]
        }))
        .unwrap();
        TeamDirectory::from_envelope(envelope)
    }

    fn schedule() -> Vec<RawMatchup> {
        let envelope: ScheduleEnvelope = serde_json::from_value(json!({
            "schedule": [
                {
                    "matchupPeriodId": 2,
                    "home": { "teamId": 3, "totalPoints": 120.0 },
                    "away": { "teamId": 1, "totalPoints": 101.5 }
                },
                {
                    "matchupPeriodId": 1,
                    "home": { "teamId": 1, "totalPoints": 110.25 },
                    "away": { "teamId": 2, "totalPoints": 95.0 }
                },
                {
                    "matchupPeriodId": 3,
                    "home": { "teamId": 1, "totalPoints": 0.0 }
                }
            ]
        }))
        .unwrap();
        envelope.schedule
    }

    #[test]
    fn test_schedule_links_opponents_and_margins() {
        let matchups = normalize_team_schedule(&schedule(), TeamId::new(1), &teams()).unwrap();

        assert_eq!(matchups.len(), 3);

        assert_eq!(matchups[0].week, Week::new(1));
        assert_eq!(
            matchups[0].opponent.as_ref().unwrap().team_name,
            "Team Beta"
        );
        assert_eq!(matchups[0].margin, Some(15.25));

        assert_eq!(matchups[1].week, Week::new(2));
        assert_eq!(matchups[1].points_for, 101.5);
        assert_eq!(matchups[1].margin, Some(-18.5));

        assert!(matchups[2].opponent.is_none());
        assert!(matchups[2].margin.is_none());
    }

    #[test]
    fn test_margins_are_antisymmetric() {
        let alpha = normalize_team_schedule(&schedule(), TeamId::new(1), &teams()).unwrap();
        let beta = normalize_team_schedule(&schedule(), TeamId::new(2), &teams()).unwrap();

        assert_eq!(beta.len(), 1);
        assert_eq!(beta[0].margin.unwrap(), -alpha[0].margin.unwrap());
    }

    #[test]
    fn test_unknown_team_is_an_error() {
        assert!(normalize_team_schedule(&schedule(), TeamId::new(9), &teams()).is_err());
    }
}
