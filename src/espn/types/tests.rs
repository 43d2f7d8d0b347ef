//! Unit tests for ESPN payload types

use super::*;
use serde_json::json;

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn test_scoring_item_deserialization() {
        let json = json!({
            "statId": 53,
            "points": 0.04,
            "pointsOverrides": {
                "0": 0.02,
                "2": 0.05
            }
        });

        let item: ScoringItem = serde_json::from_value(json).unwrap();
        assert_eq!(item.stat_id, 53);
        assert_eq!(item.points, 0.04);
        assert_eq!(item.points_overrides.get(&0), Some(&0.02));
        assert_eq!(item.points_overrides.get(&2), Some(&0.05));
    }

    #[test]
    fn test_scoring_item_rejects_non_numeric_override_key() {
        let json = json!({
            "statId": 53,
            "points": 0.04,
            "pointsOverrides": { "QB": 0.02 }
        });

        assert!(serde_json::from_value::<ScoringItem>(json).is_err());
    }

    #[test]
    fn test_league_settings_envelope() {
        let json = json!({
            "settings": {
                "name": "Sunday Funday",
                "size": 10,
                "scoringSettings": {
                    "scoringItems": [
                        { "statId": 1, "points": 4.0 }
                    ]
                }
            }
        });

        let envelope: LeagueEnvelope = serde_json::from_value(json).unwrap();
        assert_eq!(envelope.settings.name, "Sunday Funday");
        assert_eq!(envelope.settings.size, 10);
        assert_eq!(envelope.settings.scoring_settings.scoring_items.len(), 1);
    }

    #[test]
    fn test_team_with_optional_fields_missing() {
        let json = json!({ "id": 3 });

        let team: RawTeam = serde_json::from_value(json).unwrap();
        assert_eq!(team.id, TeamId::new(3));
        assert!(team.name.is_none());
        assert!(team.owners.is_empty());
        assert_eq!(team.transaction_counter.trades, 0);
        assert!(team.record.is_none());
    }

    #[test]
    fn test_team_envelope_deserialization() {
        let json = json!({
            "teams": [{
                "id": 1,
                "abbrev": "ALP",
                "location": "Team",
                "nickname": "Alpha",
                "primaryOwner": "{OWNER-1}",
                "owners": ["{OWNER-1}"],
                "waiverRank": 4,
                "transactionCounter": {
                    "acquisitionBudgetSpent": 37,
                    "acquisitions": 6,
                    "drops": 5,
                    "trades": 1
                },
                "record": {
                    "overall": {
                        "wins": 3, "losses": 2, "ties": 0,
                        "pointsFor": 612.4, "pointsAgainst": 580.1
                    }
                }
            }],
            "members": [{ "id": "{OWNER-1}", "displayName": "alpha_gm" }]
        });

        let envelope: TeamsEnvelope = serde_json::from_value(json).unwrap();
        let team = &envelope.teams[0];
        assert_eq!(team.waiver_rank, Some(4));
        assert_eq!(team.transaction_counter.acquisition_budget_spent, 37);
        assert_eq!(team.record.as_ref().unwrap().overall.wins, 3);
        assert_eq!(
            envelope.members[0].display_name.as_deref(),
            Some("alpha_gm")
        );
    }

    #[test]
    fn test_player_defense_negative_id() {
        let json = json!({
            "id": -16001,
            "fullName": "Falcons D/ST",
            "defaultPositionId": 16,
            "proTeamId": 1,
            "eligibleSlots": [16, 20, 21]
        });

        let player: RawPlayer = serde_json::from_value(json).unwrap();
        assert_eq!(player.id, PlayerId::new(-16001));
        assert_eq!(player.eligible_slots, vec![16, 20, 21]);
        assert!(player.stats.is_empty());
    }

    #[test]
    fn test_pro_team_schedule_keys_parse_to_weeks() {
        let json = json!({
            "settings": {
                "proTeams": [{
                    "id": 2,
                    "abbrev": "Buf",
                    "name": "Bills",
                    "location": "Buffalo",
                    "byeWeek": 7,
                    "proGamesByScoringPeriod": {
                        "10": [{
                            "id": 401547500,
                            "date": 1699218000000i64,
                            "homeProTeamId": 2,
                            "awayProTeamId": 4,
                            "scoringPeriodId": 10
                        }],
                        "1": [{
                            "id": 401547400,
                            "homeProTeamId": 20,
                            "awayProTeamId": 2,
                            "scoringPeriodId": 1
                        }]
                    }
                }]
            }
        });

        let envelope: ProTeamsEnvelope = serde_json::from_value(json).unwrap();
        let team = &envelope.settings.pro_teams[0];
        let weeks: Vec<u16> = team
            .pro_games_by_scoring_period
            .keys()
            .map(|w| w.as_u16())
            .collect();
        assert_eq!(weeks, vec![1, 10]);
        assert_eq!(team.bye_week, 7);
        assert!(team.pro_games_by_scoring_period[&Week::new(1)][0]
            .date
            .is_none());
    }

    #[test]
    fn test_pro_team_schedule_rejects_bad_week_key() {
        let json = json!({
            "id": 2,
            "abbrev": "Buf",
            "proGamesByScoringPeriod": { "week-one": [] }
        });

        assert!(serde_json::from_value::<RawProTeam>(json).is_err());
    }

    #[test]
    fn test_matchup_without_away_side() {
        let json = json!({
            "matchupPeriodId": 14,
            "home": { "teamId": 5, "totalPoints": 101.5 }
        });

        let matchup: RawMatchup = serde_json::from_value(json).unwrap();
        assert!(matchup.away.is_none());
        assert!(matchup.home.roster_for_current_scoring_period.is_none());
    }

    #[test]
    fn test_roster_entry_without_player() {
        let json = json!({
            "lineupSlotId": 23,
            "playerId": -1,
            "playerPoolEntry": {}
        });

        let entry: RawRosterEntry = serde_json::from_value(json).unwrap();
        let pool = entry.player_pool_entry.unwrap();
        assert!(pool.player.is_none());
        assert!(pool.applied_stat_total.is_none());
    }

    #[test]
    fn test_transaction_item_defaults_team_ids_to_none() {
        let json = json!({
            "playerId": 4262921,
            "type": "ADD"
        });

        let item: RawTransactionItem = serde_json::from_value(json).unwrap();
        assert!(item.from_team_id.is_none());
        assert!(item.to_team_id.is_none());
        assert!(item.overall_pick_number.is_none());
    }

    #[test]
    fn test_error_body_message_precedence() {
        let legacy: ErrorBody =
            serde_json::from_value(json!({"error": [{"message": "legacy"}]})).unwrap();
        assert_eq!(legacy.message().as_deref(), Some("legacy"));

        let current: ErrorBody = serde_json::from_value(json!({
            "messages": ["You are not authorized to view this League."],
            "details": [{"message": "detail"}]
        }))
        .unwrap();
        assert_eq!(
            current.message().as_deref(),
            Some("You are not authorized to view this League.")
        );

        let details: ErrorBody =
            serde_json::from_value(json!({"details": [{"message": "detail"}]})).unwrap();
        assert_eq!(details.message().as_deref(), Some("detail"));

        assert!(ErrorBody::default().message().is_none());
    }
}
