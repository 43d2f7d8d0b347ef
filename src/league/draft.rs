//! Draft normalization (`view=mDraftDetail`).

use crate::{
    espn::types::RawDraftDetail,
    league::{
        directory::{PlayerDirectory, TeamDirectory},
        models::DraftPick,
    },
    Result,
};

/// Picks in overall order, each with its player name and team resolved.
pub fn normalize_draft(
    detail: &RawDraftDetail,
    teams: &TeamDirectory,
    players: &PlayerDirectory,
) -> Result<Vec<DraftPick>> {
    let mut picks = detail
        .picks
        .iter()
        .map(|pick| {
            Ok(DraftPick {
                round: pick.round_id,
                round_pick: pick.round_pick_number,
                overall_pick: pick.overall_pick_number,
                player_id: pick.player_id,
                player_name: players.get(pick.player_id)?.name.clone(),
                team_id: pick.team_id,
                team: teams.by_id(pick.team_id)?.clone(),
                bid_amount: pick.bid_amount,
                keeper: pick.keeper,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    picks.sort_by_key(|p| p.overall_pick);
    Ok(picks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::types::{PlayerId, TeamId},
        error::{EspnError, RecordKind},
        espn::types::{DraftEnvelope, RawPlayer, TeamsEnvelope},
    };
    use serde_json::json;

    fn directories() -> (TeamDirectory, PlayerDirectory) {
        let teams: TeamsEnvelope = serde_json::from_value(json!({
            "teams": [
                { "id": 1, "name": "Team Alpha" },
                { "id": 2, "name": "Team Beta" }
            ]
        }))
        .unwrap();
        let players: Vec<RawPlayer> = serde_json::from_value(json!([
            { "id": 4241389, "fullName": "CeeDee Lamb", "defaultPositionId": 3 },
            { "id": 4262921, "fullName": "Justin Jefferson", "defaultPositionId": 3 },
            { "id": 3929630, "fullName": "Saquon Barkley", "defaultPositionId": 2 }
        ]))
        .unwrap();
        (
            TeamDirectory::from_envelope(teams),
            PlayerDirectory::from_raw(&players),
        )
    }

    fn detail() -> RawDraftDetail {
        let envelope: DraftEnvelope = serde_json::from_value(json!({
            "draftDetail": {
                "drafted": true,
                "inProgress": false,
                "picks": [
                    { "overallPickNumber": 2, "roundId": 1, "roundPickNumber": 2, "playerId": 4262921, "teamId": 2 },
                    { "overallPickNumber": 1, "roundId": 1, "roundPickNumber": 1, "playerId": 4241389, "teamId": 1, "keeper": true },
                    { "overallPickNumber": 3, "roundId": 2, "roundPickNumber": 1, "playerId": 3929630, "teamId": 2, "bidAmount": 0 }
                ]
            }
        }))
        .unwrap();
        envelope.draft_detail
    }

    #[test]
    fn test_picks_resolve_player_names_and_keep_ids() {
        let (teams, players) = directories();
        let picks = normalize_draft(&detail(), &teams, &players).unwrap();

        assert_eq!(picks.len(), 3);
        assert_eq!(picks[0].player_name, "CeeDee Lamb");
        assert_eq!(picks[0].player_id, PlayerId::new(4241389));
        assert_eq!(picks[1].player_name, "Justin Jefferson");
        assert_eq!(picks[2].player_name, "Saquon Barkley");
        assert_eq!(picks[2].round, 2);
    }

    #[test]
    fn test_picks_sorted_with_team_attribution() {
        let (teams, players) = directories();
        let picks = normalize_draft(&detail(), &teams, &players).unwrap();

        let overall: Vec<u32> = picks.iter().map(|p| p.overall_pick).collect();
        assert_eq!(overall, vec![1, 2, 3]);
        assert_eq!(picks[0].team.team_name, "Team Alpha");
        assert_eq!(picks[1].team_id, TeamId::new(2));
        assert!(picks[0].keeper);
        assert!(!picks[1].keeper);
    }

    #[test]
    fn test_undrafted_league_has_no_picks() {
        let (teams, players) = directories();
        let empty = RawDraftDetail {
            drafted: false,
            in_progress: false,
            picks: Vec::new(),
        };
        assert!(normalize_draft(&empty, &teams, &players).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_drafting_team_is_missing_data() {
        let (_, players) = directories();
        let result = normalize_draft(&detail(), &TeamDirectory::default(), &players);

        assert!(matches!(
            result,
            Err(EspnError::MissingData {
                kind: RecordKind::Team,
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_drafted_player_is_missing_data() {
        let (teams, _) = directories();
        let result = normalize_draft(&detail(), &teams, &PlayerDirectory::default());

        match result {
            Err(EspnError::MissingData { kind, id }) => {
                assert_eq!(kind, RecordKind::Player);
                assert_eq!(id, "4262921");
            }
            other => panic!("Expected MissingData, got {:?}", other),
        }
    }
}
