//! Transaction normalization (`view=kona_playercard`).

use crate::{
    core::filters::TRANSACTION_LIMIT,
    espn::types::{RawTransaction, RawTransactionItem},
    league::{
        directory::{PlayerDirectory, ProTeamDirectory, TeamDirectory},
        models::{PlayerRef, Transaction, TransactionItem},
    },
    Result,
};

fn normalize_item(
    item: &RawTransactionItem,
    teams: &TeamDirectory,
    players: &PlayerDirectory,
    pro_teams: &ProTeamDirectory,
) -> Result<TransactionItem> {
    let player = players.get(item.player_id)?;

    Ok(TransactionItem {
        from_team: teams.name_or_none(item.from_team_id)?,
        to_team: teams.name_or_none(item.to_team_id)?,
        player: PlayerRef {
            id: player.id,
            name: player.name.clone(),
            position: player.default_position.clone(),
            pro_team: pro_teams.abbrev(player.pro_team_id)?,
        },
        pick_number: item.overall_pick_number,
        kind: item.kind.clone(),
    })
}

/// Normalize at most the first [`TRANSACTION_LIMIT`] transactions.
///
/// Every team and player reference must resolve; the first miss aborts.
pub fn normalize_transactions(
    raw: &[RawTransaction],
    teams: &TeamDirectory,
    players: &PlayerDirectory,
    pro_teams: &ProTeamDirectory,
) -> Result<Vec<Transaction>> {
    raw.iter()
        .take(TRANSACTION_LIMIT)
        .map(|tx| {
            let items = tx
                .items
                .iter()
                .map(|item| normalize_item(item, teams, players, pro_teams))
                .collect::<Result<Vec<_>>>()?;

            Ok(Transaction {
                id: tx.id.clone(),
                kind: tx.kind.clone(),
                bid_amount: tx.bid_amount,
                scoring_period: tx.scoring_period_id,
                status: tx.status.clone(),
                sub_order: tx.sub_order,
                proposed_date: tx.proposed_date,
                team: teams.by_id(tx.team_id)?.clone(),
                items,
            })
        })
        .collect()
}
