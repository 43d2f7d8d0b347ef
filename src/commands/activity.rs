//! Transaction, draft, and free-agent commands.

use crate::{
    cli::LeagueArgs,
    league::{models::Availability, DraftPick, FreeAgent, FreeAgentQuery, Transaction},
    Position, Result, Week,
};

use super::{
    common::{emit, fmt_points},
    connect,
};

pub fn transaction_lines(tx: &Transaction) -> Vec<String> {
    let mut lines = vec![format!(
        "[week {}] {} {} by {}{}",
        tx.scoring_period,
        tx.kind,
        tx.status,
        tx.team.team_name,
        tx.bid_amount
            .map(|bid| format!(" (${})", bid))
            .unwrap_or_default(),
    )];
    for item in &tx.items {
        lines.push(format!(
            "  {} {} {} ({}): {} -> {}",
            item.kind,
            item.player.name,
            item.player.position,
            item.player.pro_team,
            item.from_team,
            item.to_team,
        ));
    }
    lines
}

pub fn draft_line(pick: &DraftPick) -> String {
    format!(
        "{:>3}. R{}P{} {:<28} {}{}",
        pick.overall_pick,
        pick.round,
        pick.round_pick,
        pick.player_name,
        pick.team.team_name,
        if pick.keeper { " (keeper)" } else { "" },
    )
}

pub fn free_agent_line(fa: &FreeAgent) -> String {
    let status = match fa.availability {
        Availability::FreeAgent => "FA",
        Availability::Waivers => "WA",
    };
    format!(
        "{:<28} {:<4} {:<4} {} owned {:.1}%  pts {}  proj {}",
        fa.player.name,
        fa.player.default_position,
        fa.pro_team,
        status,
        fa.percent_owned,
        fmt_points(fa.points),
        fmt_points(fa.projected_points),
    )
}

pub async fn handle_transactions(args: &LeagueArgs) -> Result<()> {
    let client = connect(args).await?;
    let transactions = client.transactions().await?;
    emit(&transactions, args.json, |txs| {
        txs.iter().flat_map(transaction_lines).collect()
    })
}

pub async fn handle_draft(args: &LeagueArgs) -> Result<()> {
    let client = connect(args).await?;
    let picks = client.draft_picks().await?;
    emit(&picks, args.json, |picks| picks.iter().map(draft_line).collect())
}

pub async fn handle_free_agents(
    args: &LeagueArgs,
    week: Option<Week>,
    position: Option<Position>,
    limit: usize,
) -> Result<()> {
    let client = connect(args).await?;
    let query = FreeAgentQuery {
        week,
        position,
        limit,
    };
    let free_agents = client.free_agents(&query).await?;
    emit(&free_agents, args.json, |fas| {
        fas.iter().map(free_agent_line).collect()
    })
}
