//! League directory commands: teams, players, pro teams, settings.

use crate::{
    cli::LeagueArgs,
    espn::types::LeagueSettings,
    league::{Player, ProTeam, Team, TeamKey},
    Result,
};

use super::{
    common::{emit, fmt_points},
    connect,
};

pub fn team_line(team: &Team) -> String {
    format!(
        "{:>3} {:<28} {}-{}-{}  PF {:.2}  PA {:.2}  owner {}",
        team.id,
        team.team_name,
        team.record.wins,
        team.record.losses,
        team.record.ties,
        team.record.points_for,
        team.record.points_against,
        team.owner_name.as_deref().unwrap_or("-"),
    )
}

pub fn team_detail_lines(team: &Team) -> Vec<String> {
    vec![
        team_line(team),
        format!(
            "    abbrev {}  nickname {}  owner id {}",
            team.abbrev,
            team.nickname,
            team.owner_id.as_deref().unwrap_or("-")
        ),
        format!(
            "    waiver rank {}  budget spent {}  acquisitions {}  drops {}  trades {}",
            team.waiver_rank
                .map_or_else(|| "-".to_string(), |r| r.to_string()),
            team.budget_spent,
            team.acquisitions,
            team.drops,
            team.trades
        ),
    ]
}

pub fn player_line(player: &Player) -> String {
    format!(
        "{} {} [{}] pro team {}{}",
        player.id,
        player.name,
        player.default_position,
        player.pro_team_id,
        player
            .injury_status
            .as_deref()
            .map(|s| format!(" ({})", s))
            .unwrap_or_default(),
    )
}

pub fn pro_team_line(team: &ProTeam) -> String {
    format!(
        "{:>2} {:<4} {:<24} bye {}  games {}",
        team.id,
        team.abbrev,
        team.name,
        team.bye_week
            .map_or_else(|| "-".to_string(), |w| w.to_string()),
        team.schedule.values().map(Vec::len).sum::<usize>(),
    )
}

pub fn settings_lines(settings: &LeagueSettings) -> Vec<String> {
    let mut lines = vec![format!("{} ({} teams)", settings.name, settings.size)];
    for item in &settings.scoring_settings.scoring_items {
        let overrides = item
            .points_overrides
            .iter()
            .map(|(slot, pts)| format!("slot {}={}", slot, fmt_points(Some(*pts))))
            .collect::<Vec<_>>();
        lines.push(format!(
            "  stat {:>3}: {}{}",
            item.stat_id,
            fmt_points(Some(item.points)),
            if overrides.is_empty() {
                String::new()
            } else {
                format!(" ({})", overrides.join(", "))
            }
        ));
    }
    lines
}

pub async fn handle_teams(args: &LeagueArgs) -> Result<()> {
    let client = connect(args).await?;
    let teams: Vec<&Team> = client.teams().iter().collect();
    emit(&teams, args.json, |teams| {
        teams.iter().map(|t| team_line(t)).collect()
    })
}

pub async fn handle_team(args: &LeagueArgs, key: &TeamKey) -> Result<()> {
    let client = connect(args).await?;
    let team = client.get_team(key.clone())?;
    emit(team, args.json, team_detail_lines)
}

pub async fn handle_players(args: &LeagueArgs, name: Option<&str>, limit: usize) -> Result<()> {
    let client = connect(args).await?;
    let players: Vec<&Player> = match name {
        Some(needle) => client.players().search(needle).take(limit).collect(),
        None => client.players().iter().take(limit).collect(),
    };
    emit(&players, args.json, |players| {
        players.iter().map(|p| player_line(p)).collect()
    })
}

pub async fn handle_pro_teams(args: &LeagueArgs) -> Result<()> {
    let client = connect(args).await?;
    let teams: Vec<&ProTeam> = client.pro_teams().iter().collect();
    emit(&teams, args.json, |teams| {
        teams.iter().map(|t| pro_team_line(t)).collect()
    })
}

pub async fn handle_settings(args: &LeagueArgs) -> Result<()> {
    let client = connect(args).await?;
    let settings = client.settings().await?;
    emit(&settings, args.json, settings_lines)
}
