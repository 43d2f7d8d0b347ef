//! Boxscore and schedule commands.

use crate::{
    cli::LeagueArgs,
    league::{Boxscore, ScheduledMatchup},
    Result, TeamId, Week,
};

use super::{
    common::{emit, fmt_points},
    connect,
};

pub fn boxscore_lines(boxscore: &Boxscore) -> Vec<String> {
    let mut lines = vec![format!(
        "Week {} {}: {} vs {} {}",
        boxscore.week,
        boxscore.team_name,
        fmt_points(Some(boxscore.team_points)),
        boxscore.opponent_name.as_deref().unwrap_or("BYE"),
        fmt_points(boxscore.opponent_points),
    )];
    for entry in &boxscore.entries {
        let pro_team = entry
            .player
            .as_ref()
            .map(|p| p.pro_team.as_str())
            .unwrap_or("");
        let points = fmt_points(Some(entry.points));
        lines.push(format!(
            "  {:<6} {:<28} {:<4} {:>9}",
            entry.slot,
            entry.player_name(),
            pro_team,
            if entry.is_starter() {
                points
            } else {
                format!("({})", points)
            },
        ));
    }
    lines
}

pub fn schedule_line(matchup: &ScheduledMatchup) -> String {
    match &matchup.opponent {
        Some(opponent) => format!(
            "Week {:>2} vs {:<28} {} - {}  margin {}",
            matchup.week,
            opponent.team_name,
            fmt_points(Some(matchup.points_for)),
            fmt_points(matchup.points_against),
            fmt_points(matchup.margin),
        ),
        None => format!("Week {:>2} BYE", matchup.week),
    }
}

pub async fn handle_boxscore(args: &LeagueArgs, week: Week, team_id: TeamId) -> Result<()> {
    let client = connect(args).await?;
    let boxscore = client.boxscore(week, team_id).await?;
    emit(&boxscore, args.json, boxscore_lines)
}

pub async fn handle_schedule(args: &LeagueArgs, team_id: TeamId) -> Result<()> {
    let client = connect(args).await?;
    let schedule = client.team_schedule(team_id).await?;
    emit(&schedule, args.json, |schedule| {
        schedule.iter().map(schedule_line).collect()
    })
}
