//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use espn_league::{
    cli::{Commands, ESPN},
    commands::{activity, league_data, matchups},
    Result,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so `--json` output stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = ESPN::parse();
    let args = &app.league;

    match app.command {
        Commands::Teams => league_data::handle_teams(args).await?,
        Commands::Team { key } => league_data::handle_team(args, &key).await?,
        Commands::Players { name, limit } => {
            league_data::handle_players(args, name.as_deref(), limit).await?
        }
        Commands::ProTeams => league_data::handle_pro_teams(args).await?,
        Commands::Settings => league_data::handle_settings(args).await?,

        Commands::Boxscore { week, team } => matchups::handle_boxscore(args, week, team).await?,
        Commands::Schedule { team } => matchups::handle_schedule(args, team).await?,

        Commands::Transactions => activity::handle_transactions(args).await?,
        Commands::Draft => activity::handle_draft(args).await?,
        Commands::FreeAgents {
            week,
            position,
            limit,
        } => activity::handle_free_agents(args, week, position, limit).await?,
    }

    Ok(())
}
