//! League client: initial directory fetch plus on-demand normalized views.
//!
//! ```rust,no_run
//! use espn_league::{league::LeagueClient, Credentials, LeagueId, Season, Week, TeamId};
//!
//! # async fn example() -> espn_league::Result<()> {
//! let client = LeagueClient::new(
//!     LeagueId::new(123456),
//!     Season::new(2024),
//!     Credentials::from_env(),
//! )
//! .await?;
//!
//! let team = client.get_team(TeamId::new(1))?;
//! let boxscore = client.boxscore(Week::new(3), team.id).await?;
//! println!("{} scored {}", team.team_name, boxscore.team_points);
//! # Ok(())
//! # }
//! ```

pub mod boxscore;
pub mod directory;
pub mod draft;
pub mod free_agents;
pub mod models;
pub mod schedule;
pub mod transactions;

use tracing::{debug, info};

use crate::{
    cli::types::{LeagueId, Season, TeamId, Week},
    core::{
        filters::{build_free_agent_filter, IntoHeaderValue, PlayersFilter, TransactionsFilter},
        http::Credentials,
    },
    espn::{
        http::{views, ClientConfig, EspnHttp},
        types::{
            DraftEnvelope, LeagueEnvelope, LeagueSettings, PlayerPoolEnvelope, ProTeamsEnvelope,
            RawPlayer, ScheduleEnvelope, TeamsEnvelope, TransactionsEnvelope,
        },
    },
    Result,
};

pub use directory::{PlayerDirectory, ProTeamDirectory, TeamDirectory, TeamKey};
pub use free_agents::FreeAgentQuery;
pub use models::{
    Boxscore, BoxscoreEntry, DraftPick, FreeAgent, LeagueIdentity, Player, ProTeam,
    ScheduledMatchup, Team, Transaction, TransactionItem,
};

/// Read-only client for one ESPN league season.
///
/// Construction fetches the team, player, and pro-team directories; every
/// other accessor issues its own request and resolves references against
/// those directories.
#[derive(Debug, Clone)]
pub struct LeagueClient {
    identity: LeagueIdentity,
    http: EspnHttp,
    teams: TeamDirectory,
    players: PlayerDirectory,
    pro_teams: ProTeamDirectory,
}

impl LeagueClient {
    /// Connect to ESPN's public API host.
    pub async fn new(
        league_id: LeagueId,
        season: Season,
        credentials: Option<Credentials>,
    ) -> Result<Self> {
        let identity = LeagueIdentity {
            league_id,
            season,
            credentials,
        };
        Self::connect(identity, ClientConfig::default()).await
    }

    /// Connect with an explicit endpoint configuration.
    pub async fn connect(identity: LeagueIdentity, config: ClientConfig) -> Result<Self> {
        let http = EspnHttp::new(config, identity.credentials.as_ref())?;
        let mut client = Self {
            identity,
            http,
            teams: TeamDirectory::default(),
            players: PlayerDirectory::default(),
            pro_teams: ProTeamDirectory::default(),
        };
        client.refresh().await?;
        Ok(client)
    }

    /// Re-fetch all three directories, replacing the current ones.
    pub async fn refresh(&mut self) -> Result<()> {
        let teams = self.fetch_teams().await?;
        let players = self.fetch_players().await?;
        let pro_teams = self.fetch_pro_teams().await?;

        info!(
            league_id = %self.identity.league_id,
            season = %self.identity.season,
            teams = teams.len(),
            players = players.len(),
            pro_teams = pro_teams.len(),
            "league directories loaded"
        );

        self.teams = teams;
        self.players = players;
        self.pro_teams = pro_teams;
        Ok(())
    }

    async fn fetch_teams(&self) -> Result<TeamDirectory> {
        let envelope: TeamsEnvelope = self
            .http
            .get_view(&self.league_url(), views::TEAM, &[], None)
            .await?;
        Ok(TeamDirectory::from_envelope(envelope))
    }

    async fn fetch_players(&self) -> Result<PlayerDirectory> {
        let url = self.http.players_url(self.identity.season);
        let filter = PlayersFilter::active().to_header_value()?;
        let raw: Vec<RawPlayer> = self
            .http
            .get_view(&url, views::PLAYERS, &[], Some(filter))
            .await?;
        Ok(PlayerDirectory::from_raw(&raw))
    }

    async fn fetch_pro_teams(&self) -> Result<ProTeamDirectory> {
        let url = self.http.season_url(self.identity.season);
        let envelope: ProTeamsEnvelope = self
            .http
            .get_view(&url, views::PRO_TEAM_SCHEDULES, &[], None)
            .await?;
        Ok(ProTeamDirectory::from_raw(&envelope.settings.pro_teams))
    }

    fn league_url(&self) -> String {
        self.http
            .league_url(self.identity.league_id, self.identity.season)
    }

    pub fn identity(&self) -> &LeagueIdentity {
        &self.identity
    }

    pub fn teams(&self) -> &TeamDirectory {
        &self.teams
    }

    pub fn players(&self) -> &PlayerDirectory {
        &self.players
    }

    pub fn pro_teams(&self) -> &ProTeamDirectory {
        &self.pro_teams
    }

    /// Look a team up by its id or by its owner's member id.
    pub fn get_team(&self, key: impl Into<TeamKey>) -> Result<&Team> {
        self.teams.get(&key.into())
    }

    /// One team's roster and points for `week`.
    pub async fn boxscore(&self, week: Week, team_id: TeamId) -> Result<Boxscore> {
        let params = [
            ("scoringPeriodId", week.to_string()),
            ("matchupPeriodId", week.to_string()),
            ("forTeamId", team_id.to_string()),
        ];
        let envelope: ScheduleEnvelope = self
            .http
            .get_view(&self.league_url(), views::BOXSCORE, &params, None)
            .await?;
        debug!(matchups = envelope.schedule.len(), %week, %team_id, "boxscore payload");

        boxscore::normalize_boxscore(
            &envelope.schedule,
            self.identity.season,
            week,
            team_id,
            &self.teams,
            &self.pro_teams,
        )
    }

    /// The league's most recent transactions, capped at 50.
    pub async fn transactions(&self) -> Result<Vec<Transaction>> {
        let filter = TransactionsFilter::default().to_header_value()?;
        let envelope: TransactionsEnvelope = self
            .http
            .get_view(&self.league_url(), views::PLAYER_CARD, &[], Some(filter))
            .await?;
        debug!(
            transactions = envelope.transactions.len(),
            "transactions payload"
        );

        transactions::normalize_transactions(
            &envelope.transactions,
            &self.teams,
            &self.players,
            &self.pro_teams,
        )
    }

    /// Draft results in overall pick order.
    pub async fn draft_picks(&self) -> Result<Vec<DraftPick>> {
        let envelope: DraftEnvelope = self
            .http
            .get_view(&self.league_url(), views::DRAFT_DETAIL, &[], None)
            .await?;
        if !envelope.draft_detail.drafted {
            debug!(in_progress = envelope.draft_detail.in_progress, "draft not complete");
        }

        draft::normalize_draft(&envelope.draft_detail, &self.teams, &self.players)
    }

    /// Players nobody in the league owns, filtered by period and eligibility.
    pub async fn free_agents(&self, query: &FreeAgentQuery) -> Result<Vec<FreeAgent>> {
        let slot_ids = query.position.map(|p| vec![p.slot_id()]);
        let filter =
            build_free_agent_filter(slot_ids, query.week.map(|w| w.as_u16()), query.limit)
                .to_header_value()?;
        let params: Vec<(&str, String)> = query
            .week
            .map(|w| vec![("scoringPeriodId", w.to_string())])
            .unwrap_or_default();

        let envelope: PlayerPoolEnvelope = self
            .http
            .get_view(&self.league_url(), views::PLAYER_INFO, &params, Some(filter))
            .await?;

        free_agents::normalize_free_agents(
            &envelope.players,
            query,
            self.identity.season,
            &self.pro_teams,
        )
    }

    /// A team's season schedule with opponents and margins of victory.
    pub async fn team_schedule(&self, team_id: TeamId) -> Result<Vec<ScheduledMatchup>> {
        let envelope: ScheduleEnvelope = self
            .http
            .get_view(&self.league_url(), views::MATCHUP_SCORE, &[], None)
            .await?;

        schedule::normalize_team_schedule(&envelope.schedule, team_id, &self.teams)
    }

    pub async fn settings(&self) -> Result<LeagueSettings> {
        let envelope: LeagueEnvelope = self
            .http
            .get_view(&self.league_url(), views::SETTINGS, &[], None)
            .await?;
        Ok(envelope.settings)
    }
}
