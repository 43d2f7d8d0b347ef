//! `X-Fantasy-Filter` payloads for ESPN requests.
//!
//! ESPN narrows several views server-side through a JSON object sent in the
//! `X-Fantasy-Filter` request header. Each filter here serializes to the exact
//! shape ESPN expects; unused optional fields are skipped.
//!
//! - **PlayersFilter**: the season-wide player directory (`players_wl`)
//! - **FreeAgentFilter**: league-scoped player pool (`kona_player_info`)
//! - **TransactionsFilter**: recent transactions (`kona_playercard`)

use crate::Result;
use reqwest::header::HeaderValue;
use serde::Serialize;

/// Maximum number of transactions requested and normalized.
pub const TRANSACTION_LIMIT: usize = 50;

/// Default number of free agents requested.
pub const FREE_AGENT_LIMIT: usize = 50;

/// Wrapper for ESPN-style filter values.
///
/// ESPN API expects filter values to be wrapped in objects with a "value" field.
/// For example: `{"filterActive": {"value": true}}`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Val<T> {
    pub value: T,
}

impl<T> Val<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

/// Filter for the `/players` directory endpoint.
///
/// # Examples
///
/// ```rust
/// use espn_league::core::filters::{IntoHeaderValue, PlayersFilter};
///
/// let filter = PlayersFilter::active();
/// let header_value = filter.to_header_value().unwrap();
/// assert_eq!(header_value.to_str().unwrap(), r#"{"filterActive":{"value":true}}"#);
/// ```
#[derive(Debug, Default, Serialize)]
pub struct PlayersFilter {
    #[serde(rename = "filterActive", skip_serializing_if = "Option::is_none")]
    pub filter_active: Option<Val<bool>>,
}

impl PlayersFilter {
    pub fn active() -> Self {
        Self {
            filter_active: Some(Val::new(true)),
        }
    }
}

/// Sort descriptor used by ESPN's player pool (`sortPercOwned` etc.).
#[derive(Debug, Clone, Serialize)]
pub struct Sort {
    #[serde(rename = "sortPriority")]
    pub sort_priority: u8,
    #[serde(rename = "sortAsc")]
    pub sort_asc: bool,
}

/// Inner player-pool filter for `kona_player_info`.
#[derive(Debug, Default, Serialize)]
pub struct PoolFilter {
    #[serde(rename = "filterStatus", skip_serializing_if = "Option::is_none")]
    pub filter_status: Option<Val<Vec<String>>>,

    #[serde(rename = "filterSlotIds", skip_serializing_if = "Option::is_none")]
    pub filter_slot_ids: Option<Val<Vec<u8>>>,

    #[serde(
        rename = "filterRanksForScoringPeriodIds",
        skip_serializing_if = "Option::is_none"
    )]
    pub filter_ranks_for_scoring_period_ids: Option<Val<Vec<u16>>>,

    #[serde(rename = "sortPercOwned", skip_serializing_if = "Option::is_none")]
    pub sort_perc_owned: Option<Sort>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// `{"players": {...}}` envelope for the league player pool.
#[derive(Debug, Default, Serialize)]
pub struct FreeAgentFilter {
    pub players: PoolFilter,
}

/// Build the player-pool filter for available players.
///
/// Only `FREEAGENT` and `WAIVERS` statuses are requested; `slot_ids` narrows to
/// players eligible for those lineup slots and `week` ranks by that period.
pub fn build_free_agent_filter(
    slot_ids: Option<Vec<u8>>,
    week: Option<u16>,
    limit: usize,
) -> FreeAgentFilter {
    FreeAgentFilter {
        players: PoolFilter {
            filter_status: Some(Val::new(vec![
                "FREEAGENT".to_string(),
                "WAIVERS".to_string(),
            ])),
            filter_slot_ids: slot_ids.map(Val::new),
            filter_ranks_for_scoring_period_ids: week.map(|w| Val::new(vec![w])),
            sort_perc_owned: Some(Sort {
                sort_priority: 1,
                sort_asc: false,
            }),
            limit: Some(limit),
        },
    }
}

#[derive(Debug, Serialize)]
pub struct TransactionLimit {
    pub limit: usize,
}

/// `{"transactions": {"limit": N}}` envelope for `kona_playercard`.
#[derive(Debug, Serialize)]
pub struct TransactionsFilter {
    pub transactions: TransactionLimit,
}

impl Default for TransactionsFilter {
    fn default() -> Self {
        Self {
            transactions: TransactionLimit {
                limit: TRANSACTION_LIMIT,
            },
        }
    }
}

/// General-purpose helper: any Serialize → JSON → HeaderValue
pub trait IntoHeaderValue {
    fn to_header_value(&self) -> Result<HeaderValue>;
}

impl<T> IntoHeaderValue for T
where
    T: Serialize,
{
    fn to_header_value(&self) -> Result<HeaderValue> {
        let s = serde_json::to_string(self)?;
        Ok(HeaderValue::from_str(&s)?)
    }
}
