//! Fantasy football position types and utilities.

use crate::error::EspnError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Fantasy football player positions.
///
/// ESPN numbers positions in two different spaces: a player's
/// `defaultPositionId` (1 = QB, 2 = RB, ...) and the lineup slot ids listed
/// in `eligibleSlots` (0 = QB, 2 = RB, 4 = WR, ...). This enum bridges both.
///
/// # Position Types
///
/// - **Individual positions**: QB, RB, WR, TE, K, D/ST
/// - **Flexible positions**: FLEX (RB/WR/TE)
///
/// # Examples
///
/// ```rust
/// use espn_league::Position;
///
/// let qb = Position::QB;
/// assert_eq!(qb.to_string(), "QB");
/// assert_eq!(Position::from_position_id(16).unwrap(), Position::DEF);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    DEF,
    K,
    FLEX,
}

impl Position {
    /// Convert a player's `defaultPositionId` to a Position.
    pub fn from_position_id(id: i32) -> Result<Self, EspnError> {
        match id {
            1 => Ok(Position::QB),
            2 => Ok(Position::RB),
            3 => Ok(Position::WR),
            4 => Ok(Position::TE),
            5 => Ok(Position::K),
            16 => Ok(Position::DEF),
            _ => Err(EspnError::InvalidPosition {
                position: id.to_string(),
            }),
        }
    }

    /// Lineup slot id a player must list in `eligibleSlots` to play this position.
    pub fn slot_id(&self) -> u8 {
        match self {
            Position::QB => 0,
            Position::RB => 2,
            Position::WR => 4,
            Position::TE => 6,
            Position::DEF => 16,
            Position::K => 17,
            Position::FLEX => 23,
        }
    }

    pub fn is_eligible(&self, eligible_slots: &[u8]) -> bool {
        eligible_slots.contains(&self.slot_id())
    }
}

/// Position label for a `defaultPositionId`, `"UNKNOWN"` when unmapped.
pub fn position_name(default_position_id: i32) -> String {
    Position::from_position_id(default_position_id)
        .map(|p| p.to_string())
        .unwrap_or_else(|_| "UNKNOWN".to_string())
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DEF => "D/ST",
            Position::K => "K",
            Position::FLEX => "FLEX",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            "K" => Ok(Position::K),
            "FLEX" => Ok(Position::FLEX),
            _ => Err(EspnError::InvalidPosition {
                position: s.to_string(),
            }),
        }
    }
}
