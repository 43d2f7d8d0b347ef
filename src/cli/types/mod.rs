//! Type-safe wrappers and code tables for ESPN league data.

pub mod ids;
pub mod position;
pub mod slots;
pub mod time;

pub use ids::{LeagueId, PlayerId, TeamId};
pub use position::Position;
pub use time::{Season, Week};
