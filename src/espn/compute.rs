use crate::cli::types::{Season, Week};
use crate::espn::types::PlayerStats;

/// ESPN `statSourceId` for actual results.
pub const ACTUAL_SOURCE: u8 = 0;
/// ESPN `statSourceId` for projections.
pub const PROJECTED_SOURCE: u8 = 1;

/// Select the stat block for a specific season/week/source.
/// `stat_source_id`: 0 = actual, 1 = projected.
/// `stat_split_type_id`: 1 = weekly, 0 = season total.
pub fn select_weekly_stats(
    stats: &[PlayerStats],
    season: Season,
    week: Week,
    stat_source_id: u8,
) -> Option<&PlayerStats> {
    stats.iter().find(|s| {
        s.season_id == season
            && s.scoring_period_id == week
            && s.stat_source_id == stat_source_id
            && s.stat_split_type_id == 1
    })
}

/// Fantasy points ESPN already applied to a weekly stat block, if any.
pub fn applied_points(
    stats: &[PlayerStats],
    season: Season,
    week: Week,
    stat_source_id: u8,
) -> Option<f64> {
    select_weekly_stats(stats, season, week, stat_source_id).and_then(|s| s.applied_total)
}
