//! ESPN lineup slot codes.

/// Bench slot id.
pub const BENCH_SLOT: u8 = 20;
/// Injured reserve slot id.
pub const IR_SLOT: u8 = 21;

/// Display name for an ESPN `lineupSlotId`.
pub fn lineup_slot_name(slot_id: u8) -> &'static str {
    match slot_id {
        0 => "QB",
        1 => "TQB",
        2 => "RB",
        3 => "RB/WR",
        4 => "WR",
        5 => "WR/TE",
        6 => "TE",
        7 => "OP",
        8 => "DT",
        9 => "DE",
        10 => "LB",
        11 => "DL",
        12 => "CB",
        13 => "S",
        14 => "DB",
        15 => "DP",
        16 => "D/ST",
        17 => "K",
        18 => "P",
        19 => "HC",
        20 => "BE",
        21 => "IR",
        23 => "RB/WR/TE",
        24 => "ER",
        25 => "Rookie",
        _ => "UNKNOWN",
    }
}

/// Names for a player's `eligibleSlots`, in the order ESPN lists them.
pub fn slot_names(slot_ids: &[u8]) -> Vec<String> {
    slot_ids
        .iter()
        .map(|id| lineup_slot_name(*id).to_string())
        .collect()
}
