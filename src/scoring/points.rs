use crate::fpl::types::{Chip, ExplainEntry, ScoredPick, BONUS_IDENTIFIER};

/// Total points across every fixture of a player's explain breakdown.
pub fn player_points(explain: &[ExplainEntry]) -> i32 {
    explain
        .iter()
        .flat_map(|entry| entry.stats.iter())
        .map(|s| s.points)
        .sum()
}

/// Bonus points only, for display.
pub fn player_bonus(explain: &[ExplainEntry]) -> i32 {
    explain
        .iter()
        .flat_map(|entry| entry.stats.iter())
        .filter(|s| s.identifier == BONUS_IDENTIFIER)
        .map(|s| s.points)
        .sum()
}

/// A manager's gameweek score.
///
/// Starters only, or the whole squad under bench boost; each pick counts
/// its explain total times its multiplier. The transfer cost is taken off
/// once and the result is not clamped at zero.
pub fn gameweek_points(picks: &[ScoredPick], transfer_cost: i32, chip: Option<Chip>) -> i32 {
    let bench_boost = chip == Some(Chip::BenchBoost);

    let squad: i32 = picks
        .iter()
        .filter(|p| bench_boost || p.is_starter())
        .map(|p| player_points(&p.explain) * i32::from(p.multiplier))
        .sum();

    squad - transfer_cost
}
