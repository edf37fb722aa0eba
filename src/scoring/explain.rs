//! Fold provisional bonus and match status into a player's explain breakdown.

use std::collections::HashMap;

use super::{bonus::BonusMap, match_status::classify_entry};
use crate::{
    cli::types::{ElementId, FixtureId},
    fpl::types::{ExplainEntry, ExplainStat, Fixture, BONUS_IDENTIFIER},
};

/// Merge bonus and match status into every explain entry of one player.
///
/// A `bonus` stat is appended only when the player earned bonus in that
/// fixture and the upstream breakdown does not already carry one, so
/// merging an already-merged explain is a no-op.
pub fn merge_explain(
    explain: &[ExplainEntry],
    element: ElementId,
    bonus: &HashMap<FixtureId, BonusMap>,
    fixtures: &HashMap<FixtureId, Fixture>,
) -> Vec<ExplainEntry> {
    explain
        .iter()
        .map(|entry| merge_entry(entry, element, bonus, fixtures))
        .collect()
}

fn merge_entry(
    entry: &ExplainEntry,
    element: ElementId,
    bonus: &HashMap<FixtureId, BonusMap>,
    fixtures: &HashMap<FixtureId, Fixture>,
) -> ExplainEntry {
    let mut merged = entry.clone();
    merged.match_status = Some(classify_entry(entry, fixtures));

    let awarded = bonus
        .get(&entry.fixture)
        .and_then(|awards| awards.get(&element))
        .copied()
        .unwrap_or(0);

    if awarded > 0 && merged.stat(BONUS_IDENTIFIER).is_none() {
        merged.stats.push(ExplainStat {
            identifier: BONUS_IDENTIFIER.to_string(),
            points: i32::from(awarded),
            value: i32::from(awarded),
            points_modification: 0,
        });
    }

    merged
}
