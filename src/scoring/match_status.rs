use std::collections::HashMap;

use crate::{
    cli::types::FixtureId,
    fpl::types::{ExplainEntry, Fixture, MatchStatus, MINUTES_IDENTIFIER},
};

/// Full-time length of a match in minutes.
pub const FULL_TIME_MINUTES: u32 = 90;

/// Classify a player's participation in one fixture.
///
/// Rules are checked in order: not kicked off, in progress, finished.
/// A fixture still running past 90 minutes without a provisional result
/// falls through to `Unknown`.
pub fn classify(player_minutes: u32, fixture: &Fixture) -> MatchStatus {
    let took_field = player_minutes > 0;
    match (fixture.finished_provisional, fixture.minutes) {
        (false, 0) => MatchStatus::NotStarted,
        (false, m) if m < FULL_TIME_MINUTES => {
            if took_field {
                MatchStatus::Playing
            } else {
                MatchStatus::Substitute
            }
        }
        (true, _) => {
            if took_field {
                MatchStatus::Played
            } else {
                MatchStatus::Substitute
            }
        }
        _ => MatchStatus::Unknown,
    }
}

/// Minutes a player logged in the fixture an explain entry describes.
pub fn explain_minutes(entry: &ExplainEntry) -> u32 {
    entry
        .stat(MINUTES_IDENTIFIER)
        .map(|s| s.value.max(0) as u32)
        .unwrap_or(0)
}

/// Classify an explain entry against the gameweek's fixture index.
pub fn classify_entry(entry: &ExplainEntry, fixtures: &HashMap<FixtureId, Fixture>) -> MatchStatus {
    fixtures
        .get(&entry.fixture)
        .map(|fixture| classify(explain_minutes(entry), fixture))
        .unwrap_or(MatchStatus::Unknown)
}
