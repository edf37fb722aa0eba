//! Played/substitution accounting for a manager's squad.
//!
//! The count is weighted like the score: the captain's slot is worth two
//! (three on triple captain), and the vice-captain inherits that weight when
//! the captain does not play. `total` is the matching denominator.

use std::collections::HashMap;

use crate::{
    cli::types::ElementId,
    fpl::types::{Chip, LiveElement, Pick, PlayedInfo},
};

const STARTING_SLOTS: u32 = 11;
const SQUAD_SLOTS: u32 = 15;

/// Count how many weighted slots have a player who took the field.
pub fn count_played(
    picks: &[Pick],
    live: &HashMap<ElementId, LiveElement>,
    chip: Option<Chip>,
) -> PlayedInfo {
    let bench_boost = chip == Some(Chip::BenchBoost);
    let triple_captain = chip == Some(Chip::TripleCaptain);
    let captain_extra = if triple_captain { 2 } else { 1 };

    let minutes = |element: ElementId| live.get(&element).map_or(0, |l| l.stats.minutes);

    let mut played = 0;
    for pick in picks.iter().filter(|p| bench_boost || p.is_starter()) {
        if minutes(pick.element) > 0 {
            played += 1;
            if pick.is_captain {
                played += captain_extra;
            }
        }
    }

    // vice-captain takes over the captain's multiplier slot
    let captain = picks.iter().find(|p| p.is_captain);
    let vice_captain = picks.iter().find(|p| p.is_vice_captain);
    if let (Some(captain), Some(vice)) = (captain, vice_captain) {
        if minutes(captain.element) == 0 && minutes(vice.element) > 0 {
            played += captain_extra + 1;
        }
    }

    PlayedInfo {
        played,
        total: slot_total(chip),
    }
}

/// Weighted slot count for the active chip.
pub fn slot_total(chip: Option<Chip>) -> u32 {
    match chip {
        Some(Chip::BenchBoost) => SQUAD_SLOTS + 1,
        Some(Chip::TripleCaptain) => STARTING_SLOTS + 2,
        _ => STARTING_SLOTS + 1,
    }
}
