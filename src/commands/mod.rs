//! Command implementations for the FPL live scoring CLI

pub mod bonus;
pub mod league_live;
pub mod picks;

use crate::{FplError, LeagueId, Result, LEAGUE_ID_ENV_VAR};


/// League id from the flag, falling back to `FPL_LEAGUE_ID`.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    league_id
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .and_then(|s| s.parse::<LeagueId>().ok())
        })
        .ok_or_else(|| FplError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}

/// Signed display of a points figure, e.g. `-4` or `+0`.
pub(crate) fn signed(points: i32) -> String {
    if points < 0 {
        points.to_string()
    } else {
        format!("+{}", points)
    }
}
