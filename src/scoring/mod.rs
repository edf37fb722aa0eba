//! Gameweek scoring engine.
//!
//! Pure, synchronous stages over data already fetched from the FPL API:
//! - `bonus`: provisional bonus per fixture from BPS
//! - `match_status`: per-fixture participation state
//! - `explain`: bonus and status merged into each explain breakdown
//! - `points`: player totals and the manager's gameweek score
//! - `played`: weighted played/substitution count
//! - `rank`: league table by gameweek score

pub mod bonus;
pub mod explain;
pub mod match_status;
pub mod played;
pub mod points;
pub mod rank;

pub use bonus::{allocate_bonus, bonus_by_fixture, BonusMap};
pub use explain::merge_explain;
pub use match_status::classify;
pub use played::count_played;
pub use points::{gameweek_points, player_bonus, player_points};
pub use rank::rank_by_gameweek_points;
