//! Type-safe wrappers for Fantasy Premier League identifiers.

pub mod ids;
pub mod time;

pub use ids::{ElementId, EntryId, FixtureId, LeagueId, TeamId};
pub use time::Gameweek;
