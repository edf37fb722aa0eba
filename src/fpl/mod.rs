//! Fantasy Premier League API client, payload types and the live standings pipeline.

pub mod http;
pub mod standings;
pub mod types;

pub use http::{DatasetKey, FplClient};
pub use standings::{
    build_live_standings, gameweek_bonus, load_gameweek_context, manager_gameweek,
    GameweekContext,
};
