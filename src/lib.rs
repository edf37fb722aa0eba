//! Fantasy Premier League Live Scoring Library
//!
//! Recomputes classic-league standings while a gameweek is still in
//! progress, ahead of the official mid-week updates.
//!
//! ## Features
//!
//! - **Provisional Bonus**: Award 3/2/1 bonus from live BPS before it is confirmed
//! - **Explain Merging**: Tag each fixture breakdown with a match status and fold bonus in
//! - **Live Gameweek Points**: Multipliers, bench boost, triple captain and transfer hits
//! - **Played Accounting**: Weighted count of squad slots that took the field
//! - **Live Ranking**: Re-rank a standings page by computed gameweek score
//! - **Memoized Upstream Data**: Single-flight, time-bounded caching of shared datasets
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fpl_live::{fpl::build_live_standings, FplClient, LeagueId};
//!
//! # async fn example() -> fpl_live::Result<()> {
//! let client = FplClient::from_env()?;
//! let standings = build_live_standings(&client, LeagueId::new(314), 1).await?;
//!
//! for entry in &standings.entries {
//!     println!("{:>3} {:<24} {:>4}", entry.rank, entry.team_name, entry.gw_point);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league ID to avoid passing it in every command:
//! ```bash
//! export FPL_LEAGUE_ID=314
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod fpl;
pub mod scoring;

// Re-export commonly used types
pub use cli::types::{ElementId, EntryId, FixtureId, Gameweek, LeagueId, TeamId};
pub use error::{FplError, Result};
pub use fpl::{
    types::{Chip, FixtureBonus, LiveEntry, LiveStandings, MatchStatus, PlayedInfo},
    FplClient,
};

pub const LEAGUE_ID_ENV_VAR: &str = "FPL_LEAGUE_ID";
pub const BASE_URL_ENV_VAR: &str = "FPL_API_BASE_URL";
