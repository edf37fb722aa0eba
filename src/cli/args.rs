//! CLI argument definitions and parsing structures.

use super::types::{
    ids::{EntryId, LeagueId},
    time::Gameweek,
};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Live-scored standings for one page of a classic league.
    ///
    /// Recomputes every manager's gameweek points from live stats and
    /// provisional bonus, then re-ranks the page by those points.
    League {
        /// League ID (or set `FPL_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Standings page (50 managers per page).
        #[clap(long, default_value_t = 1)]
        page: u32,

        /// Output results as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Log pipeline progress and show chips and transfers per manager.
        #[clap(long, short)]
        verbose: bool,

        /// Re-score every N seconds until interrupted.
        #[clap(long, value_name = "SECONDS")]
        watch: Option<u64>,
    },

    /// Provisional bonus points per fixture.
    Bonus {
        /// Gameweek (defaults to the current one).
        #[clap(long, short)]
        event: Option<Gameweek>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// One manager's live gameweek, pick by pick.
    Picks {
        /// Manager (entry) ID.
        #[clap(long)]
        entry: EntryId,

        /// Gameweek (defaults to the current one).
        #[clap(long, short)]
        event: Option<Gameweek>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "fpl-live",
    about = "Live Fantasy Premier League scoring",
    version
)]
pub struct FPL {
    #[clap(subcommand)]
    pub command: Commands,
}
