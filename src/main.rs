//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fpl_live::{
    cli::{Commands, FPL},
    commands::{bonus::handle_bonus, league_live::handle_league_live, picks::handle_picks},
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fpl_live={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = FPL::parse();

    let verbose = matches!(app.command, Commands::League { verbose: true, .. });
    init_tracing(verbose);

    match app.command {
        Commands::League {
            league_id,
            page,
            json,
            verbose,
            watch,
        } => handle_league_live(league_id, page, json, verbose, watch).await?,

        Commands::Bonus { event, json } => handle_bonus(event, json).await?,

        Commands::Picks { entry, event, json } => handle_picks(entry, event, json).await?,
    }

    Ok(())
}
