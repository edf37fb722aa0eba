//! Live league standings command implementation

use std::time::Duration;

use tracing::info;

use crate::{
    fpl::{build_live_standings, FplClient},
    LeagueId, LiveEntry, LiveStandings, Result,
};

use super::{resolve_league_id, signed};

/// Render one manager as a table row.
pub fn format_entry(entry: &LiveEntry) -> String {
    format!(
        "{:>4}  {:<24} {:<20} {:>4} {:>5}  {:>2}/{:<2}",
        entry.rank,
        truncate(&entry.team_name, 24),
        truncate(&entry.manager, 20),
        entry.gw_point,
        entry.total_point,
        entry.played_info.played,
        entry.played_info.total,
    )
}

/// Chip and transfer detail shown under a row with `--verbose`.
pub fn format_entry_detail(entry: &LiveEntry) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(chip) = entry.active_chip {
        parts.push(format!("chip: {}", chip.label()));
    }
    if !entry.transfers.is_empty() {
        let transfers: Vec<String> = entry
            .transfers
            .iter()
            .map(|t| {
                format!(
                    "{} -> {}",
                    t.element_out_name.as_deref().unwrap_or("?"),
                    t.element_in_name.as_deref().unwrap_or("?"),
                )
            })
            .collect();
        parts.push(format!(
            "transfers ({}): {}",
            signed(-entry.entry_history.transfer_cost),
            transfers.join(", ")
        ));
    }

    if parts.is_empty() {
        None
    } else {
        Some(format!("      {}", parts.join(" | ")))
    }
}

/// Full standings table, header included.
pub fn format_standings(standings: &LiveStandings, verbose: bool) -> String {
    let mut lines = vec![
        format!("{} - Gameweek {} (live)", standings.league_name, standings.current_gw),
        format!(
            "{:>4}  {:<24} {:<20} {:>4} {:>5}  {:>5}",
            "Rank", "Team", "Manager", "GW", "Total", "Played"
        ),
    ];
    for entry in &standings.entries {
        lines.push(format_entry(entry));
        if verbose {
            if let Some(detail) = format_entry_detail(entry) {
                lines.push(detail);
            }
        }
    }
    lines.join("\n")
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

fn print_standings(standings: &LiveStandings, as_json: bool, verbose: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(standings)?); // tarpaulin::skip
    } else {
        println!("{}", format_standings(standings, verbose)); // tarpaulin::skip
    }
    Ok(())
}

/// Handle the league command
pub async fn handle_league_live(
    league_id: Option<LeagueId>,
    page: u32,
    as_json: bool,
    verbose: bool,
    watch: Option<u64>,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let client = FplClient::from_env()?;

    // tarpaulin::skip - HTTP call, tested via integration tests
    let standings = build_live_standings(&client, league_id, page).await?;
    print_standings(&standings, as_json, verbose)?;

    let Some(seconds) = watch else {
        return Ok(());
    };

    let mut gameweek = standings.current_gw;
    let mut interval = tokio::time::interval(Duration::from_secs(seconds.max(1)));
    interval.tick().await;
    loop {
        interval.tick().await;
        client.invalidate_gameweek(gameweek);
        info!(%league_id, %gameweek, "refreshing live standings");

        let standings = build_live_standings(&client, league_id, page).await?;
        gameweek = standings.current_gw;
        println!(); // tarpaulin::skip
        print_standings(&standings, as_json, verbose)?;
    }
}
