//! Single manager live gameweek command implementation

use crate::{
    fpl::{manager_gameweek, types::ScoredPick, FplClient},
    EntryId, Gameweek, LiveEntry, Result,
};

use super::signed;

/// Render one pick: position, name, team, minutes and points.
pub fn format_pick(pick: &ScoredPick) -> String {
    let role = if pick.is_captain {
        " (C)"
    } else if pick.is_vice_captain {
        " (V)"
    } else {
        ""
    };
    let name = pick
        .name
        .clone()
        .unwrap_or_else(|| pick.element.to_string());

    format!(
        "{:>2} {:<22} {:<4} {:>3}' {:>3} x{}",
        pick.position,
        format!("{}{}", name, role),
        pick.team.as_deref().unwrap_or("-"),
        pick.minutes,
        pick.points,
        pick.multiplier,
    )
}

pub fn format_manager(entry: &LiveEntry) -> String {
    let mut lines = vec![format!(
        "{} ({}) - {} pts, played {}/{}",
        entry.team_name,
        entry.manager,
        entry.gw_point,
        entry.played_info.played,
        entry.played_info.total,
    )];
    if let Some(chip) = entry.active_chip {
        lines.push(format!("Chip: {}", chip.label()));
    }
    if entry.entry_history.transfer_cost != 0 {
        lines.push(format!(
            "Transfer cost: {}",
            signed(-entry.entry_history.transfer_cost)
        ));
    }

    let (starters, bench): (Vec<&ScoredPick>, Vec<&ScoredPick>) =
        entry.picks.iter().partition(|p| p.is_starter());
    lines.extend(starters.into_iter().map(format_pick));
    if !bench.is_empty() {
        lines.push("Bench:".to_string());
        lines.extend(bench.into_iter().map(format_pick));
    }
    lines.join("\n")
}

/// Handle the picks command
pub async fn handle_picks(entry: EntryId, event: Option<Gameweek>, as_json: bool) -> Result<()> {
    let client = FplClient::from_env()?;

    // tarpaulin::skip - HTTP call, tested via integration tests
    let live = manager_gameweek(&client, entry, event).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&live)?); // tarpaulin::skip
    } else {
        println!("{}", format_manager(&live)); // tarpaulin::skip
    }
    Ok(())
}
