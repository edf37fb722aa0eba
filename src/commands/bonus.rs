//! Provisional bonus command implementation

use crate::{
    fpl::{gameweek_bonus, FplClient},
    FixtureBonus, Gameweek, Result,
};

/// Render one fixture and its bonus awards.
pub fn format_fixture(fixture: &FixtureBonus) -> String {
    let home = fixture.home.as_deref().unwrap_or("?");
    let away = fixture.away.as_deref().unwrap_or("?");
    let state = if fixture.finished_provisional {
        "FT".to_string()
    } else if fixture.minutes == 0 {
        "-".to_string()
    } else {
        format!("{}'", fixture.minutes)
    };

    let mut lines = vec![format!("{} v {} ({})", home, away, state)];
    for award in &fixture.awards {
        lines.push(format!(
            "  {} {:<20} bps {}",
            award.bonus,
            award
                .name
                .clone()
                .unwrap_or_else(|| award.element.to_string()),
            award.bps,
        ));
    }
    lines.join("\n")
}

/// Handle the bonus command
pub async fn handle_bonus(event: Option<Gameweek>, as_json: bool) -> Result<()> {
    let client = FplClient::from_env()?;

    // tarpaulin::skip - HTTP call, tested via integration tests
    let (gameweek, fixtures) = gameweek_bonus(&client, event).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&fixtures)?); // tarpaulin::skip
        return Ok(());
    }

    println!("Provisional bonus - Gameweek {}", gameweek); // tarpaulin::skip
    for fixture in fixtures.iter().filter(|f| !f.awards.is_empty()) {
        println!("{}", format_fixture(fixture)); // tarpaulin::skip
    }
    Ok(())
}
