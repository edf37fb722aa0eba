//! Live league standings: fetch, score and rank one standings page.
//!
//! Data flow per request:
//! 1. bootstrap (memoized), then fixtures and live stats for the current
//!    gameweek; any of these failing degrades to an empty dataset
//! 2. one standings page; failure aborts the request
//! 3. picks and transfers for every manager on the page, fetched
//!    concurrently; any failure aborts the request
//! 4. every manager scored against one id-indexed [`GameweekContext`]
//! 5. ranking by computed gameweek score

use std::collections::HashMap;

use futures::{stream, StreamExt, TryStreamExt};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::{
    cli::types::{ElementId, EntryId, FixtureId, Gameweek, LeagueId, TeamId},
    fpl::{
        http::FplClient,
        types::{
            Bootstrap, BonusAward, Element, EntryHistorySummary, Fixture, FixtureBonus,
            LiveElement, LiveEntry, LiveEvent, LiveStandings, PicksData, Pick, ScoredPick,
            StandingRow, Team, Transfer, TransferNames, BPS_IDENTIFIER,
        },
    },
    scoring::{
        bonus_by_fixture, count_played, gameweek_points, merge_explain, player_bonus,
        player_points, rank_by_gameweek_points, BonusMap,
    },
    Result,
};


/// Everything needed to score managers for one gameweek, indexed by id.
///
/// Built once per request so each manager's 15 picks are plain lookups.
#[derive(Debug, Default)]
pub struct GameweekContext {
    pub gameweek: Gameweek,
    elements: HashMap<ElementId, Element>,
    teams: HashMap<TeamId, Team>,
    fixtures: HashMap<FixtureId, Fixture>,
    live: HashMap<ElementId, LiveElement>,
    bonus: HashMap<FixtureId, BonusMap>,
}

impl GameweekContext {
    pub fn new(
        gameweek: Gameweek,
        bootstrap: &Bootstrap,
        fixtures: &[Fixture],
        live: &LiveEvent,
    ) -> Self {
        Self {
            gameweek,
            elements: bootstrap
                .elements
                .iter()
                .map(|e| (e.id, e.clone()))
                .collect(),
            teams: bootstrap.teams.iter().map(|t| (t.id, t.clone())).collect(),
            bonus: bonus_by_fixture(fixtures),
            fixtures: fixtures.iter().map(|f| (f.id, f.clone())).collect(),
            live: live.elements.iter().map(|l| (l.id, l.clone())).collect(),
        }
    }

    pub fn element_name(&self, element: ElementId) -> Option<&str> {
        self.elements.get(&element).map(|e| e.web_name.as_str())
    }

    pub fn team_short_name(&self, team: TeamId) -> Option<&str> {
        self.teams.get(&team).map(|t| t.short_name.as_str())
    }

    pub fn bonus_for(&self, fixture: FixtureId) -> Option<&BonusMap> {
        self.bonus.get(&fixture)
    }

    /// Join a pick with its player and merged, scored explain breakdown.
    pub fn score_pick(&self, pick: &Pick) -> ScoredPick {
        let element = self.elements.get(&pick.element);
        let live = self.live.get(&pick.element);

        let explain = live
            .map(|l| merge_explain(&l.explain, pick.element, &self.bonus, &self.fixtures))
            .unwrap_or_default();

        ScoredPick {
            element: pick.element,
            name: element.map(|e| e.web_name.clone()),
            team: element
                .and_then(|e| self.team_short_name(e.team))
                .map(str::to_owned),
            element_type: element.map(|e| e.element_type),
            position: pick.position,
            multiplier: pick.multiplier,
            is_captain: pick.is_captain,
            is_vice_captain: pick.is_vice_captain,
            minutes: live.map_or(0, |l| l.stats.minutes),
            points: player_points(&explain),
            bonus: player_bonus(&explain),
            explain,
        }
    }

    /// Score one manager's gameweek.
    pub fn enrich_entry(
        &self,
        row: &StandingRow,
        picks: &PicksData,
        transfers: &[Transfer],
    ) -> LiveEntry {
        let chip = picks.active_chip;
        let history = &picks.entry_history;

        let scored: Vec<ScoredPick> = picks.picks.iter().map(|p| self.score_pick(p)).collect();
        let gw_point = gameweek_points(&scored, history.event_transfers_cost, chip);
        let played_info = count_played(&picks.picks, &self.live, chip);

        let transfers = transfers
            .iter()
            .filter(|t| t.event == self.gameweek)
            .map(|t| TransferNames {
                element_in_name: self.element_name(t.element_in).map(str::to_owned),
                element_out_name: self.element_name(t.element_out).map(str::to_owned),
            })
            .collect();

        LiveEntry {
            rank: row.rank,
            manager: row.player_name.clone(),
            team_name: row.entry_name.clone(),
            total_point: row.total,
            entry: row.entry,
            gw_point,
            team: scored
                .iter()
                .map(|p| p.name.clone().unwrap_or_else(|| p.element.to_string()))
                .collect(),
            played_info,
            transfers,
            active_chip: chip,
            entry_history: EntryHistorySummary {
                transfer_cost: history.event_transfers_cost,
                bank: history.bank,
                value: history.value,
            },
            picks: scored,
        }
    }

    /// Provisional bonus for every fixture, ordered by fixture id.
    pub fn fixture_bonus(&self) -> Vec<FixtureBonus> {
        let mut fixtures: Vec<&Fixture> = self.fixtures.values().collect();
        fixtures.sort_by_key(|f| f.id);

        fixtures
            .into_iter()
            .map(|fixture| {
                let bps: HashMap<ElementId, i32> = fixture
                    .stat(BPS_IDENTIFIER)
                    .map(|s| s.h.iter().chain(s.a.iter()).map(|v| (v.element, v.value)).collect())
                    .unwrap_or_default();

                let mut awards: Vec<BonusAward> = self
                    .bonus_for(fixture.id)
                    .map(|awards| {
                        awards
                            .iter()
                            .map(|(&element, &bonus)| BonusAward {
                                element,
                                name: self.element_name(element).map(str::to_owned),
                                bps: bps.get(&element).copied().unwrap_or(0),
                                bonus,
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                awards.sort_by(|a, b| b.bonus.cmp(&a.bonus).then(b.bps.cmp(&a.bps)).then(a.element.cmp(&b.element)));

                FixtureBonus {
                    fixture: fixture.id,
                    home: self.team_short_name(fixture.team_h).map(str::to_owned),
                    away: self.team_short_name(fixture.team_a).map(str::to_owned),
                    minutes: fixture.minutes,
                    finished_provisional: fixture.finished_provisional,
                    awards,
                }
            })
            .collect()
    }
}

/// One manager's fetched, not yet scored, gameweek.
#[derive(Debug, Clone)]
pub struct ManagerData {
    pub row: StandingRow,
    pub picks: PicksData,
    pub transfers: Vec<Transfer>,
}

async fn load_bootstrap(client: &FplClient) -> std::sync::Arc<Bootstrap> {
    match client.bootstrap().await {
        Ok(bootstrap) => bootstrap,
        Err(e) => {
            warn!(error = %e, "bootstrap unavailable, falling back to gameweek 1");
            Default::default()
        }
    }
}

async fn load_fixtures(client: &FplClient, gameweek: Gameweek) -> std::sync::Arc<Vec<Fixture>> {
    match client.fixtures(gameweek).await {
        Ok(fixtures) => fixtures,
        Err(e) => {
            warn!(error = %e, %gameweek, "fixtures unavailable, scoring without bonus");
            Default::default()
        }
    }
}

async fn load_live(client: &FplClient, gameweek: Gameweek) -> std::sync::Arc<LiveEvent> {
    match client.live(gameweek).await {
        Ok(live) => live,
        Err(e) => {
            warn!(error = %e, %gameweek, "live stats unavailable, scoring as zero");
            Default::default()
        }
    }
}

/// Bootstrap, fixtures and live stats for a gameweek (current if `None`).
pub async fn load_gameweek_context(
    client: &FplClient,
    gameweek: Option<Gameweek>,
) -> GameweekContext {
    let bootstrap = load_bootstrap(client).await;
    let gameweek = gameweek.unwrap_or_else(|| bootstrap.current_gameweek());

    let (fixtures, live) = tokio::join!(load_fixtures(client, gameweek), load_live(client, gameweek));
    info!(
        %gameweek,
        fixtures = fixtures.len(),
        players = live.elements.len(),
        "gameweek data loaded"
    );

    GameweekContext::new(gameweek, &bootstrap, &fixtures, &live)
}

async fn fetch_manager(
    client: &FplClient,
    row: &StandingRow,
    gameweek: Gameweek,
) -> Result<ManagerData> {
    let (picks, transfers) =
        tokio::try_join!(client.picks(row.entry, gameweek), client.transfers(row.entry))?;
    Ok(ManagerData {
        row: row.clone(),
        picks,
        transfers,
    })
}

/// Fetch every manager's picks and transfers, at most `max_in_flight` at a time.
pub async fn fetch_managers(
    client: &FplClient,
    rows: &[StandingRow],
    gameweek: Gameweek,
) -> Result<Vec<ManagerData>> {
    stream::iter(rows)
        .map(|row| fetch_manager(client, row, gameweek))
        .buffered(client.config().max_in_flight.max(1))
        .try_collect()
        .await
}

/// Score every manager in parallel and rank by gameweek points.
pub fn score_managers(context: &GameweekContext, managers: &[ManagerData]) -> Vec<LiveEntry> {
    let entries: Vec<LiveEntry> = managers
        .par_iter()
        .map(|m| context.enrich_entry(&m.row, &m.picks, &m.transfers))
        .collect();
    rank_by_gameweek_points(entries)
}

/// Live-scored standings for one page of a classic league.
pub async fn build_live_standings(
    client: &FplClient,
    league_id: LeagueId,
    page: u32,
) -> Result<LiveStandings> {
    let context = load_gameweek_context(client, None).await;

    let standings = client.standings(league_id, page).await?;
    info!(
        league = %standings.league.name,
        managers = standings.standings.results.len(),
        page,
        "standings loaded"
    );

    let managers = fetch_managers(client, &standings.standings.results, context.gameweek).await?;
    let entries = score_managers(&context, &managers);

    Ok(LiveStandings {
        entries,
        league_name: standings.league.name,
        current_gw: context.gameweek,
    })
}

/// One manager's live gameweek, outside any league.
pub async fn manager_gameweek(
    client: &FplClient,
    entry: EntryId,
    gameweek: Option<Gameweek>,
) -> Result<LiveEntry> {
    let context = load_gameweek_context(client, gameweek).await;

    let summary = client.entry(entry).await?;
    let manager = fetch_manager(client, &summary.to_standing_row(), context.gameweek).await?;

    Ok(context.enrich_entry(&manager.row, &manager.picks, &manager.transfers))
}

/// Provisional bonus per fixture for a gameweek (current if `None`).
///
/// Fixtures are the point of this view, so their failure is an error here.
pub async fn gameweek_bonus(
    client: &FplClient,
    gameweek: Option<Gameweek>,
) -> Result<(Gameweek, Vec<FixtureBonus>)> {
    let bootstrap = load_bootstrap(client).await;
    let gameweek = gameweek.unwrap_or_else(|| bootstrap.current_gameweek());

    let fixtures = client.fixtures(gameweek).await?;
    let context = GameweekContext::new(gameweek, &bootstrap, &fixtures, &LiveEvent::default());

    Ok((gameweek, context.fixture_bonus()))
}
