//! Typed client for the read-only FPL endpoints the scoring pipeline uses.

use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::{EntryId, Gameweek, LeagueId},
    core::{build_client, FplConfig, MemoCache},
    error::FplError,
    fpl::types::{Bootstrap, EntrySummary, Fixture, LiveEvent, PicksData, StandingsPage, Transfer},
    Result,
};

#[cfg(test)]
mod integration_tests;

/// Datasets that are memoized between requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKey {
    Bootstrap,
    Fixtures(Gameweek),
    Live(Gameweek),
}

pub struct FplClient {
    client: Client,
    config: FplConfig,
    bootstrap: MemoCache<DatasetKey, Arc<Bootstrap>>,
    fixtures: MemoCache<DatasetKey, Arc<Vec<Fixture>>>,
    live: MemoCache<DatasetKey, Arc<LiveEvent>>,
}

impl FplClient {
    pub fn new(config: FplConfig) -> Result<Self> {
        let client = build_client(&config)?;
        Ok(Self {
            client,
            bootstrap: MemoCache::new(1, config.bootstrap_ttl),
            fixtures: MemoCache::new(8, config.live_ttl),
            live: MemoCache::new(8, config.live_ttl),
            config,
        })
    }

    /// Client configured from the environment (`FPL_API_BASE_URL`).
    pub fn from_env() -> Result<Self> {
        Self::new(FplConfig::from_env())
    }

    pub fn config(&self) -> &FplConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(%url, ?query, "GET");

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FplError::Upstream {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Players, teams and events. Memoized for `bootstrap_ttl`.
    pub async fn bootstrap(&self) -> Result<Arc<Bootstrap>> {
        self.bootstrap
            .get_or_fetch(DatasetKey::Bootstrap, || async {
                self.get_json::<Bootstrap>("/bootstrap-static/", &[])
                    .await
                    .map(Arc::new)
            })
            .await
    }

    /// Fixtures of one gameweek, with live stats once they kick off.
    pub async fn fixtures(&self, gameweek: Gameweek) -> Result<Arc<Vec<Fixture>>> {
        self.fixtures
            .get_or_fetch(DatasetKey::Fixtures(gameweek), || async {
                self.get_json::<Vec<Fixture>>("/fixtures/", &[("event", gameweek.to_string())])
                    .await
                    .map(Arc::new)
            })
            .await
    }

    /// Live per-player stats and explain breakdowns for one gameweek.
    pub async fn live(&self, gameweek: Gameweek) -> Result<Arc<LiveEvent>> {
        self.live
            .get_or_fetch(DatasetKey::Live(gameweek), || async {
                self.get_json::<LiveEvent>(&format!("/event/{}/live/", gameweek), &[])
                    .await
                    .map(Arc::new)
            })
            .await
    }

    /// Drop memoized fixtures and live data for a gameweek.
    pub fn invalidate_gameweek(&self, gameweek: Gameweek) {
        self.fixtures.invalidate(&DatasetKey::Fixtures(gameweek));
        self.live.invalidate(&DatasetKey::Live(gameweek));
    }

    pub async fn standings(&self, league_id: LeagueId, page: u32) -> Result<StandingsPage> {
        self.get_json(
            &format!("/leagues-classic/{}/standings/", league_id),
            &[("page_standings", page.max(1).to_string())],
        )
        .await
    }

    pub async fn picks(&self, entry: EntryId, gameweek: Gameweek) -> Result<PicksData> {
        self.get_json(&format!("/entry/{}/event/{}/picks/", entry, gameweek), &[])
            .await
            .map_err(|e| not_found_as_entry(e, entry))
    }

    pub async fn transfers(&self, entry: EntryId) -> Result<Vec<Transfer>> {
        self.get_json(&format!("/entry/{}/transfers/", entry), &[])
            .await
            .map_err(|e| not_found_as_entry(e, entry))
    }

    pub async fn entry(&self, entry: EntryId) -> Result<EntrySummary> {
        self.get_json(&format!("/entry/{}/", entry), &[])
            .await
            .map_err(|e| not_found_as_entry(e, entry))
    }
}

fn not_found_as_entry(err: FplError, entry: EntryId) -> FplError {
    match err {
        FplError::Upstream { status: 404, .. } => FplError::EntryNotFound {
            entry: entry.as_u64(),
        },
        other => other,
    }
}
