//! Runtime configuration for talking to the FPL API

use std::time::Duration;

use crate::BASE_URL_ENV_VAR;

/// Public base path of the Fantasy Premier League API.
pub const DEFAULT_BASE_URL: &str = "https://fantasy.premierleague.com/api";

#[derive(Debug, Clone)]
pub struct FplConfig {
    /// API root without a trailing slash
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Freshness window for the bootstrap snapshot (players, teams, events)
    pub bootstrap_ttl: Duration,
    /// Freshness window for fixtures and live stats during matches
    pub live_ttl: Duration,
    /// Upper bound on concurrent per-manager requests
    pub max_in_flight: usize,
}

impl Default for FplConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("fpl-live/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(20),
            bootstrap_ttl: Duration::from_secs(60 * 60),
            live_ttl: Duration::from_secs(60),
            max_in_flight: 10,
        }
    }
}

impl FplConfig {
    /// Defaults, with the base URL taken from `FPL_API_BASE_URL` when set.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(BASE_URL_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(url),
            _ => config,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_max_in_flight(mut self, max_in_flight: usize) -> Self {
        self.max_in_flight = max_in_flight.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FplConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_agent.starts_with("fpl-live/"));
        assert!(config.bootstrap_ttl > config.live_ttl);
        assert!(config.max_in_flight >= 1);
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = FplConfig::default().with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_max_in_flight_is_at_least_one() {
        let config = FplConfig::default().with_max_in_flight(0);
        assert_eq!(config.max_in_flight, 1);
    }

    #[test]
    fn test_from_env_base_url() {
        std::env::set_var(BASE_URL_ENV_VAR, "http://localhost:9999/api/");
        let config = FplConfig::from_env();
        assert_eq!(config.base_url, "http://localhost:9999/api");

        std::env::remove_var(BASE_URL_ENV_VAR);
        let config = FplConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
