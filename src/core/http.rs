//! HTTP utilities for FPL API communication

use crate::{core::config::FplConfig, Result};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT},
    Client,
};

/// Default headers sent with every request.
///
/// The FPL API rejects some requests without a browser-like user agent.
pub fn default_header_map(user_agent: &str) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(USER_AGENT, HeaderValue::from_str(user_agent)?);
    Ok(h)
}

/// Build the shared reqwest client for a configuration.
pub fn build_client(config: &FplConfig) -> Result<Client> {
    let client = Client::builder()
        .default_headers(default_header_map(&config.user_agent)?)
        .timeout(config.timeout)
        .build()?;
    Ok(client)
}
