//! Core utilities for the FPL live standings CLI
//!
//! - `cache`: memoizing single-flight cache with freshness windows
//! - `config`: API base URL, timeouts and cache windows
//! - `http`: shared reqwest client construction

pub mod cache;
pub mod config;
pub mod http;

// Re-export commonly used items for convenience
pub use cache::MemoCache;
pub use config::{FplConfig, DEFAULT_BASE_URL};
pub use http::{build_client, default_header_map};
