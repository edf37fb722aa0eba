//! Gameweek type for the FPL season calendar.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for gameweek (event) numbers.
///
/// The upstream API calls a gameweek an "event"; a season has 38 of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Gameweek(pub u16);

impl Gameweek {
    pub const FIRST: Gameweek = Gameweek(1);

    pub fn new(gw: u16) -> Self {
        Self(gw)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Gameweek {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}
