//! The "found / total" counter.

use std::fmt;

/// Stations on the network the game counts towards.
pub const TOTAL_STATIONS: usize = 269;

/// Displayed as `{discovered}/{total}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub discovered: usize,
    pub total: usize,
}

impl Score {
    pub fn new(discovered: usize, total: usize) -> Self {
        Self { discovered, total }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.discovered, self.total)
    }
}
