//! Stations the player has found.

use std::collections::HashSet;

use crate::domain::StationKey;

/// Discovered stations, in the order they were found.
///
/// Membership is case-insensitive; the name kept is the published one
/// passed to the first successful [`insert`](Self::insert). Only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoverySet {
    names: Vec<String>,
    keys: HashSet<StationKey>,
}

impl DiscoverySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a discovery. Returns `false` if the station was already known
    /// or `name` is blank.
    pub fn insert(&mut self, name: &str) -> bool {
        let Some(key) = StationKey::parse(name) else {
            return false;
        };
        if !self.keys.insert(key) {
            return false;
        }
        self.names.push(name.trim().to_string());
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        StationKey::parse(name).is_some_and(|key| self.keys.contains(&key))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Published names in discovery order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl<'a> FromIterator<&'a str> for DiscoverySet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}
