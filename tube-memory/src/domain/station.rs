//! Station names and records.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Canonical, case-insensitive form of a station name.
///
/// Matching is done on this key: surrounding whitespace is trimmed and the
/// name is lower-cased. Two names that differ only in case produce the
/// same key.
///
/// # Examples
///
/// ```
/// use tube_memory::domain::StationKey;
///
/// let typed = StationKey::new("  OXFORD CIRCUS ");
/// assert_eq!(typed.as_str(), "oxford circus");
/// assert_eq!(typed, StationKey::new("Oxford Circus"));
///
/// // Whitespace-only input has no key
/// assert!(StationKey::parse("   ").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationKey(String);

impl StationKey {
    /// Normalize a name into its key. May be empty.
    pub fn new(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    /// Normalize user input, returning `None` when nothing is left after trimming.
    pub fn parse(input: &str) -> Option<Self> {
        let key = Self::new(input);
        if key.0.is_empty() { None } else { Some(key) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `name` normalizes to this key.
    pub fn matches(&self, name: &str) -> bool {
        StationKey::new(name) == *self
    }
}

impl Borrow<str> for StationKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationKey({})", self.0)
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single station on a line, as it appears in the geodata.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRecord {
    /// Name as published, in its original case.
    pub name: String,
    pub coordinates: Coordinates,
}

impl StationRecord {
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }

    pub fn key(&self) -> StationKey {
        StationKey::new(&self.name)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Keys are insensitive to casing of the input.
        #[test]
        fn case_insensitive(s in "[A-Za-z' .&-]{1,30}") {
            prop_assert_eq!(StationKey::new(&s.to_uppercase()), StationKey::new(&s.to_lowercase()));
        }

        /// Normalizing twice changes nothing.
        #[test]
        fn idempotent(s in "[A-Za-z '.]{0,30}") {
            let once = StationKey::new(&s);
            let twice = StationKey::new(once.as_str());
            prop_assert_eq!(once, twice);
        }

        /// A key always matches the name it was built from.
        #[test]
        fn matches_own_name(s in "[A-Za-z' .&-]{1,30}") {
            prop_assert!(StationKey::new(&s).matches(&s));
        }
    }
}
