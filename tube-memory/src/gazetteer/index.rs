//! Case-insensitive index of station names.

use std::collections::HashSet;

use crate::domain::StationKey;

use super::Gazetteer;

/// Set of every station name in a gazetteer, normalized.
///
/// Built once; answers "is this a real station?" in O(1).
#[derive(Debug, Clone, Default)]
pub struct DiscoveryIndex {
    names: HashSet<StationKey>,
}

impl DiscoveryIndex {
    /// Build the index. Names shared by several lines collapse to one entry.
    pub fn build(gazetteer: &Gazetteer) -> Self {
        let names = gazetteer.records().map(|(_, s)| s.key()).collect();
        Self { names }
    }

    pub fn contains(&self, key: &StationKey) -> bool {
        self.names.contains(key)
    }

    /// Number of distinct station names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{LONDON_STATIONS, london};

    #[test]
    fn collapses_interchanges() {
        let index = DiscoveryIndex::build(&london());
        assert_eq!(index.len(), LONDON_STATIONS.len());
    }

    #[test]
    fn lookup_ignores_case() {
        let index = DiscoveryIndex::build(&london());
        assert!(index.contains(&StationKey::new("Green Park")));
        assert!(index.contains(&StationKey::new("GREEN PARK")));
        assert!(index.contains(&StationKey::new(" green park ")));
        assert!(!index.contains(&StationKey::new("Green")));
    }

    #[test]
    fn empty_gazetteer() {
        let index = DiscoveryIndex::build(&Gazetteer::default());
        assert!(index.is_empty());
    }
}
