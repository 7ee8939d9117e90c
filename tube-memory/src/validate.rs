//! Checking typed station names.

use std::sync::Arc;

use crate::domain::StationKey;
use crate::gazetteer::DiscoveryIndex;

/// Visual state of the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStyle {
    #[default]
    Neutral,
    Success,
    Failure,
}

impl FieldStyle {
    /// CSS `border-color`, `None` for the stylesheet default.
    pub fn border_color(self) -> Option<&'static str> {
        match self {
            FieldStyle::Neutral => None,
            FieldStyle::Success => Some("#007D32"),
            FieldStyle::Failure => Some("#E32017"),
        }
    }

    /// CSS `box-shadow`, `None` for the stylesheet default.
    pub fn box_shadow(self) -> Option<&'static str> {
        match self {
            FieldStyle::Neutral => None,
            FieldStyle::Success => Some("0 0 0 2px #007D32"),
            FieldStyle::Failure => Some("0 0 0 2px #E32017"),
        }
    }
}

/// Result of checking one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Nothing but whitespace was typed; no lookup happened.
    Empty,
    /// A known station.
    Match(StationKey),
    NoMatch(StationKey),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Match(_))
    }

    /// Normalized input, empty for [`ValidationOutcome::Empty`].
    pub fn normalized(&self) -> &str {
        match self {
            ValidationOutcome::Empty => "",
            ValidationOutcome::Match(key) | ValidationOutcome::NoMatch(key) => key.as_str(),
        }
    }

    pub fn style(&self) -> FieldStyle {
        match self {
            ValidationOutcome::Empty => FieldStyle::Neutral,
            ValidationOutcome::Match(_) => FieldStyle::Success,
            ValidationOutcome::NoMatch(_) => FieldStyle::Failure,
        }
    }
}

/// Checks input against the station index. Has no side effects.
#[derive(Debug, Clone)]
pub struct InputValidator {
    index: Arc<DiscoveryIndex>,
}

impl InputValidator {
    pub fn new(index: Arc<DiscoveryIndex>) -> Self {
        Self { index }
    }

    pub fn validate(&self, raw: &str) -> ValidationOutcome {
        match StationKey::parse(raw) {
            None => ValidationOutcome::Empty,
            Some(key) if self.index.contains(&key) => ValidationOutcome::Match(key),
            Some(key) => ValidationOutcome::NoMatch(key),
        }
    }
}

/// Upper-case `value` while typing, keeping the caret where it was.
///
/// `cursor` and the returned position count UTF-16 code units, as DOM
/// selection offsets do. Upper-casing can lengthen the text ("ß" → "SS"),
/// so the caret moves with it.
///
/// ```
/// use tube_memory::validate::uppercase_live;
///
/// assert_eq!(uppercase_live("oxford circus", 6), ("OXFORD CIRCUS".to_string(), 6));
/// assert_eq!(uppercase_live("straße", 6), ("STRASSE".to_string(), 7));
/// ```
pub fn uppercase_live(value: &str, cursor: usize) -> (String, usize) {
    let mut units = 0;
    let mut split = value.len();
    for (i, c) in value.char_indices() {
        if units >= cursor {
            split = i;
            break;
        }
        units += c.len_utf16();
    }

    let head = value[..split].to_uppercase();
    let tail = value[split..].to_uppercase();
    let caret = head.encode_utf16().count();
    (head + &tail, caret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{LONDON_STATIONS, london};
    use proptest::prelude::*;

    fn validator() -> InputValidator {
        InputValidator::new(Arc::new(DiscoveryIndex::build(&london())))
    }

    #[test]
    fn empty_input_is_neutral() {
        let v = validator();
        for raw in ["", "   ", "\t\n"] {
            let outcome = v.validate(raw);
            assert_eq!(outcome, ValidationOutcome::Empty);
            assert_eq!(outcome.style(), FieldStyle::Neutral);
            assert_eq!(outcome.normalized(), "");
            assert!(!outcome.is_valid());
        }
    }

    #[test]
    fn known_station_any_case() {
        let v = validator();
        let outcome = v.validate("  OXFORD circus ");
        assert!(outcome.is_valid());
        assert_eq!(outcome.normalized(), "oxford circus");
        assert_eq!(outcome.style(), FieldStyle::Success);
    }

    #[test]
    fn unknown_station() {
        let outcome = validator().validate("Zzzzz");
        assert!(!outcome.is_valid());
        assert_eq!(outcome.normalized(), "zzzzz");
        assert_eq!(outcome.style(), FieldStyle::Failure);
    }

    #[test]
    fn no_partial_matches() {
        let v = validator();
        assert!(!v.validate("Oxford").is_valid());
        assert!(!v.validate("Oxford Circus Station").is_valid());
    }

    #[test]
    fn field_colors() {
        assert_eq!(FieldStyle::Success.border_color(), Some("#007D32"));
        assert_eq!(FieldStyle::Failure.box_shadow(), Some("0 0 0 2px #E32017"));
        assert_eq!(FieldStyle::Neutral.border_color(), None);
        assert_eq!(FieldStyle::Neutral.box_shadow(), None);
    }

    #[test]
    fn uppercase_keeps_caret() {
        assert_eq!(uppercase_live("bank", 2), ("BANK".to_string(), 2));
        assert_eq!(uppercase_live("bank", 0), ("BANK".to_string(), 0));
        assert_eq!(uppercase_live("", 0), (String::new(), 0));
    }

    #[test]
    fn uppercase_caret_past_end_clamps() {
        assert_eq!(uppercase_live("bank", 10), ("BANK".to_string(), 4));
    }

    #[test]
    fn uppercase_counts_utf16_units() {
        // "é" is one unit, the caret sits after it
        assert_eq!(uppercase_live("café x", 4), ("CAFÉ X".to_string(), 4));
    }

    proptest! {
        #[test]
        fn every_station_validates_in_any_case(
            idx in 0..LONDON_STATIONS.len(),
            flips in prop::collection::vec(any::<bool>(), 32),
        ) {
            let name: String = LONDON_STATIONS[idx]
                .chars()
                .zip(flips.iter().cycle())
                .map(|(c, &up)| if up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
                .collect();
            prop_assert!(validator().validate(&name).is_valid());
        }

        #[test]
        fn uppercase_is_uppercase(value in "[a-zA-Z ]{0,20}", cursor in 0usize..25) {
            let (upper, caret) = uppercase_live(&value, cursor);
            prop_assert_eq!(&upper, &value.to_uppercase());
            prop_assert_eq!(caret, cursor.min(value.len()));
        }
    }
}
