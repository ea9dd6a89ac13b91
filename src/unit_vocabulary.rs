//! # Unit Vocabulary Module
//!
//! This module defines the ordered set of unit-of-measure tokens recognized by
//! the extractor. Order is priority: the token at index 0 is tried first, and a
//! unit found anywhere in a description beats every lower-ranked unit, wherever
//! that one appears.
//!
//! ## Usage
//!
//! ```rust
//! use qtyuom::unit_vocabulary::UnitVocabulary;
//!
//! let vocabulary = UnitVocabulary::new(["pcs", "kg", "g"])?;
//! assert_eq!(vocabulary.priority_of("kg"), Some(1));
//! # Ok::<(), qtyuom::extraction_errors::ExtractError>(())
//! ```

use crate::extraction_errors::ExtractError;
use lazy_static::lazy_static;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Default unit tokens, highest priority first (German catalog units)
pub const DEFAULT_UNITS: &[&str] = &[
    "stk", "stk.", "stck", "stück", "stg", "stg.", "st", "st.", "stange", "stange(n)", "tafel",
    "tfl", "taf", "mtr", "meter", "qm", "kg", "lfm", "mm", "m",
];

lazy_static! {
    pub static ref DEFAULT_VOCABULARY: UnitVocabulary = UnitVocabulary::new(DEFAULT_UNITS.iter().copied())
        .expect("Default unit vocabulary should be valid");
}

/// Immutable, ordered list of unique lower-case unit tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitVocabulary {
    units: Vec<String>,
}

impl UnitVocabulary {
    /// Build a vocabulary from tokens given in priority order
    ///
    /// Tokens are lower-cased. Fails on an empty list, on a token that is empty
    /// or contains whitespace, and on duplicates.
    pub fn new<I, S>(units: I) -> Result<Self, ExtractError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();

        for unit in units {
            let unit = unit.as_ref().to_lowercase();
            if unit.is_empty() || unit.chars().any(char::is_whitespace) {
                return Err(ExtractError::InvalidUnit(unit));
            }
            if !seen.insert(unit.clone()) {
                return Err(ExtractError::DuplicateUnit(unit));
            }
            ordered.push(unit);
        }

        if ordered.is_empty() {
            return Err(ExtractError::EmptyVocabulary);
        }

        debug!("Built unit vocabulary with {} tokens", ordered.len());
        Ok(Self { units: ordered })
    }

    /// Parse a vocabulary from a JSON array of strings, e.g. `["pcs", "kg"]`
    pub fn from_json(json: &str) -> Result<Self, ExtractError> {
        let units: Vec<String> = serde_json::from_str(json)?;
        Self::new(units)
    }

    /// Load a vocabulary from a JSON file holding an array of strings
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ExtractError> {
        let path = path.as_ref();
        info!("Loading unit vocabulary from {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| ExtractError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&content)
    }

    pub fn units(&self) -> &[String] {
        &self.units
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Always `false` for a constructed vocabulary; present for API completeness
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Rank of a token (0 = highest priority), case-insensitive
    pub fn priority_of(&self, unit: &str) -> Option<usize> {
        let unit = unit.to_lowercase();
        self.units.iter().position(|u| *u == unit)
    }
}

impl Default for UnitVocabulary {
    fn default() -> Self {
        DEFAULT_VOCABULARY.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary_order() {
        let vocabulary = UnitVocabulary::default();
        assert_eq!(vocabulary.len(), DEFAULT_UNITS.len());
        assert_eq!(vocabulary.priority_of("stk"), Some(0));
        assert_eq!(vocabulary.priority_of("m"), Some(DEFAULT_UNITS.len() - 1));
        assert!(vocabulary.priority_of("stck") < vocabulary.priority_of("mm"));
    }

    #[test]
    fn test_lowercases_tokens() {
        let vocabulary = UnitVocabulary::new(["PCS", "Kg"]).unwrap();
        assert_eq!(vocabulary.units(), &["pcs".to_string(), "kg".to_string()]);
        assert_eq!(vocabulary.priority_of("KG"), Some(1));
    }

    #[test]
    fn test_rejects_duplicates_after_lowercasing() {
        let result = UnitVocabulary::new(["kg", "KG"]);
        assert_eq!(result, Err(ExtractError::DuplicateUnit("kg".to_string())));
    }

    #[test]
    fn test_rejects_empty_and_whitespace_tokens() {
        assert_eq!(
            UnitVocabulary::new([""]),
            Err(ExtractError::InvalidUnit(String::new()))
        );
        assert_eq!(
            UnitVocabulary::new(["kg", "lfd m"]),
            Err(ExtractError::InvalidUnit("lfd m".to_string()))
        );
    }

    #[test]
    fn test_rejects_empty_list() {
        let units: Vec<String> = Vec::new();
        assert_eq!(
            UnitVocabulary::new(units),
            Err(ExtractError::EmptyVocabulary)
        );
    }

    #[test]
    fn test_from_json() {
        let vocabulary = UnitVocabulary::from_json(r#"["pcs", "box", "kg"]"#).unwrap();
        assert_eq!(vocabulary.iter().collect::<Vec<_>>(), vec!["pcs", "box", "kg"]);

        assert!(matches!(
            UnitVocabulary::from_json(r#"{"units": []}"#),
            Err(ExtractError::Config(_))
        ));
    }
}
