//! # Vocabulary Tests
//!
//! Integration tests for custom unit vocabularies: priority ordering,
//! validation, and loading from JSON files.

use qtyuom::{ExtractError, ExtractorConfig, LeftMostUomExtractor, QtyUom, QtyUomExtractor, UnitVocabulary};
use std::io::Write;
use tempfile::NamedTempFile;

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor_for(units: &[&str]) -> LeftMostUomExtractor {
        let vocabulary = UnitVocabulary::new(units.iter().copied()).unwrap();
        LeftMostUomExtractor::with_vocabulary(vocabulary).unwrap()
    }

    #[test]
    fn test_vocabulary_order_defines_priority() {
        let description = "35 mm 77 stck";

        let stck_first = extractor_for(&["stck", "mm"]);
        assert_eq!(
            stck_first.extract(description),
            Some(QtyUom::new("77".to_string(), "stck"))
        );

        let mm_first = extractor_for(&["mm", "stck"]);
        assert_eq!(
            mm_first.extract(description),
            Some(QtyUom::new("35".to_string(), "mm"))
        );
    }

    #[test]
    fn test_units_outside_vocabulary_are_ignored() {
        let extractor = extractor_for(&["pcs", "box"]);
        assert_eq!(extractor.extract("bar 35 mm 77 stck"), Some(QtyUom::empty()));
        assert_eq!(
            extractor.extract("screws 2 box 100 pcs"),
            Some(QtyUom::new("100".to_string(), "pcs"))
        );
    }

    #[test]
    fn test_uppercase_vocabulary_entries_match() {
        let extractor = extractor_for(&["PCS"]);
        assert_eq!(
            extractor.extract("Screws 100 Pcs"),
            Some(QtyUom::new("100".to_string(), "pcs"))
        );
    }

    #[test]
    fn test_regex_metacharacters_in_units() {
        let extractor = extractor_for(&["m^2", "m"]);
        assert_eq!(
            extractor.extract("glass 4,5 m^2"),
            Some(QtyUom::new("4,5".to_string(), "m^2"))
        );
        assert_eq!(
            extractor.extract("glass 4,5 mx2 3 m"),
            Some(QtyUom::new("3".to_string(), "m"))
        );
    }

    #[test]
    fn test_invalid_vocabularies_are_rejected() {
        assert_eq!(
            UnitVocabulary::new(["kg", "g", "kg"]),
            Err(ExtractError::DuplicateUnit("kg".to_string()))
        );
        assert_eq!(
            UnitVocabulary::new(["fl oz"]),
            Err(ExtractError::InvalidUnit("fl oz".to_string()))
        );
        assert_eq!(
            UnitVocabulary::new(Vec::<&str>::new()),
            Err(ExtractError::EmptyVocabulary)
        );
    }

    #[test]
    fn test_vocabulary_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"["pcs", "pack", "kg"]"#).unwrap();

        let vocabulary = UnitVocabulary::from_file(file.path()).unwrap();
        assert_eq!(vocabulary.len(), 3);
        assert_eq!(vocabulary.priority_of("pack"), Some(1));

        let config = ExtractorConfig {
            vocabulary,
            ..Default::default()
        };
        let extractor = LeftMostUomExtractor::with_config(config).unwrap();
        assert_eq!(
            extractor.extract("rice 5 kg in 2 pack"),
            Some(QtyUom::new("2".to_string(), "pack"))
        );
    }

    #[test]
    fn test_vocabulary_from_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "pcs, pack").unwrap();
        assert!(matches!(
            UnitVocabulary::from_file(file.path()),
            Err(ExtractError::Config(_))
        ));

        assert!(matches!(
            UnitVocabulary::from_file("/nonexistent/units.json"),
            Err(ExtractError::Config(_))
        ));
    }
}
