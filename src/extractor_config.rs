//! # Extractor Configuration Module
//!
//! This module defines the configuration used to build a quantity/unit
//! extractor: which unit vocabulary to use and how much of a description
//! is scanned.

use crate::extraction_errors::ExtractError;
use crate::unit_vocabulary::UnitVocabulary;
use std::env;
use tracing::debug;

/// Descriptions longer than this (in bytes) are only scanned up to the limit
pub const DEFAULT_MAX_DESCRIPTION_LEN: usize = 4096;

/// Environment variable naming a JSON file with the unit vocabulary
pub const UNITS_FILE_ENV: &str = "QTYUOM_UNITS_FILE";
/// Environment variable overriding `max_description_len`
pub const MAX_DESCRIPTION_LEN_ENV: &str = "QTYUOM_MAX_DESCRIPTION_LEN";

/// Configuration structure for the extractor
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Unit tokens in priority order
    pub vocabulary: UnitVocabulary,
    /// Maximum number of bytes of a description that are scanned
    pub max_description_len: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            vocabulary: UnitVocabulary::default(),
            max_description_len: DEFAULT_MAX_DESCRIPTION_LEN,
        }
    }
}

impl ExtractorConfig {
    /// Build a configuration from `QTYUOM_UNITS_FILE` and `QTYUOM_MAX_DESCRIPTION_LEN`
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ExtractError> {
        let mut config = Self::default();

        if let Ok(path) = env::var(UNITS_FILE_ENV) {
            debug!("{} set, loading vocabulary from '{}'", UNITS_FILE_ENV, path);
            config.vocabulary = UnitVocabulary::from_file(&path)?;
        }

        if let Ok(value) = env::var(MAX_DESCRIPTION_LEN_ENV) {
            config.max_description_len = parse_max_len(&value)?;
        }

        Ok(config)
    }
}

fn parse_max_len(value: &str) -> Result<usize, ExtractError> {
    match value.trim().parse::<usize>() {
        Ok(0) | Err(_) => Err(ExtractError::Config(format!(
            "{MAX_DESCRIPTION_LEN_ENV} must be a positive integer, got '{value}'"
        ))),
        Ok(len) => Ok(len),
    }
}
