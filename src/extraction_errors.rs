//! # Extraction Error Types Module
//!
//! This module defines the error types used by the quantity/unit extractor.
//! Blank input and "nothing found" are not errors: they are reported through
//! `None` and the empty `QtyUom` sentinel. Errors only come from building an
//! extractor (bad vocabulary, bad configuration) or from a quantity that
//! cannot be parsed as a number.

/// Custom error types for extractor construction and numeric parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractError {
    /// The unit vocabulary contains no tokens
    EmptyVocabulary,
    /// A unit token is empty or contains whitespace
    InvalidUnit(String),
    /// A unit token appears more than once (after lower-casing)
    DuplicateUnit(String),
    /// A shape/unit pattern failed to compile
    Pattern(String),
    /// A matched quantity could not be parsed as a floating-point number
    InvalidQuantity(String),
    /// Vocabulary file or environment configuration could not be read
    Config(String),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::EmptyVocabulary => write!(f, "Unit vocabulary is empty"),
            ExtractError::InvalidUnit(unit) => write!(f, "Invalid unit token: '{unit}'"),
            ExtractError::DuplicateUnit(unit) => write!(f, "Duplicate unit token: '{unit}'"),
            ExtractError::Pattern(msg) => write!(f, "Pattern error: {msg}"),
            ExtractError::InvalidQuantity(qty) => write!(f, "Invalid quantity: '{qty}'"),
            ExtractError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<regex::Error> for ExtractError {
    fn from(err: regex::Error) -> Self {
        ExtractError::Pattern(err.to_string())
    }
}

impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        ExtractError::Config(err.to_string())
    }
}
