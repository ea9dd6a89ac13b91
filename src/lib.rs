//! # qtyuom
//!
//! Extracts the most relevant (quantity, unit of measure) pair from free-text
//! article descriptions such as `"black steel bar 35 mm 77 stck"`.

pub mod extraction_errors;
pub mod extraction_types;
pub mod extractor_config;
pub mod numeric_patterns;
pub mod qty_uom_extractor;
pub mod unit_vocabulary;

// Re-export types for easier access
pub use extraction_errors::ExtractError;
pub use extraction_types::QtyUom;
pub use extractor_config::ExtractorConfig;
pub use numeric_patterns::NumericShape;
pub use qty_uom_extractor::{extract, extract_as_double, LeftMostUomExtractor, QtyUomExtractor};
pub use unit_vocabulary::UnitVocabulary;
