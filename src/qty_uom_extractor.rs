//! # Quantity/Unit Extractor Module
//!
//! This module finds the single most relevant (quantity, unit) pair in a
//! free-text article description such as `"black steel bar 35 mm 77 stck"`.
//!
//! ## Matching policy
//!
//! - Units are tried in vocabulary order. A unit found anywhere in the
//!   description beats every lower-ranked unit, wherever that one appears:
//!   the example above yields `("77", "stck")`, not `("35", "mm")`.
//! - For one unit, the description is scanned word by word over a growing
//!   window; the first window in which the unit follows a number wins, so the
//!   leftmost occurrence is returned.
//! - Within a window, numeric shapes are tried from the richest (grouped
//!   thousands with decimals) to the plainest (integer).
//!
//! ## Results
//!
//! Matching runs on the lower-cased description and the returned quantity
//! and unit are taken from it, so results are always lower-case.
//!
//! | input | result |
//! |---|---|
//! | blank (empty or whitespace only) | `None` |
//! | no number followed by a known unit | `Some(QtyUom::empty())` |
//! | otherwise | `Some(QtyUom { quantity, uom })` |
//!
//! ## Usage
//!
//! ```rust
//! use qtyuom::{LeftMostUomExtractor, QtyUomExtractor};
//!
//! let extractor = LeftMostUomExtractor::new()?;
//! let result = extractor.extract("black steel bar 35 mm 77 stck").unwrap();
//! assert_eq!(result.quantity, "77");
//! assert_eq!(result.uom, "stck");
//! # Ok::<(), qtyuom::ExtractError>(())
//! ```

use crate::extraction_errors::ExtractError;
use crate::extraction_types::QtyUom;
use crate::extractor_config::ExtractorConfig;
use crate::numeric_patterns::{ShapeMatch, UnitPatterns};
use crate::unit_vocabulary::UnitVocabulary;
use lazy_static::lazy_static;
use tracing::{debug, info, trace, warn};

lazy_static! {
    static ref DEFAULT_EXTRACTOR: LeftMostUomExtractor =
        LeftMostUomExtractor::new().expect("Default extractor patterns should be valid");
}

/// Extraction of a (quantity, unit) pair from an article description
pub trait QtyUomExtractor {
    /// Quantity as matched text (whitespace removed) and the matched unit
    ///
    /// Returns `None` for blank input and `Some(QtyUom::empty())` when nothing matches.
    fn extract(&self, description: &str) -> Option<QtyUom>;

    /// Same matching as [`extract`](Self::extract) with the quantity parsed as `f64`
    ///
    /// Grouping and decimal separators are interpreted according to the
    /// numeric shape that matched. The no-match sentinel is `(0.0, "")`.
    fn extract_as_double(&self, description: &str) -> Result<Option<QtyUom<f64>>, ExtractError>;

    /// [`extract`](Self::extract) for callers holding an optional description
    fn extract_opt(&self, description: Option<&str>) -> Option<QtyUom> {
        description.and_then(|d| self.extract(d))
    }
}

/// Extractor returning the leftmost occurrence of the highest-priority unit
#[derive(Debug, Clone)]
pub struct LeftMostUomExtractor {
    vocabulary: UnitVocabulary,
    /// One compiled cascade per vocabulary entry, same order
    unit_patterns: Vec<UnitPatterns>,
    max_description_len: usize,
}

impl LeftMostUomExtractor {
    /// Create an extractor over the default unit vocabulary
    pub fn new() -> Result<Self, ExtractError> {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create an extractor over a custom unit vocabulary
    ///
    /// # Examples
    ///
    /// ```rust
    /// use qtyuom::{LeftMostUomExtractor, QtyUomExtractor, UnitVocabulary};
    ///
    /// let vocabulary = UnitVocabulary::new(["pcs", "kg"])?;
    /// let extractor = LeftMostUomExtractor::with_vocabulary(vocabulary)?;
    /// let result = extractor.extract("sugar 2 kg in 4 pcs").unwrap();
    /// assert_eq!(result.quantity, "4");
    /// assert_eq!(result.uom, "pcs");
    /// # Ok::<(), qtyuom::ExtractError>(())
    /// ```
    pub fn with_vocabulary(vocabulary: UnitVocabulary) -> Result<Self, ExtractError> {
        Self::with_config(ExtractorConfig {
            vocabulary,
            ..Default::default()
        })
    }

    /// Create an extractor from a full configuration
    pub fn with_config(config: ExtractorConfig) -> Result<Self, ExtractError> {
        let unit_patterns = config
            .vocabulary
            .iter()
            .map(UnitPatterns::new)
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "Creating LeftMostUomExtractor: units={}, max_description_len={}",
            config.vocabulary.len(),
            config.max_description_len
        );

        Ok(Self {
            vocabulary: config.vocabulary,
            unit_patterns,
            max_description_len: config.max_description_len,
        })
    }

    pub fn vocabulary(&self) -> &UnitVocabulary {
        &self.vocabulary
    }

    pub fn max_description_len(&self) -> usize {
        self.max_description_len
    }

    /// Run the scan once, for callers that need both result forms
    ///
    /// Returns `None` for blank input and `Some(None)` when nothing matches.
    pub fn find_match(&self, description: &str) -> Option<Option<ShapeMatch>> {
        let text = prepare(description)?;
        Some(self.scan(&text))
    }

    /// Locate the winning match in an already lower-cased description
    fn scan(&self, text: &str) -> Option<ShapeMatch> {
        if text.len() > self.max_description_len {
            warn!(
                "Description truncated for scanning ({} > {} bytes)",
                text.len(),
                self.max_description_len
            );
        }

        let words = word_spans(text, self.max_description_len);
        trace!("Scanning {} words", words.len());

        for patterns in &self.unit_patterns {
            let unit = patterns.unit();
            for &(start, end) in &words {
                // A match first appearing in this window has its unit inside the last word
                if !text[start..end].contains(unit) {
                    continue;
                }
                let window = &text[..end];
                trace!("Testing unit '{}' against window '{}'", unit, window);
                if let Some(found) = patterns.find(window) {
                    debug!(
                        "Matched quantity '{}' with unit '{}' ({:?}) at byte {}",
                        found.raw_quantity, found.uom, found.shape, found.start_pos
                    );
                    return Some(found);
                }
            }
        }

        debug!("No quantity/unit pair found in '{}'", text);
        None
    }
}

impl QtyUomExtractor for LeftMostUomExtractor {
    fn extract(&self, description: &str) -> Option<QtyUom> {
        let result = match self.find_match(description)? {
            Some(found) => found.to_textual(),
            None => QtyUom::empty(),
        };
        Some(result)
    }

    fn extract_as_double(&self, description: &str) -> Result<Option<QtyUom<f64>>, ExtractError> {
        let Some(found) = self.find_match(description) else {
            return Ok(None);
        };
        let result = match found {
            Some(found) => found.to_numeric()?,
            None => QtyUom::empty(),
        };
        Ok(Some(result))
    }
}

impl Default for LeftMostUomExtractor {
    fn default() -> Self {
        DEFAULT_EXTRACTOR.clone()
    }
}

/// Lower-cased copy of the description, or `None` when it is blank
fn prepare(description: &str) -> Option<String> {
    if description.trim().is_empty() {
        trace!("Blank description, nothing to extract");
        return None;
    }
    Some(description.to_lowercase())
}

/// Byte spans of the non-empty words of `text` split on single spaces
///
/// Words ending beyond `max_len` are dropped. An empty word (from repeated
/// spaces) is skipped: its window is the previous window plus a space and
/// cannot produce a different match.
fn word_spans(text: &str, max_len: usize) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut offset = 0;
    for word in text.split(' ') {
        let end = offset + word.len();
        if end > max_len {
            break;
        }
        if !word.is_empty() {
            spans.push((offset, end));
        }
        offset = end + 1;
    }
    spans
}

/// Extract with the default vocabulary, see [`QtyUomExtractor::extract`]
pub fn extract(description: &str) -> Option<QtyUom> {
    DEFAULT_EXTRACTOR.extract(description)
}

/// Extract with the default vocabulary, see [`QtyUomExtractor::extract_as_double`]
pub fn extract_as_double(description: &str) -> Result<Option<QtyUom<f64>>, ExtractError> {
    DEFAULT_EXTRACTOR.extract_as_double(description)
}
