//! # Extraction Types Module
//!
//! This module defines the result types returned by the quantity/unit extractor.

use serde::{Deserialize, Serialize};

/// A (quantity, unit of measure) pair extracted from an article description
///
/// `QtyUom<String>` is the textual form (quantity as matched, whitespace
/// removed) and `QtyUom<f64>` the numeric form. Both quantity and unit are
/// always lower-case because matching runs on the case-folded description.
///
/// A pair with an empty unit is the "no match" sentinel, see [`QtyUom::empty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QtyUom<Q = String> {
    /// The extracted quantity (e.g. "77", "12345,50", or 12345.5 in numeric form)
    pub quantity: Q,
    /// The matched unit token, byte-identical to a vocabulary entry (e.g. "stck")
    pub uom: String,
}

impl<Q> QtyUom<Q> {
    pub fn new(quantity: Q, uom: impl Into<String>) -> Self {
        Self {
            quantity,
            uom: uom.into(),
        }
    }

    /// Whether this is the "no match" sentinel
    ///
    /// A successful match always carries a non-empty unit, so an empty unit
    /// alone identifies the sentinel.
    pub fn is_empty(&self) -> bool {
        self.uom.is_empty()
    }
}

impl<Q: Default> QtyUom<Q> {
    /// The "no match" sentinel: `("", "")` in textual form, `(0.0, "")` in numeric form
    pub fn empty() -> Self {
        Self {
            quantity: Q::default(),
            uom: String::new(),
        }
    }
}
