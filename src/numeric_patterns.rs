//! # Numeric Patterns Module
//!
//! This module contains the numeric shapes a quantity may take in an article
//! description and builds, for one unit token, the ordered list of regexes
//! "number, whitespace, unit, whitespace or end".
//!
//! Shapes are tried from the richest to the simplest so that a grouped number
//! such as `12 345,50` is never cut down to its trailing `345,50` or `50`.
//! Every shape must start at the beginning of the text or right after
//! whitespace.

use crate::extraction_errors::ExtractError;
use crate::extraction_types::QtyUom;
use regex::Regex;
use tracing::trace;

// ASCII digits and whitespace only; `\d` and `\s` would accept Unicode classes
const DIGIT: &str = "[0-9]";
const WS: &str = r"[ \t\n\x0B\x0C\r]";

/// Textual shape of a quantity, in cascade order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericShape {
    /// `12 345 678,90`, `12 345 , 5`
    SpaceGroupedDecimal,
    /// `1 000`, `1 000 000`
    SpaceGrouped,
    /// `1,234`, `1,234,567.89`
    CommaGrouped,
    /// `1.234`, `1.234.567,89`
    DotGrouped,
    /// `12 , 5`
    SpacedDecimal,
    /// `12,5`, `12.5`
    Decimal,
    /// `77`
    Integer,
}

impl NumericShape {
    /// All shapes, most specific first
    pub const CASCADE: [NumericShape; 7] = [
        NumericShape::SpaceGroupedDecimal,
        NumericShape::SpaceGrouped,
        NumericShape::CommaGrouped,
        NumericShape::DotGrouped,
        NumericShape::SpacedDecimal,
        NumericShape::Decimal,
        NumericShape::Integer,
    ];

    /// Regex fragment capturing the quantity as the `qty` group
    fn quantity_pattern(self) -> String {
        let d = DIGIT;
        let ws = WS;
        let body = match self {
            NumericShape::SpaceGroupedDecimal => {
                format!(r"{d}{{1,3}}{ws}(?:{d}{{3}}{ws})*{d}{{3}}{ws}?[,.]{ws}?{d}+")
            }
            NumericShape::SpaceGrouped => {
                format!(r"{d}{{1,3}}(?:{ws}{d}{{3}})+(?:{ws}|[,.]{d}+)?")
            }
            NumericShape::CommaGrouped => {
                format!(r"{d}{{1,3}},(?:{d}{{3}},)*{d}{{3}}(?:{ws}|\.{d}+)?")
            }
            NumericShape::DotGrouped => {
                format!(r"{d}{{1,3}}\.(?:{d}{{3}}\.)*{d}{{3}}(?:{ws}|,{d}+)?")
            }
            NumericShape::SpacedDecimal => format!(r"{d}+{ws}[,.]{ws}{d}+"),
            NumericShape::Decimal => format!(r"{d}+[,.]{d}+"),
            NumericShape::Integer => format!(r"{d}+"),
        };
        format!(r"(?:\A|{ws})(?P<qty>{body})")
    }

    /// Full pattern for this shape followed by `unit`
    pub fn pattern_for_unit(self, unit: &str) -> String {
        format!(
            r"{qty}{ws}(?P<uom>{unit})(?:{ws}|\z)",
            qty = self.quantity_pattern(),
            unit = regex::escape(unit),
            ws = WS
        )
    }

    /// Quantity as returned in textual form: whitespace removed, separators kept
    pub fn textual(self, raw: &str) -> String {
        raw.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Quantity rewritten with grouping removed and `.` as decimal point
    ///
    /// The shape decides which separator groups thousands and which one marks
    /// the decimals, so `1.234,56` and `1,234.56` both become `1234.56`.
    pub fn normalize(self, raw: &str) -> String {
        let compact = self.textual(raw);
        match self {
            NumericShape::CommaGrouped => compact.replace(',', ""),
            NumericShape::DotGrouped => compact.replace('.', "").replace(',', "."),
            NumericShape::Integer => compact,
            NumericShape::SpaceGroupedDecimal
            | NumericShape::SpaceGrouped
            | NumericShape::SpacedDecimal
            | NumericShape::Decimal => compact.replace(',', "."),
        }
    }

    /// Parse a raw matched quantity into a floating-point value
    pub fn parse(self, raw: &str) -> Result<f64, ExtractError> {
        let normalized = self.normalize(raw);
        normalized
            .parse::<f64>()
            .map_err(|_| ExtractError::InvalidQuantity(raw.to_string()))
    }
}

/// A quantity/unit occurrence found by one of the shape patterns
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeMatch {
    /// The shape that matched
    pub shape: NumericShape,
    /// The quantity exactly as it appears in the scanned text
    pub raw_quantity: String,
    /// The matched unit token
    pub uom: String,
    /// Byte offset of the quantity in the scanned text
    pub start_pos: usize,
}

impl ShapeMatch {
    /// Textual result: quantity with whitespace removed
    pub fn to_textual(&self) -> QtyUom {
        QtyUom::new(self.shape.textual(&self.raw_quantity), self.uom.as_str())
    }

    /// Numeric result: quantity parsed according to the matched shape
    pub fn to_numeric(&self) -> Result<QtyUom<f64>, ExtractError> {
        Ok(QtyUom::new(self.shape.parse(&self.raw_quantity)?, self.uom.as_str()))
    }
}

/// The seven compiled shape patterns for one unit token, in cascade order
#[derive(Debug, Clone)]
pub struct UnitPatterns {
    unit: String,
    patterns: Vec<(NumericShape, Regex)>,
}

impl UnitPatterns {
    /// Compile the cascade for `unit`
    pub fn new(unit: &str) -> Result<Self, ExtractError> {
        let patterns = NumericShape::CASCADE
            .iter()
            .map(|&shape| -> Result<_, ExtractError> {
                Ok((shape, Regex::new(&shape.pattern_for_unit(unit))?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            unit: unit.to_string(),
            patterns,
        })
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Test `text` against each shape in order and return the first hit
    pub fn find(&self, text: &str) -> Option<ShapeMatch> {
        for (shape, regex) in &self.patterns {
            if let Some(captures) = regex.captures(text) {
                let (Some(qty), Some(uom)) = (captures.name("qty"), captures.name("uom")) else {
                    continue;
                };
                trace!("Shape {:?} matched unit '{}' in '{}'", shape, self.unit, text);
                return Some(ShapeMatch {
                    shape: *shape,
                    raw_quantity: qty.as_str().to_string(),
                    uom: uom.as_str().to_string(),
                    start_pos: qty.start(),
                });
            }
        }
        None
    }
}
