//! Type-safe enumerations for rule records and result grouping.
//!
//! These enums replace the single-character codes and free-form field names
//! used in the persisted formula table with closed, validated types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dimension::Dimension;
use crate::error::ModelError;

/// Which of the two input measurements a rule reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    /// The Length measurement. Wire code `L`.
    #[serde(rename = "L")]
    Length,

    /// The Height measurement. Wire code `H`.
    #[serde(rename = "H")]
    Height,
}

impl Source {
    /// Returns the single-character code used in the persisted table.
    pub fn as_code(&self) -> &'static str {
        match self {
            Source::Length => "L",
            Source::Height => "H",
        }
    }

    /// Returns the full measurement name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Length => "Length",
            Source::Height => "Height",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Source {
    type Err = ModelError;

    /// Parse a source code or name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "L" | "LENGTH" => Ok(Source::Length),
            "H" | "HEIGHT" => Ok(Source::Height),
            _ => Err(ModelError::UnknownSource(s.to_string())),
        }
    }
}

/// The arithmetic a rule applies to its source measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Add the offset. Wire code `+`.
    #[serde(rename = "+")]
    Add,

    /// Subtract the offset. Wire code `-`.
    #[serde(rename = "-")]
    Subtract,
}

impl Operator {
    /// Returns the symbol used in the persisted table and in formula hints.
    pub fn as_code(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
        }
    }

    /// Apply this operator to a base measurement and an offset.
    pub fn apply(&self, base: Dimension, offset: Dimension) -> Dimension {
        match self {
            Operator::Add => base + offset,
            Operator::Subtract => base - offset,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_code())
    }
}

impl FromStr for Operator {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            _ => Err(ModelError::UnknownOperator(s.to_string())),
        }
    }
}

/// Fixed display grouping for computed output fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Shutter,
    Glass,
    Frame,
    Other,
}

impl Category {
    /// All categories in their fixed display order.
    pub const ALL: [Category; 4] = [
        Category::Shutter,
        Category::Glass,
        Category::Frame,
        Category::Other,
    ];

    /// Classify an output field name by case-insensitive substring match.
    ///
    /// Matching runs in fixed priority order: `shutter`, then `glass`, then
    /// `frame`. A name matching several substrings resolves to the first, so
    /// e.g. "Shutter Glass Test" is always [`Category::Shutter`].
    pub fn classify(field_name: &str) -> Category {
        let lower = field_name.to_lowercase();
        if lower.contains("shutter") {
            Category::Shutter
        } else if lower.contains("glass") {
            Category::Glass
        } else if lower.contains("frame") {
            Category::Frame
        } else {
            Category::Other
        }
    }

    /// Returns the category name used for group headings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Shutter => "Shutter",
            Category::Glass => "Glass",
            Category::Frame => "Frame",
            Category::Other => "Other",
        }
    }

    /// Position within the fixed display sequence.
    pub fn sort_order(&self) -> u8 {
        match self {
            Category::Shutter => 1,
            Category::Glass => 2,
            Category::Frame => 3,
            Category::Other => 4,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_from_str() {
        assert_eq!("L".parse::<Source>().unwrap(), Source::Length);
        assert_eq!("height".parse::<Source>().unwrap(), Source::Height);
        assert!("X".parse::<Source>().is_err());
    }

    #[test]
    fn operator_apply() {
        let base = Dimension::new(5, 0);
        let offset = Dimension::new(1, 5);
        assert_eq!(Operator::Add.apply(base, offset), Dimension::new(6, 5));
        assert_eq!(Operator::Subtract.apply(base, offset), Dimension::new(3, 3));
    }

    #[test]
    fn classify_priority_order() {
        assert_eq!(Category::classify("Shutter Height"), Category::Shutter);
        assert_eq!(Category::classify("glass length"), Category::Glass);
        assert_eq!(Category::classify("Frame Width"), Category::Frame);
        assert_eq!(Category::classify("Track Count"), Category::Other);
        // Shutter wins over glass when both substrings are present.
        assert_eq!(Category::classify("Shutter Glass Test"), Category::Shutter);
    }

    #[test]
    fn display_order_is_fixed() {
        let orders: Vec<u8> = Category::ALL.iter().map(Category::sort_order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
    }

    #[test]
    fn wire_codes_round_trip() {
        let json = serde_json::to_string(&Source::Length).unwrap();
        assert_eq!(json, "\"L\"");
        let op: Operator = serde_json::from_str("\"-\"").unwrap();
        assert_eq!(op, Operator::Subtract);
    }
}
