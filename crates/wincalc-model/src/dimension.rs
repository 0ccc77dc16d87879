//! Mixed-radix measurement arithmetic.
//!
//! A measurement is a pair of whole units and subunits, where one unit is
//! [`SUB_RADIX`] subunits. Every value is kept in normal form: the subunit
//! component always lies in `[0, SUB_RADIX)`, while the unit component may be
//! any integer, including negative. Normal form is defined through the signed
//! total subunit count, using floor division so that negative totals still
//! produce an in-range subunit remainder.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Number of subunits in one whole unit.
pub const SUB_RADIX: i64 = 8;

/// A measurement in normal form: `units` whole units plus `subs` subunits,
/// with `0 <= subs < SUB_RADIX`.
///
/// Two dimensions are equal iff their signed totals are equal; because every
/// constructor normalizes, the derived field-wise equality coincides with
/// total equality. Values are immutable: arithmetic returns new instances.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "RawDimension")]
pub struct Dimension {
    units: i64,
    subs: i64,
}

/// Unvalidated wire form; normalized on the way in.
#[derive(Deserialize)]
struct RawDimension {
    units: i64,
    subs: i64,
}

impl From<RawDimension> for Dimension {
    fn from(raw: RawDimension) -> Self {
        Dimension::new(raw.units, raw.subs)
    }
}

impl Dimension {
    /// Create a dimension from raw unit and subunit counts, normalizing so
    /// the subunit component lands in `[0, SUB_RADIX)`.
    pub fn new(units: i64, subs: i64) -> Self {
        Self::from_total(units * SUB_RADIX + subs)
    }

    /// Create a dimension from a signed total subunit count.
    ///
    /// Uses floor-division semantics: `units = total.div_euclid(SUB_RADIX)`,
    /// `subs = total.rem_euclid(SUB_RADIX)`. Truncating division would push
    /// the subunit component out of range for negative totals; Euclidean
    /// division keeps it in `[0, SUB_RADIX)` for every total.
    pub fn from_total(total: i64) -> Self {
        Self {
            units: total.div_euclid(SUB_RADIX),
            subs: total.rem_euclid(SUB_RADIX),
        }
    }

    /// Parse a dimension from raw form-field text.
    ///
    /// Reads the leading (optionally signed) digit run, so `"12abc"` parses
    /// as 12. Empty or non-numeric input coerces to zero rather than
    /// failing, so a partially filled form still yields a usable
    /// measurement.
    pub fn from_raw(units: &str, subs: &str) -> Self {
        Self::new(parse_leading_int(units), parse_leading_int(subs))
    }

    /// Whole-unit component. May be negative.
    pub fn units(&self) -> i64 {
        self.units
    }

    /// Subunit component, always in `[0, SUB_RADIX)`.
    pub fn subs(&self) -> i64 {
        self.subs
    }

    /// Canonical signed magnitude: `units * SUB_RADIX + subs`.
    pub fn total(&self) -> i64 {
        self.units * SUB_RADIX + self.subs
    }

    /// True when the signed total is below zero. A negative result from
    /// subtraction signals an infeasible dimension, not an arithmetic error.
    pub fn is_negative(&self) -> bool {
        self.total() < 0
    }
}

/// Parse the leading optionally-signed digit run of a form field, falling
/// back to zero when none is present.
fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map_or(0, |n| sign * n)
}

impl Add for Dimension {
    type Output = Dimension;

    fn add(self, rhs: Dimension) -> Dimension {
        Dimension::from_total(self.total() + rhs.total())
    }
}

impl Sub for Dimension {
    type Output = Dimension;

    /// Subtraction may yield negative units while the subunit component
    /// stays in range; see [`Dimension::is_negative`].
    fn sub(self, rhs: Dimension) -> Dimension {
        Dimension::from_total(self.total() - rhs.total())
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} unit {} sub", self.units, self.subs)
    }
}
