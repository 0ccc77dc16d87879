//! A single output-field transformation rule.

use serde::{Deserialize, Serialize};

use crate::dimension::{Dimension, SUB_RADIX};
use crate::enums::{Operator, Source};
use crate::error::ModelError;

/// One configured transformation: read the named source measurement and
/// add or subtract a fixed offset.
///
/// The persisted form is the flat record `{"source","op","u","s"}`; see
/// [`RuleRecord`]. Records read from storage are validated: `s` must lie in
/// `[0, SUB_RADIX)` and `u` must be non-negative. Rules built in code
/// normalize their offset instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleRecord", into = "RuleRecord")]
pub struct Rule {
    /// Which input measurement the rule reads.
    pub source: Source,
    /// Whether the offset is added or subtracted.
    pub op: Operator,
    /// The fixed offset, in normal form.
    pub offset: Dimension,
}

impl Rule {
    /// Build a rule from raw offset components, normalizing the offset.
    pub fn new(source: Source, op: Operator, units: i64, subs: i64) -> Self {
        Self {
            source,
            op,
            offset: Dimension::new(units, subs),
        }
    }

    /// Apply this rule to the measurement pair it selects from.
    pub fn apply(&self, length: Dimension, height: Dimension) -> Dimension {
        let base = match self.source {
            Source::Length => length,
            Source::Height => height,
        };
        self.op.apply(base, self.offset)
    }

    /// Human-readable formula hint, e.g. `- 1u 5s`.
    pub fn hint(&self) -> String {
        format!(
            "{} {}u {}s",
            self.op.as_code(),
            self.offset.units(),
            self.offset.subs()
        )
    }
}

/// Wire shape of a rule as stored in the formula table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleRecord {
    source: Source,
    op: Operator,
    u: i64,
    s: i64,
}

impl TryFrom<RuleRecord> for Rule {
    type Error = ModelError;

    fn try_from(record: RuleRecord) -> Result<Self, Self::Error> {
        if record.u < 0 {
            return Err(ModelError::NegativeOffsetUnits(record.u));
        }
        if !(0..SUB_RADIX).contains(&record.s) {
            return Err(ModelError::SubunitOutOfRange {
                value: record.s,
                radix: SUB_RADIX,
            });
        }
        Ok(Rule {
            source: record.source,
            op: record.op,
            offset: Dimension::new(record.u, record.s),
        })
    }
}

impl From<Rule> for RuleRecord {
    fn from(rule: Rule) -> Self {
        RuleRecord {
            source: rule.source,
            op: rule.op,
            u: rule.offset.units(),
            s: rule.offset.subs(),
        }
    }
}
