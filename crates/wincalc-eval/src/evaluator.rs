//! Rule evaluation over a measurement pair.
//!
//! [`evaluate`] resolves the selected (type, subtype) mapping, applies every
//! rule in it to the Length/Height inputs, and groups the results into the
//! fixed display categories. It is a pure function: it never mutates the
//! table or the measurements, performs no I/O, and an infeasible field never
//! aborts the rest of the batch.

use serde::Serialize;
use thiserror::Error;

use wincalc_model::{Category, Dimension, Rule, RuleSet};

/// Evaluation failures. Infeasible results are not errors; see
/// [`FieldResult::feasibility`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The selected type/subtype has no rule mapping. No partial output is
    /// produced.
    #[error("no formula configuration for window type {window_type:?}, subtype {subtype:?}")]
    ConfigurationNotFound {
        window_type: String,
        subtype: String,
    },
}

/// Whether a computed dimension is physically realizable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Feasibility {
    Feasible,
    /// The computed total is negative: the requested window is too small for
    /// this rule's offset. Displayed as "Not Possible".
    Infeasible,
}

/// One computed output field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldResult {
    /// Output field name as declared in the table.
    pub label: String,
    /// The computed dimension. Kept even when infeasible so the raw
    /// (negative-total) value stays traceable.
    pub value: Dimension,
    pub feasibility: Feasibility,
    /// Human-readable formula hint, e.g. `- 1u 5s`.
    pub hint: String,
}

impl FieldResult {
    fn new(label: &str, rule: &Rule, value: Dimension) -> Self {
        let feasibility = if value.is_negative() {
            Feasibility::Infeasible
        } else {
            Feasibility::Feasible
        };
        Self {
            label: label.to_string(),
            value,
            feasibility,
            hint: rule.hint(),
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.feasibility == Feasibility::Feasible
    }

    /// The value as shown to the operator: the formatted dimension, or
    /// "Not Possible" for infeasible fields.
    pub fn display_value(&self) -> String {
        match self.feasibility {
            Feasibility::Feasible => self.value.to_string(),
            Feasibility::Infeasible => "Not Possible".to_string(),
        }
    }
}

/// Output fields sharing one display category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    /// Fields in the order the table declares them.
    pub fields: Vec<FieldResult>,
}

/// A full evaluation: category groups in fixed display order (Shutter,
/// Glass, Frame, Other), empty categories omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub groups: Vec<CategoryGroup>,
}

impl Evaluation {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of computed fields across all groups.
    pub fn field_count(&self) -> usize {
        self.groups.iter().map(|group| group.fields.len()).sum()
    }

    /// Find a field by label.
    pub fn field(&self, label: &str) -> Option<&FieldResult> {
        self.groups
            .iter()
            .flat_map(|group| group.fields.iter())
            .find(|field| field.label == label)
    }
}

/// Evaluate every rule configured for `(window_type, subtype)` against the
/// given measurements.
///
/// Fails with [`EvalError::ConfigurationNotFound`] when the pair has no
/// mapping; otherwise every configured field is computed, with per-field
/// feasibility flags for negative results.
pub fn evaluate(
    length: Dimension,
    height: Dimension,
    window_type: &str,
    subtype: &str,
    rule_set: &RuleSet,
) -> Result<Evaluation, EvalError> {
    let rules = rule_set
        .rules(window_type, subtype)
        .ok_or_else(|| EvalError::ConfigurationNotFound {
            window_type: window_type.to_string(),
            subtype: subtype.to_string(),
        })?;

    let mut buckets: [Vec<FieldResult>; 4] = Default::default();
    for (field, rule) in rules.iter() {
        let value = rule.apply(length, height);
        // sort_order is 1-based over the same four categories as ALL.
        let slot = usize::from(Category::classify(field).sort_order() - 1);
        buckets[slot].push(FieldResult::new(field, rule, value));
    }

    let groups = Category::ALL
        .into_iter()
        .zip(buckets)
        .filter(|(_, fields)| !fields.is_empty())
        .map(|(category, fields)| CategoryGroup { category, fields })
        .collect();

    Ok(Evaluation { groups })
}
