//! The full configurable formula table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::rule::Rule;

/// Subtype key for window types that do not branch by subtype.
///
/// Every type is stored as type → subtype → field, so types without a real
/// subtype distinction use this empty-string sentinel instead of a second
/// schema shape.
pub const NO_SUBTYPE: &str = "";

/// The per-subtype mapping of output field names to rules.
///
/// `IndexMap` keeps insertion order, so the declared field order survives
/// persistence round-trips and drives the order fields appear in output;
/// `insert` on an existing key replaces the value in place.
pub type FieldRules = IndexMap<String, Rule>;

/// The complete formula table: window type → subtype → output field → rule.
///
/// Order is significant at every level; in particular the declared field
/// order is the order fields appear in evaluation output. The table is a
/// plain value: sessions hold one copy, edit a clone, and persist the whole
/// table on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    table: IndexMap<String, IndexMap<String, FieldRules>>,
}

impl RuleSet {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Window type names in declared order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    /// Subtype names under a type, in declared order. `None` when the type
    /// is absent.
    pub fn subtypes(&self, window_type: &str) -> Option<impl Iterator<Item = &str>> {
        self.table
            .get(window_type)
            .map(|subtypes| subtypes.keys().map(String::as_str))
    }

    /// The field → rule mapping for a (type, subtype) pair. `None` when
    /// either level is absent.
    pub fn rules(&self, window_type: &str, subtype: &str) -> Option<&FieldRules> {
        self.table.get(window_type)?.get(subtype)
    }

    /// Look up a single rule.
    pub fn rule(&self, window_type: &str, subtype: &str, field: &str) -> Option<&Rule> {
        self.rules(window_type, subtype)?.get(field)
    }

    /// Replace (or add) one field's rule as a whole record, creating the
    /// type and subtype levels if needed. Writing the full record keeps a
    /// rule's source, operator, and offset consistent even when an edit
    /// touched only one of them.
    pub fn set_rule(
        &mut self,
        window_type: impl Into<String>,
        subtype: impl Into<String>,
        field: impl Into<String>,
        rule: Rule,
    ) {
        self.table
            .entry(window_type.into())
            .or_default()
            .entry(subtype.into())
            .or_default()
            .insert(field.into(), rule);
    }
}
