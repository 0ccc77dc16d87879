//! Staged editing of the formula table.
//!
//! Edits made through the configuration form are staged on a working copy
//! and only become visible to readers when committed, as a single
//! replace-and-persist step. Discarding a session leaves the original table
//! untouched.

use anyhow::Result;

use wincalc_model::{Rule, RuleSet};

use crate::repository::FormulaRepository;

/// An editing session over a working copy of the formula table.
#[derive(Debug, Clone)]
pub struct EditSession {
    original: RuleSet,
    working: RuleSet,
}

impl EditSession {
    /// Start a session from the table currently in use.
    pub fn begin(rule_set: RuleSet) -> Self {
        Self {
            working: rule_set.clone(),
            original: rule_set,
        }
    }

    /// The staged table, including uncommitted edits.
    pub fn working(&self) -> &RuleSet {
        &self.working
    }

    /// True when the working copy differs from the table the session
    /// started from.
    pub fn is_dirty(&self) -> bool {
        self.working != self.original
    }

    /// Stage a whole-record replacement of one field's rule.
    pub fn set_rule(
        &mut self,
        window_type: impl Into<String>,
        subtype: impl Into<String>,
        field: impl Into<String>,
        rule: Rule,
    ) {
        self.working.set_rule(window_type, subtype, field, rule);
    }

    /// Persist the staged table and return it as the new session table.
    pub fn commit(self, repository: &FormulaRepository) -> Result<RuleSet> {
        repository.save(&self.working)?;
        Ok(self.working)
    }

    /// Drop staged edits and return the table the session started from.
    pub fn discard(self) -> RuleSet {
        self.original
    }
}
