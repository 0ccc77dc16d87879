//! File-backed store for the formula table.
//!
//! The whole table is persisted as one JSON value under the schema-versioned
//! key from `wincalc-standards`; saving always writes the full table, never a
//! diff. There is no cross-process locking: concurrent writers overwrite
//! each other, last write wins (single-operator tool).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use wincalc_model::RuleSet;
use wincalc_standards::{SCHEMA_KEY, default_rule_set};

use crate::error::ConfigError;

/// Repository holding the single persisted formula table.
#[derive(Debug, Clone)]
pub struct FormulaRepository {
    /// Directory the store file lives in.
    base_dir: PathBuf,
}

impl FormulaRepository {
    /// Create a repository rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).with_context(|| {
            format!(
                "Failed to create formula repository: {}",
                base_dir.display()
            )
        })?;
        Ok(Self { base_dir })
    }

    /// Get the base directory of this repository.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the store file for the current schema version.
    pub fn store_path(&self) -> PathBuf {
        self.base_dir.join(format!("{SCHEMA_KEY}.json"))
    }

    /// True when a persisted table exists for the current schema version.
    pub fn exists(&self) -> bool {
        self.store_path().exists()
    }

    /// Load the formula table for a session.
    ///
    /// Returns the persisted table when present and valid; otherwise the
    /// compiled-in defaults. Malformed persisted data is logged and replaced
    /// by the defaults rather than failing the session.
    pub fn load(&self) -> RuleSet {
        match self.try_load() {
            Ok(Some(rule_set)) => rule_set,
            Ok(None) => default_rule_set(),
            Err(err) => {
                tracing::warn!(
                    path = %self.store_path().display(),
                    error = %err,
                    "persisted formula table unreadable, using built-in defaults"
                );
                default_rule_set()
            }
        }
    }

    /// Strict load: `Ok(None)` when nothing is persisted, an error when the
    /// persisted data cannot be read or parsed.
    pub fn try_load(&self) -> std::result::Result<Option<RuleSet>, ConfigError> {
        let path = self.store_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        let rule_set: RuleSet = serde_json::from_str(&contents)?;
        Ok(Some(rule_set))
    }

    /// Persist the full formula table under the versioned key.
    pub fn save(&self, rule_set: &RuleSet) -> Result<PathBuf> {
        let path = self.store_path();
        let json = serde_json::to_string_pretty(rule_set)
            .context("Failed to serialize formula table")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write formula table to {}", path.display()))?;
        tracing::debug!(path = %path.display(), "formula table saved");
        Ok(path)
    }

    /// Discard any persisted table and return the compiled-in defaults.
    pub fn reset(&self) -> Result<RuleSet> {
        let path = self.store_path();
        if path.exists() {
            fs::remove_file(&path).with_context(|| {
                format!("Failed to delete persisted formulas: {}", path.display())
            })?;
            tracing::debug!(path = %path.display(), "persisted formula table removed");
        }
        Ok(default_rule_set())
    }
}
