//! Persistence for the window formula table.
//!
//! One serialized [`wincalc_model::RuleSet`] lives under a schema-versioned
//! key; loading falls back to the compiled-in defaults when nothing is
//! persisted or the persisted data is malformed. Edits are staged in an
//! [`EditSession`] and committed as an atomic whole-table replace.

pub mod error;
pub mod repository;
pub mod session;

pub use error::ConfigError;
pub use repository::FormulaRepository;
pub use session::EditSession;
