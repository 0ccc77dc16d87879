//! Pure evaluation of the formula table against a measurement pair.
//!
//! Consumes a [`wincalc_model::RuleSet`] and two [`wincalc_model::Dimension`]
//! inputs, producing ordered, categorized output fields with per-field
//! feasibility flags.

pub mod evaluator;

pub use evaluator::{CategoryGroup, EvalError, Evaluation, Feasibility, FieldResult, evaluate};
