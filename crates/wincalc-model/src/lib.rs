//! Data model for window dimension calculations.
//!
//! Measurements are base-8 mixed-radix values ([`Dimension`]); the
//! configurable formula table ([`RuleSet`]) maps window type → subtype →
//! output field to a [`Rule`] that derives one construction dimension from
//! either the Length or the Height input.

pub mod dimension;
pub mod enums;
pub mod error;
pub mod rule;
pub mod ruleset;

pub use dimension::{Dimension, SUB_RADIX};
pub use enums::{Category, Operator, Source};
pub use error::ModelError;
pub use rule::Rule;
pub use ruleset::{FieldRules, NO_SUBTYPE, RuleSet};
