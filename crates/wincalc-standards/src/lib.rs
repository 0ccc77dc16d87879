//! Built-in default formula table.
//!
//! Ships the reference rule table for the supported window systems. Each
//! subtype derives four output fields (shutter and glass, height and length)
//! from the two input measurements. A persisted table, when present and
//! valid, takes precedence over these defaults; `reset` returns to them.

use wincalc_model::{Operator, Rule, RuleSet, Source};

/// Storage key for the persisted formula table.
///
/// The `v3` suffix versions the schema shape: bumping it on structural
/// changes keeps stale tables from older releases from being resurrected.
pub const SCHEMA_KEY: &str = "windowCalc_formulas_v3";

/// Default rule rows per (type, subtype): the four standard output fields
/// as (field, source, op, offset units, offset subunits).
type RuleRow = (&'static str, Source, Operator, i64, i64);

const SHUTTER_HEIGHT: &str = "Shutter Height";
const SHUTTER_LENGTH: &str = "Shutter Length";
const GLASS_HEIGHT: &str = "Glass Height";
const GLASS_LENGTH: &str = "Glass Length";

fn standard_rows(
    shutter_height: (Operator, i64, i64),
    shutter_length: (Operator, i64, i64),
    glass_height: (Operator, i64, i64),
    glass_length: (Operator, i64, i64),
) -> [RuleRow; 4] {
    [
        (
            SHUTTER_HEIGHT,
            Source::Height,
            shutter_height.0,
            shutter_height.1,
            shutter_height.2,
        ),
        (
            SHUTTER_LENGTH,
            Source::Length,
            shutter_length.0,
            shutter_length.1,
            shutter_length.2,
        ),
        (
            GLASS_HEIGHT,
            Source::Height,
            glass_height.0,
            glass_height.1,
            glass_height.2,
        ),
        (
            GLASS_LENGTH,
            Source::Length,
            glass_length.0,
            glass_length.1,
            glass_length.2,
        ),
    ]
}

/// Build the compiled-in default formula table.
///
/// Returns a fresh value each call; callers own and may edit their copy.
pub fn default_rule_set() -> RuleSet {
    use Operator::{Add, Subtract};

    let mut rs = RuleSet::new();
    let mut push = |window_type: &str, subtype: &str, rows: [RuleRow; 4]| {
        for (field, source, op, units, subs) in rows {
            rs.set_rule(window_type, subtype, field, Rule::new(source, op, units, subs));
        }
    };

    push(
        "40mm",
        "2 Track",
        standard_rows(
            (Subtract, 1, 5),
            (Subtract, 0, 6),
            (Subtract, 2, 4),
            (Add, 0, 5),
        ),
    );
    // Shutter length offset is one whole unit (historically written as 0u 8s).
    push(
        "40mm",
        "3 Track",
        standard_rows(
            (Subtract, 1, 5),
            (Subtract, 1, 0),
            (Subtract, 2, 4),
            (Add, 0, 5),
        ),
    );
    push(
        "40mm",
        "4 Track",
        standard_rows(
            (Subtract, 1, 5),
            (Subtract, 4, 4),
            (Subtract, 2, 4),
            (Add, 0, 5),
        ),
    );
    push(
        "40mm",
        "2 Track 4 Shutter",
        standard_rows(
            (Subtract, 1, 5),
            (Subtract, 1, 1),
            (Subtract, 2, 4),
            (Add, 0, 5),
        ),
    );

    push(
        "60mm",
        "2 Track",
        standard_rows(
            (Subtract, 1, 5),
            (Add, 0, 6),
            (Subtract, 4, 1),
            (Subtract, 4, 1),
        ),
    );
    push(
        "60mm",
        "3 Track",
        standard_rows(
            (Subtract, 1, 5),
            (Add, 0, 0),
            (Subtract, 4, 1),
            (Subtract, 4, 1),
        ),
    );
    push(
        "60mm",
        "4 Track",
        standard_rows(
            (Subtract, 1, 5),
            (Add, 0, 0),
            (Subtract, 4, 1),
            (Subtract, 4, 1),
        ),
    );
    push(
        "60mm",
        "2 Track 4 Shutter",
        standard_rows(
            (Subtract, 1, 5),
            (Add, 0, 0),
            (Subtract, 4, 1),
            (Subtract, 4, 1),
        ),
    );

    push(
        "65mm (Domal)",
        "2 Track",
        standard_rows(
            (Subtract, 2, 6),
            (Subtract, 0, 3),
            (Subtract, 4, 1),
            (Subtract, 4, 1),
        ),
    );
    push(
        "65mm (Domal)",
        "3 Track",
        standard_rows(
            (Subtract, 2, 6),
            (Add, 2, 2),
            (Subtract, 4, 1),
            (Subtract, 4, 1),
        ),
    );
    push(
        "65mm (Domal)",
        "4 Track",
        standard_rows(
            (Subtract, 2, 6),
            (Add, 4, 6),
            (Subtract, 4, 1),
            (Subtract, 4, 1),
        ),
    );
    push(
        "65mm (Domal)",
        "2 Track 4 Shutter",
        standard_rows(
            (Subtract, 2, 6),
            (Add, 0, 0),
            (Subtract, 4, 1),
            (Subtract, 4, 1),
        ),
    );

    push(
        "Openable (P - Pipe)",
        "40mm",
        standard_rows(
            (Subtract, 1, 2),
            (Subtract, 4, 3),
            (Subtract, 3, 4),
            (Subtract, 0, 0),
        ),
    );
    push(
        "Openable (P - Pipe)",
        "60mm",
        standard_rows(
            (Subtract, 1, 2),
            (Subtract, 1, 3),
            (Subtract, 5, 5),
            (Subtract, 5, 7),
        ),
    );

    push(
        "Openable (R - 40)",
        "Single Shutter",
        standard_rows(
            (Subtract, 1, 2),
            (Subtract, 1, 5),
            (Subtract, 0, 3),
            (Subtract, 0, 3),
        ),
    );
    push(
        "Openable (R - 40)",
        "Double Shutter",
        standard_rows(
            (Subtract, 1, 2),
            (Subtract, 1, 7),
            (Subtract, 0, 3),
            (Subtract, 0, 3),
        ),
    );

    rs
}
