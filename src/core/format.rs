//! Denomination phrase formatting
//!
//! This module renders (name, count) pairs as English phrases:
//! "3 quarters", "1 penny", "50 cent". Three rule groups apply in
//! priority order:
//!
//! 1. Irregular names with their own plural form (penny/pennies,
//!    cent/cents, peso/pesos). The singular keeps the count prefix
//!    ("1 penny").
//! 2. Compound `<value>_<unit>` coin names for euro, cent and peso.
//!    The singular drops the count prefix ("50 cent", "1 euro"); the
//!    plural is "<count> <value> <unit>s" ("3 50 cents").
//! 3. Everything else: "1 <name>" or "<count> <name>s".
//!
//! Formatting is one-way. The pipeline carries structured
//! (name, count) pairs until the final join, so no code ever maps a
//! phrase back to its denomination.

use crate::types::Decomposition;

/// Irregular singular/plural pairs, checked before any other rule
const IRREGULAR_PLURALS: [(&str, &str); 3] =
    [("penny", "pennies"), ("cent", "cents"), ("peso", "pesos")];

/// Units that make a `<value>_<unit>` name a compound coin name
const COMPOUND_UNITS: [&str; 3] = ["euro", "cent", "peso"];

/// Render one denomination count as an English phrase
///
/// # Arguments
///
/// * `name` - Canonical denomination name ("quarter", "50_cent")
/// * `count` - Number of units (expected >= 1)
///
/// # Returns
///
/// The formatted phrase, e.g. "3 quarters" or "50 cent"
pub fn format_denomination(name: &str, count: i64) -> String {
    if let Some((singular, plural)) = IRREGULAR_PLURALS
        .iter()
        .find(|(singular, _)| *singular == name)
    {
        let form = if count == 1 { singular } else { plural };
        return format!("{} {}", count, form);
    }

    if let Some((value, unit)) = name.split_once('_') {
        if COMPOUND_UNITS.contains(&unit) {
            return if count == 1 {
                format!("{} {}", value, unit)
            } else {
                format!("{} {} {}s", count, value, unit)
            };
        }
    }

    if count == 1 {
        format!("1 {}", name)
    } else {
        format!("{} {}s", count, name)
    }
}

/// Render a whole decomposition as a comma-separated phrase
///
/// Lines are formatted in order and joined with ", ". An empty
/// decomposition renders as the empty string.
pub fn render_decomposition(decomposition: &Decomposition) -> String {
    decomposition
        .lines
        .iter()
        .map(|line| format_denomination(&line.name, line.count))
        .collect::<Vec<_>>()
        .join(", ")
}
