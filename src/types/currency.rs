//! Currency-related types for the change maker
//!
//! This module defines the currency data model: minor-unit amounts,
//! denominations, ordered denomination tables, and complete currency
//! definitions. All engine arithmetic is integral in minor units once
//! amounts are parsed.

use serde::Serialize;

/// Monetary amount in minor units (cents, centavos, ...)
///
/// Signed 64-bit: large enough for any realistic till, and subtraction
/// never needs a separate unsigned-underflow path.
pub type MinorUnits = i64;

/// A single denomination of a currency
///
/// The name is the canonical identifier the formatter pluralizes
/// ("quarter", "50_cent"); the value is in minor units and always
/// positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Denomination {
    /// Canonical denomination name
    pub name: String,

    /// Value in minor units (always > 0)
    pub value: MinorUnits,
}

impl Denomination {
    /// Create a denomination from a name and a minor-unit value
    pub fn new(name: &str, value: MinorUnits) -> Self {
        Denomination {
            name: name.to_string(),
            value,
        }
    }
}

/// Ordered set of denominations for one currency
///
/// The table is always sorted in strictly descending value order; the
/// constructor sorts whatever it is given. Uniqueness and positivity of
/// values are guaranteed by the producers (built-in tables and the
/// definition parser), not re-checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DenominationTable {
    entries: Vec<Denomination>,
}

impl DenominationTable {
    /// Build a table, sorting the entries into descending value order
    pub fn new(mut entries: Vec<Denomination>) -> Self {
        entries.sort_by(|a, b| b.value.cmp(&a.value));
        DenominationTable { entries }
    }

    /// All denominations, largest value first
    pub fn entries(&self) -> &[Denomination] {
        &self.entries
    }

    /// Number of denominations in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no denominations
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The denomination with the smallest value, if any
    ///
    /// Used by the randomized decomposition's corrective step.
    pub fn smallest(&self) -> Option<&Denomination> {
        self.entries.last()
    }

    /// Minor-unit value of the first denomination with the given name
    pub fn value_of(&self, name: &str) -> Option<MinorUnits> {
        self.entries
            .iter()
            .find(|denomination| denomination.name == name)
            .map(|denomination| denomination.value)
    }
}

/// A complete currency definition
///
/// Codes are canonical uppercase identifiers; lookup is case-insensitive
/// but storage is not. Built-in definitions are seeded into every
/// registry and never mutated; custom definitions come from the
/// `key=value` definition format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrencyDefinition {
    /// Canonical uppercase currency code ("USD")
    pub code: String,

    /// Human-readable display name ("US Dollar")
    pub name: String,

    /// Display symbol, 1-3 visible characters ("$")
    pub symbol: String,

    /// The currency's denomination table, descending by value
    pub denominations: DenominationTable,
}
