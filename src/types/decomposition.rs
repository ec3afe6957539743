//! Change decomposition result types for the change maker
//!
//! This module defines the structured result the decomposition engine
//! produces. The pipeline carries (name, count) pairs end to end and
//! only renders text at the final join, so nothing ever needs to parse
//! a formatted phrase back apart.

use serde::Serialize;

use super::currency::{DenominationTable, MinorUnits};

/// One denomination line of a change decomposition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeLine {
    /// Canonical denomination name ("quarter", "50_cent")
    pub name: String,

    /// Number of units handed back (always >= 1)
    pub count: i64,
}

/// An ordered change decomposition
///
/// Lines follow the denomination table's descending order. The same
/// denomination can appear on two lines when the randomized corrective
/// step emits an extra line for a denomination the shuffled pass
/// already used; the stable sort keeps the corrective line second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Decomposition {
    /// The decomposition's lines, in table order
    pub lines: Vec<ChangeLine>,
}

impl Decomposition {
    /// Whether the decomposition has no lines
    ///
    /// This happens when the change is smaller than every denomination
    /// in the table (possible for tables without a unit denomination).
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of count times value across all lines, resolved against `table`
    ///
    /// Lines whose name is not in the table contribute nothing. For
    /// tables with a unit denomination this always equals the change
    /// amount the decomposition was built from.
    pub fn total_minor_units(&self, table: &DenominationTable) -> MinorUnits {
        self.lines
            .iter()
            .map(|line| table.value_of(&line.name).unwrap_or(0) * line.count)
            .sum()
    }
}
