//! Batch line format handling
//!
//! Defines the wire shape of a batch transaction line and the conversion
//! from a raw CSV record into a [`TransactionInput`].
//!
//! # Line Format
//!
//! Each non-blank line carries exactly two comma-separated fields:
//!
//! ```text
//! <owed>,<paid>
//! ```
//!
//! Both fields are kept as text at this layer. Numeric validation happens
//! later, when the evaluator parses the amounts, so that a malformed amount
//! surfaces as an amount error rather than a line format error.
//!
//! # Design
//!
//! Conversion is a pure function over an already-read record. Reading and
//! iteration concerns live in the batch_reader module; this module only
//! decides whether a record has the right shape and deserializes it.

use crate::types::ChangeError;
use csv::StringRecord;
use serde::Deserialize;

/// Expected number of fields on a batch transaction line
pub const FIELDS_PER_LINE: usize = 2;

/// Raw transaction line as read from a batch file
///
/// Amounts stay as strings here. The evaluator owns numeric parsing,
/// including rounding and range checks, so this type makes no attempt
/// to interpret the values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionInput {
    /// Amount owed, as written in the file
    pub owed: String,
    /// Amount paid, as written in the file
    pub paid: String,
}

/// Convert a raw CSV record into a TransactionInput
///
/// Validates that the record has exactly two fields before deserializing.
/// The `line` argument is the physical line number of the record in the
/// source file, used for error reporting.
///
/// # Arguments
///
/// * `record` - Raw CSV record, already trimmed by the reader
/// * `line` - Physical line number of the record (1-based)
///
/// # Returns
///
/// * `Ok(TransactionInput)` if the record has exactly two fields
/// * `Err(ChangeError::InvalidLineFormat)` otherwise
pub fn convert_record(record: &StringRecord, line: u64) -> Result<TransactionInput, ChangeError> {
    if record.len() != FIELDS_PER_LINE {
        return Err(ChangeError::invalid_line_format(line));
    }

    record
        .deserialize(None)
        .map_err(|_| ChangeError::invalid_line_format(line))
}
