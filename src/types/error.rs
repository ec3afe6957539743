//! Error types for the change maker
//!
//! This module defines all error types that can occur while evaluating
//! transactions and registering currencies. Errors are designed to be
//! descriptive and user-friendly: the batch processor and the CLI render
//! them as `Error: {display}` lines.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Line Format Errors**: Batch lines that do not split into an
//!   `owed,paid` pair
//! - **Evaluation Errors**: Unparseable amounts, insufficient payment,
//!   unknown currency codes
//! - **Definition Errors**: Invalid custom currency definition files

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::currency::MinorUnits;

/// Main error type for the change maker
///
/// This enum represents all possible errors that can occur during
/// evaluation and batch processing. Each variant includes relevant
/// context to help diagnose and resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChangeError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    ///
    /// This is typically a fatal error (file permissions, disk full, etc.).
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// An owed or paid amount could not be parsed as a decimal number
    ///
    /// Negative amounts and amounts too large for 64-bit minor units are
    /// reported the same way. This is a recoverable error - the
    /// transaction is rejected and batch processing continues.
    #[error("Invalid number format: '{input}'")]
    InvalidNumberFormat {
        /// The input text that failed to parse
        input: String,
    },

    /// The amount paid is less than the amount owed
    ///
    /// This is a recoverable error - no change is computed for the
    /// transaction.
    #[error("Insufficient payment: paid {paid}, owed {owed}")]
    InsufficientPayment {
        /// Amount owed
        owed: Decimal,
        /// Amount paid
        paid: Decimal,
    },

    /// The requested currency code is not registered
    ///
    /// The message enumerates every supported code so callers can
    /// correct the request. This is a recoverable error.
    #[error("Unsupported currency '{code}'. Supported: {supported}")]
    UnsupportedCurrency {
        /// The code that failed to resolve
        code: String,
        /// Comma-separated list of supported codes
        supported: String,
    },

    /// A batch line did not split into exactly one `owed,paid` pair
    ///
    /// This is a recoverable error - the line is reported in the output
    /// and processing continues with the next line.
    #[error("Invalid line format on line {line}")]
    InvalidLineFormat {
        /// Physical line number in the input (1-based)
        line: u64,
    },

    /// A custom currency definition failed validation
    ///
    /// This is fatal for the registration attempt but never affects
    /// already-registered currencies.
    #[error("Invalid currency definition: {0}")]
    InvalidDefinition(#[from] DefinitionError),
}

/// Validation failures for the custom currency definition format
///
/// Each variant is one distinct rule of the `key=value` definition
/// format, so callers can tell exactly which rule was violated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DefinitionError {
    /// A required key never appeared in the definition
    #[error("missing required field {field}")]
    MissingField {
        /// The absent key (CURRENCY_CODE, CURRENCY_NAME or CURRENCY_SYMBOL)
        field: &'static str,
    },

    /// CURRENCY_CODE is empty, too long, or contains invalid characters
    #[error("invalid currency code '{value}': expected 1-10 alphanumeric or underscore characters")]
    InvalidCode {
        /// The rejected code value
        value: String,
    },

    /// CURRENCY_NAME is empty or longer than 50 characters
    #[error("invalid currency name: expected 1-50 characters, got {length}")]
    InvalidName {
        /// Length of the rejected name
        length: usize,
    },

    /// CURRENCY_SYMBOL is empty or longer than 3 characters
    #[error("invalid currency symbol '{value}': expected 1-3 characters")]
    InvalidSymbol {
        /// The rejected symbol value
        value: String,
    },

    /// No denomination line survived validation
    #[error("no valid denominations defined")]
    NoDenominations,

    /// Two denominations share the same minor-unit value
    #[error("duplicate denomination value {value}")]
    DuplicateValue {
        /// The duplicated minor-unit value
        value: MinorUnits,
    },
}

// Conversion from io::Error to ChangeError
impl From<std::io::Error> for ChangeError {
    fn from(error: std::io::Error) -> Self {
        ChangeError::IoError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ChangeError {
    /// Create an InvalidNumberFormat error
    pub fn invalid_number_format(input: &str) -> Self {
        ChangeError::InvalidNumberFormat {
            input: input.to_string(),
        }
    }

    /// Create an InsufficientPayment error
    pub fn insufficient_payment(owed: Decimal, paid: Decimal) -> Self {
        ChangeError::InsufficientPayment { owed, paid }
    }

    /// Create an UnsupportedCurrency error listing the given codes
    pub fn unsupported_currency(code: &str, supported: &[String]) -> Self {
        ChangeError::UnsupportedCurrency {
            code: code.to_string(),
            supported: supported.join(", "),
        }
    }

    /// Create an InvalidLineFormat error for a 1-based line number
    pub fn invalid_line_format(line: u64) -> Self {
        ChangeError::InvalidLineFormat { line }
    }
}
