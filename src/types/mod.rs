//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `currency`: Denominations, tables and currency definitions
//! - `transaction`: The validated owed/paid transaction
//! - `decomposition`: Structured change results
//! - `error`: Error types for the change maker

pub mod currency;
pub mod decomposition;
pub mod error;
pub mod transaction;

pub use currency::{CurrencyDefinition, Denomination, DenominationTable, MinorUnits};
pub use decomposition::{ChangeLine, Decomposition};
pub use error::{ChangeError, DefinitionError};
pub use transaction::Transaction;
