//! Change Maker Library
//! # Overview
//!
//! This library computes change for cash transactions, decomposing the
//! amount due back into named denominations of a selected currency.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, DenominationTable, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::evaluator`] - Single-transaction evaluation orchestration
//!   - [`core::registry`] - Currency registration and lookup
//!   - [`core::decompose`] - Change decomposition strategies
//!   - [`core::format`] - Denomination phrase rendering
//! - [`io`] - Batch file reading and currency definition parsing
//! - [`batch`] - Whole-file batch processing
//!
//! # Decomposition Strategies
//!
//! Two strategies split a change amount into denominations:
//!
//! - **Minimal**: Greedy largest-first pass producing the fewest pieces
//! - **Randomized**: A valid but shuffled decomposition, used for
//!   transactions whose owed amount in minor units divides by three
//!
//! # Currencies
//!
//! USD, EUR and COP are built in. Custom currencies are registered from
//! `key=value` definition files; codes colliding with existing ones are
//! disambiguated with a numeric suffix (`USD` becomes `USD_1`).

// Module declarations
pub mod batch;
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{CurrencyRegistry, Evaluator, Strategy};
pub use io::{parse_definition, BatchReader, TransactionInput};
pub use types::{
    ChangeError, ChangeLine, CurrencyDefinition, Decomposition, DefinitionError, Denomination,
    DenominationTable, MinorUnits, Transaction,
};
