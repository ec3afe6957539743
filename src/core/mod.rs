//! Core business logic module
//!
//! This module contains the core change-making components:
//! - `registry` - Built-in and custom currency storage
//! - `decompose` - Minimal and randomized decomposition algorithms
//! - `format` - Denomination phrase formatting
//! - `evaluator` - Transaction evaluation orchestration

pub mod decompose;
pub mod evaluator;
pub mod format;
pub mod registry;

pub use decompose::Strategy;
pub use evaluator::Evaluator;
pub use registry::CurrencyRegistry;
