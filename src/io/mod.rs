//! I/O module
//!
//! Handles batch file reading and currency definition parsing.
//!
//! # Components
//!
//! - `batch_format` - Batch line shape (record conversion)
//! - `batch_reader` - Streaming batch file reader with iterator interface
//! - `definition_format` - Custom currency definition parser

pub mod batch_format;
pub mod batch_reader;
pub mod definition_format;

pub use batch_format::{convert_record, TransactionInput};
pub use batch_reader::BatchReader;
pub use definition_format::parse_definition;
