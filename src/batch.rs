//! Batch transaction processing
//!
//! Orchestrates evaluation of a whole batch file by coordinating the
//! BatchReader (for input) and the Evaluator (for business logic).
//!
//! # Design
//!
//! Processing focuses on orchestration, delegating:
//! - Line reading and shape checks to `BatchReader` (iterator interface)
//! - Transaction evaluation to `Evaluator` (business logic)
//!
//! Output is one line per non-blank input line, in input order. A line
//! that fails - bad shape, bad amount, unknown currency - produces an
//! `Error: {message}` line in the output and never aborts the batch.
//!
//! # Memory Efficiency
//!
//! `process_path` streams: it reads one line, evaluates it, writes the
//! result, and moves on. Memory usage is constant in the file size.

use crate::core::Evaluator;
use crate::io::{BatchReader, TransactionInput};
use crate::types::ChangeError;
use std::io::Write;
use std::path::Path;
use tracing::warn;

/// Process a batch file, writing one result line per transaction
///
/// # Arguments
///
/// * `evaluator` - Evaluator holding the currency registry
/// * `input_path` - Path to the batch transaction file
/// * `currency_code` - Currency applied to every line of the batch
/// * `output` - Destination for result lines
///
/// # Returns
///
/// * `Ok(())` if the batch was read to the end
/// * `Err(ChangeError)` only for fatal problems: a missing input file
///   or a failed write to `output`
///
/// # Error Handling
///
/// Per-line failures are written into the output as `Error: {message}`
/// lines and processing continues with the next line.
pub fn process_path(
    evaluator: &Evaluator,
    input_path: &Path,
    currency_code: &str,
    output: &mut dyn Write,
) -> Result<(), ChangeError> {
    let reader = BatchReader::open(input_path)?;

    for item in reader {
        writeln!(output, "{}", render_item(evaluator, item, currency_code))?;
    }

    Ok(())
}

/// Process batch content held in memory
///
/// Same per-line semantics as [`process_path`], applied to a string.
/// Result lines are joined with '\n' and carry no trailing newline;
/// empty content produces an empty string.
pub fn process_content(evaluator: &Evaluator, content: &str, currency_code: &str) -> String {
    BatchReader::from_reader(content.as_bytes())
        .map(|item| render_item(evaluator, item, currency_code))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Turn one reader item into its output line
fn render_item(
    evaluator: &Evaluator,
    item: Result<TransactionInput, ChangeError>,
    currency_code: &str,
) -> String {
    let result =
        item.and_then(|input| evaluator.evaluate(&input.owed, &input.paid, currency_code));

    match result {
        Ok(line) => line,
        Err(e) => {
            warn!(error = %e, "Transaction rejected");
            format!("Error: {}", e)
        }
    }
}
