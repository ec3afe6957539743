//! Streaming reader for batch transaction files
//!
//! Provides an iterator over transaction lines from a batch file.
//! Delegates line shape concerns to the batch_format module.
//!
//! # Design
//!
//! The BatchReader uses csv::Reader to read records sequentially without
//! loading the entire file into memory. Lines are headerless, so every
//! physical line is a candidate record. Blank lines (including lines of
//! only whitespace) are skipped but still advance the line counter, so
//! error messages always name the physical line in the file.
//!
//! # Iterator Interface
//!
//! BatchReader implements the Iterator trait, yielding
//! Result<TransactionInput, ChangeError> for each line:
//!
//! ```no_run
//! use change_maker::io::BatchReader;
//! use std::path::Path;
//!
//! let reader = BatchReader::open(Path::new("transactions.txt")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(input) => println!("owed {} paid {}", input.owed, input.paid),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! - Fatal errors (file not found) are returned from `open()`
//! - Per-line format errors are yielded as Err variants so the caller
//!   can report them and keep going
//! - I/O failures mid-stream are yielded as ChangeError::IoError

use crate::io::batch_format::{convert_record, TransactionInput};
use crate::types::ChangeError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Streaming batch file reader
///
/// Yields one item per non-blank line. The record buffer is reused
/// across iterations, so memory usage stays constant regardless of
/// file size.
#[derive(Debug)]
pub struct BatchReader<R> {
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl BatchReader<File> {
    /// Open a batch file for streaming iteration
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the batch transaction file
    ///
    /// # Returns
    ///
    /// * `Ok(BatchReader)` if the file opened successfully
    /// * `Err(ChangeError::FileNotFound)` if the path does not exist
    /// * `Err(ChangeError::IoError)` for any other open failure
    pub fn open(path: &Path) -> Result<Self, ChangeError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ChangeError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ChangeError::from(e),
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> BatchReader<R> {
    /// Create a BatchReader over any byte source
    ///
    /// The reader is configured for the batch line format:
    /// - No header row; every line is data
    /// - Whitespace trimmed from all fields
    /// - Flexible field counts, so shape errors are reported per line
    ///   instead of aborting the stream
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(source);

        Self {
            reader,
            record: StringRecord::new(),
        }
    }
}

impl<R: Read> Iterator for BatchReader<R> {
    type Item = Result<TransactionInput, ChangeError>;

    /// Get the next transaction line from the batch file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(TransactionInput))` - Line with the expected shape
    /// * `Some(Err(ChangeError))` - Malformed line, with its line number
    /// * `None` - End of input reached
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.reader.read_record(&mut self.record) {
                Ok(false) => return None,
                Ok(true) => {
                    if is_blank(&self.record) {
                        continue;
                    }
                    let line = self
                        .record
                        .position()
                        .map(|p| p.line())
                        .unwrap_or_default();
                    return Some(convert_record(&self.record, line));
                }
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or_default();
                    return Some(Err(match e.into_kind() {
                        csv::ErrorKind::Io(io_error) => ChangeError::from(io_error),
                        _ => ChangeError::invalid_line_format(line),
                    }));
                }
            }
        }
    }
}

// A whitespace-only line trims down to a single empty field. Treat it
// like the truly empty lines the csv parser already drops.
fn is_blank(record: &StringRecord) -> bool {
    record.is_empty() || (record.len() == 1 && record.get(0).map_or(true, str::is_empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary batch file for testing
    fn create_temp_batch(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn read_all(content: &str) -> Vec<Result<TransactionInput, ChangeError>> {
        BatchReader::from_reader(content.as_bytes()).collect()
    }

    #[test]
    fn test_open_reads_file() {
        let file = create_temp_batch("2.14,3.00\n5.00,5.00\n");

        let reader = BatchReader::open(file.path()).unwrap();
        let records: Vec<_> = reader.collect();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(Result::is_ok));
    }

    #[test]
    fn test_open_missing_file() {
        let result = BatchReader::open(Path::new("no_such_batch.txt"));

        assert!(matches!(result, Err(ChangeError::FileNotFound { .. })));
        assert_eq!(
            result.err().map(|e| e.to_string()),
            Some("File not found: no_such_batch.txt".to_string())
        );
    }

    #[test]
    fn test_iterates_valid_lines() {
        let records = read_all("2.14,3.00\n1.00,2.00\n");

        assert_eq!(records.len(), 2);
        let first = records[0].as_ref().unwrap();
        assert_eq!(first.owed, "2.14");
        assert_eq!(first.paid, "3.00");
        let second = records[1].as_ref().unwrap();
        assert_eq!(second.owed, "1.00");
        assert_eq!(second.paid, "2.00");
    }

    #[test]
    fn test_trims_whitespace_around_fields() {
        let records = read_all("  2.14 , 3.00  \n");

        assert_eq!(records.len(), 1);
        let input = records[0].as_ref().unwrap();
        assert_eq!(input.owed, "2.14");
        assert_eq!(input.paid, "3.00");
    }

    #[test]
    fn test_skips_blank_lines_but_keeps_numbering() {
        let records = read_all("2.13,3.00\n\n1,2,3\n1,2\n");

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert_eq!(
            records[1].as_ref().err().map(ToString::to_string),
            Some("Invalid line format on line 3".to_string())
        );
        assert!(records[2].is_ok());
    }

    #[test]
    fn test_skips_whitespace_only_lines() {
        let records = read_all("1.00,2.00\n   \n0.50,1.00\n");

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(Result::is_ok));
    }

    #[test]
    fn test_single_field_line_is_format_error() {
        let records = read_all("just one field\n");

        assert_eq!(records.len(), 1);
        assert!(matches!(
            records[0],
            Err(ChangeError::InvalidLineFormat { line: 1 })
        ));
    }

    #[test]
    fn test_continues_after_format_error() {
        let records = read_all("2.14,3.00\na,b,c,d\n5.00,10.00\n");

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(matches!(
            records[1],
            Err(ChangeError::InvalidLineFormat { line: 2 })
        ));
        assert!(records[2].is_ok());
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(read_all("").is_empty());
        assert!(read_all("\n\n\n").is_empty());
    }

    #[test]
    fn test_missing_trailing_newline() {
        let records = read_all("2.14,3.00");

        assert_eq!(records.len(), 1);
        assert!(records[0].is_ok());
    }

    #[test]
    fn test_invalid_utf8_is_format_error() {
        let bytes: &[u8] = b"\xff\xfe,3.00\n";
        let records: Vec<_> = BatchReader::from_reader(bytes).collect();

        assert_eq!(records.len(), 1);
        assert!(matches!(
            records[0],
            Err(ChangeError::InvalidLineFormat { .. })
        ));
    }

    #[test]
    fn test_malformed_amounts_pass_through() {
        // Amount validation belongs to the evaluator, not the reader
        let records = read_all("bogus,3.00\n");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].as_ref().unwrap().owed, "bogus");
    }

    #[test]
    fn test_filter_map_pattern() {
        let records: Vec<_> = BatchReader::from_reader("1,2\nbad\n3,4\n".as_bytes())
            .filter_map(Result::ok)
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].owed, "1");
        assert_eq!(records[1].owed, "3");
    }
}
