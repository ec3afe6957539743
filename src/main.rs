//! Change Maker CLI
//!
//! Command-line interface for computing change denominations from batch
//! transaction files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- transactions.txt
//! cargo run -- --currency EUR transactions.txt
//! cargo run -- --currency-file gemstone.txt --currency GEM transactions.txt
//! cargo run -- -o results.txt transactions.txt
//! ```
//!
//! The program evaluates each `owed,paid` line of the input file in the
//! selected currency and prints one result line per transaction. Custom
//! currencies can be registered from definition files before processing.
//!
//! # Exit Codes
//!
//! - 0: Success (per-line evaluation errors do not fail the run)
//! - 1: Fatal error (missing input file, invalid definition file, etc.)

use change_maker::batch;
use change_maker::cli;
use change_maker::core::Evaluator;
use change_maker::types::ChangeError;
use std::fs::File;
use std::io::Write;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so result lines on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("change_maker=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Register custom currencies before touching the batch
    let mut evaluator = Evaluator::new();
    for path in &args.currency_files {
        let registered = std::fs::read_to_string(path)
            .map_err(ChangeError::from)
            .and_then(|text| evaluator.register_currency(&text));

        match registered {
            Ok(code) => info!(file = %path.display(), %code, "Registered custom currency"),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
    }

    // Results go to the chosen file, or stdout by default
    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(file),
            Err(e) => {
                eprintln!("Error: {}", ChangeError::from(e));
                process::exit(1);
            }
        },
        None => Box::new(std::io::stdout()),
    };

    if let Err(e) = batch::process_path(&evaluator, &args.input_file, &args.currency, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
