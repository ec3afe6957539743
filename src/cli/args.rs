use clap::Parser;
use std::path::PathBuf;

/// Compute change denominations for batches of transactions
#[derive(Parser, Debug)]
#[command(name = "change-maker")]
#[command(about = "Compute change denominations for batches of transactions", long_about = None)]
pub struct CliArgs {
    /// Input batch file with one owed,paid pair per line
    #[arg(value_name = "INPUT", help = "Path to the input batch file")]
    pub input_file: PathBuf,

    /// Currency code applied to every transaction in the batch
    #[arg(
        long = "currency",
        value_name = "CODE",
        default_value = "USD",
        help = "Currency code for the batch (case-insensitive)"
    )]
    pub currency: String,

    /// Custom currency definition files to register before processing
    #[arg(
        long = "currency-file",
        value_name = "FILE",
        help = "Custom currency definition file to register (repeatable)"
    )]
    pub currency_files: Vec<PathBuf>,

    /// Destination for result lines
    #[arg(
        short = 'o',
        long = "output",
        value_name = "OUT",
        help = "Write results to this file instead of stdout"
    )]
    pub output: Option<PathBuf>,
}
