use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Spreadsheet with one profile link per row (xlsx, xls, ods or csv)
    pub input: PathBuf,

    /// Name of the column holding the profile links
    #[arg(long, short = 'c', env = "SQUADSTATS_COLUMN")]
    pub column: Option<String>,

    /// Worksheet to read (defaults to the first one)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Where to write the augmented sheet (.xlsx or .csv)
    #[arg(long, short = 'o', default_value = "sheet_games_and_minutes.xlsx")]
    pub output: PathBuf,

    /// Pause between two rows, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub delay_ms: u64,

    /// Timeout of a single page fetch, in seconds
    #[arg(long, default_value_t = 15)]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, env = "SQUADSTATS_USER_AGENT", default_value = "Mozilla/5.0")]
    pub user_agent: String,

    /// JSON file overriding the structural selectors
    #[arg(long, env = "SQUADSTATS_SELECTORS")]
    pub selectors: Option<PathBuf>,

    /// Print the column names of the input and exit
    #[arg(long)]
    pub list_columns: bool,

    /// Print the first N rows of the input and exit
    #[arg(long, value_name = "N", num_args = 0..=1, default_missing_value = "5")]
    pub preview: Option<usize>,

    /// Do not print the results table when done
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
