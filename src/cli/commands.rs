use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Version string including the build metadata embedded by build.rs.
pub fn long_version() -> &'static str {
    Box::leak(long_version_string().into_boxed_str())
}

/// Build the version string including the build metadata embedded by build.rs.
fn long_version_string() -> String {
    format!(
        "{} ({}, built {})",
        env!("CARGO_PKG_VERSION"),
        option_env!("GIT_HASH").unwrap_or("dev"),
        option_env!("BUILD_TIMESTAMP").unwrap_or("unknown"),
    )
}

#[derive(Parser)]
#[command(
    name = "vctriage",
    version,
    long_version = long_version(),
    about = "Review and export companion for vulnerable-code datasets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Page through a dataset's findings with surrounding source context
    Inspect(InspectArgs),
    /// Run the dataset generator and convert its output to a spreadsheet
    Export(ExportArgs),
}

#[derive(Args, Clone)]
pub struct InspectArgs {
    /// Path to the newline-delimited JSON dataset
    pub dataset: PathBuf,

    /// Print every finding without pausing for acknowledgment
    #[arg(long)]
    pub batch: bool,
}

#[derive(Args, Clone)]
pub struct ExportArgs {
    /// Arguments forwarded verbatim to the generator
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
