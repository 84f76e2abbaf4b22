use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vctriage::cli::{self, Cli, Commands};
use vctriage::errors::TriageError;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                // Argument faults print usage to stderr and exit with status 1.
                let _ = e.print();
                std::process::exit(1);
            }
        },
    };

    // Initialize logging
    let log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let result = match cli.command {
        Commands::Inspect(args) => cli::inspect::handle_inspect(args),
        Commands::Export(args) => cli::export::handle_export(args),
    };

    match result {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            let exit_code = match &e {
                TriageError::Dataset(_) => 2,
                TriageError::Tool(_) => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
