use std::io::{self, BufRead, Write};

use console::style;
use tracing::{debug, info};

use crate::cli::commands::InspectArgs;
use crate::dataset::load_records;
use crate::errors::TriageError;
use crate::models::Record;
use crate::report::{context_window, ParsedReport};

pub fn handle_inspect(args: InspectArgs) -> Result<(), TriageError> {
    let records = load_records(&args.dataset)?;
    info!(path = %args.dataset.display(), records = records.len(), "Loaded dataset for review");

    let mut reviewed = 0usize;
    for (index, record) in records.iter().enumerate() {
        reviewed += inspect_record(index, record, args.batch)?;
    }

    println!(
        "\n{} Reviewed {} finding(s) across {} record(s)",
        style("✓").green(),
        reviewed,
        records.len(),
    );
    Ok(())
}

/// Walks one record's findings, printing each with its context window and
/// pausing for acknowledgment between them. Returns how many findings were
/// shown.
fn inspect_record(index: usize, record: &Record, batch: bool) -> Result<usize, TriageError> {
    let Some(report) = record.report.as_deref() else {
        debug!(record = index, "Record carries no analyzer report");
        return Ok(0);
    };
    let parsed = ParsedReport::parse(report);
    if parsed.findings().is_empty() {
        debug!(record = index, "No findings in report");
        return Ok(0);
    }

    print_record_header(index, record);

    let lines: Vec<&str> = record.code.lines().collect();
    for finding in parsed.findings() {
        let line = parsed.reported_line()?;
        let window = context_window(&lines, line)?;

        println!("\n{}\n", finding.trim_end());
        if let Some(above) = &window.above {
            println!("{}", style(above).dim());
        }
        println!("{}", style(&window.target).yellow());
        if let Some(below) = &window.below {
            println!("{}", style(below).dim());
        }

        if !batch {
            wait_for_ack()?;
        }
    }
    Ok(parsed.findings().len())
}

fn print_record_header(index: usize, record: &Record) {
    println!(
        "\n{} Record {}: {} {}",
        style("---").cyan().bold(),
        style(index + 1).cyan().bold(),
        style(record.display_name()).white().bold(),
        style("---").cyan().bold(),
    );
    if let (Some(url), Some(commit)) = (&record.repo_url, &record.commit) {
        println!("{}", style(format!("{url} @ {commit}")).dim());
    }
}

fn wait_for_ack() -> Result<(), TriageError> {
    print!(
        "\n{}",
        style("Press Enter to continue to the next vulnerability").dim()
    );
    io::stdout().flush()?;
    let mut ack = String::new();
    io::stdin().lock().read_line(&mut ack)?;
    Ok(())
}
