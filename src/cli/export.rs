use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::cli::commands::ExportArgs;
use crate::dataset::{load_rows, write_spreadsheet};
use crate::errors::TriageError;
use crate::tools::vcgen;

/// File extension that identifies the generator's dataset argument.
const DATASET_EXT: &str = "jsonl";

pub fn handle_export(args: ExportArgs) -> Result<(), TriageError> {
    // Too few arguments to name an output dataset; show the generator's own
    // usage instead.
    if args.args.len() < 2 {
        return vcgen::help();
    }

    let dataset = dataset_argument(&args.args)?;

    let status = vcgen::run(&args.args)?;
    if !status.success() {
        return Err(TriageError::Tool(match status.code() {
            Some(code) => format!("generator exited with status {code}"),
            None => "generator was terminated by a signal".to_string(),
        }));
    }

    if !dataset.exists() {
        warn!(
            path = %dataset.display(),
            "Generator succeeded but the dataset file does not exist; nothing to export"
        );
        return Ok(());
    }

    let rows = load_rows(&dataset)?;
    let spreadsheet = spreadsheet_path(&dataset);
    write_spreadsheet(&rows, &spreadsheet)?;
    info!(rows = rows.len(), path = %spreadsheet.display(), "Export complete");
    Ok(())
}

/// The first forwarded argument naming the dataset file.
fn dataset_argument(args: &[String]) -> Result<PathBuf, TriageError> {
    args.iter()
        .find(|arg| arg.ends_with(DATASET_EXT))
        .map(PathBuf::from)
        .ok_or_else(|| {
            TriageError::Dataset(format!(
                "no {DATASET_EXT} dataset file among the forwarded arguments"
            ))
        })
}

/// Same directory and base name as the dataset, with the xlsx extension.
fn spreadsheet_path(dataset: &Path) -> PathBuf {
    dataset.with_extension("xlsx")
}
