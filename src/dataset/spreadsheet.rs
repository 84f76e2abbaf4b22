use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use rust_xlsxwriter::{Workbook, Worksheet};
use serde_json::Value;
use tracing::info;

use crate::dataset::loader::Row;
use crate::errors::TriageError;

/// Writes the dataset rows as a single worksheet: a header row of column
/// names followed by one row per record. Column order follows the first
/// record.
pub fn write_spreadsheet(rows: &[Row], path: &Path) -> Result<(), TriageError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let columns: Vec<String> = rows
        .first()
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default();
    for (col, name) in columns.iter().enumerate() {
        worksheet.write_string(0, col as u16, name.as_str())?;
    }

    let progress = ProgressBar::new(rows.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.green/yellow} {pos:>7}/{len:7} {wide_msg}")
            .unwrap(),
    );
    progress.set_message("Writing spreadsheet");
    for (i, row) in rows.iter().enumerate() {
        write_row(worksheet, i as u32 + 1, &columns, row)?;
        progress.inc(1);
    }
    progress.finish_and_clear();

    workbook.save(path)?;
    info!(path = %path.display(), rows = rows.len(), "Spreadsheet written");
    Ok(())
}

fn write_row(
    worksheet: &mut Worksheet,
    row_num: u32,
    columns: &[String],
    row: &Row,
) -> Result<(), TriageError> {
    for (col, name) in columns.iter().enumerate() {
        let col_num = col as u16;
        match row.get(name) {
            None | Some(Value::Null) => {}
            Some(Value::String(s)) => {
                worksheet.write_string(row_num, col_num, s.as_str())?;
            }
            Some(Value::Number(n)) => {
                if let Some(f) = n.as_f64() {
                    worksheet.write_number(row_num, col_num, f)?;
                } else {
                    worksheet.write_string(row_num, col_num, n.to_string())?;
                }
            }
            Some(Value::Bool(b)) => {
                worksheet.write_boolean(row_num, col_num, *b)?;
            }
            // Nested arrays/objects are not tabular; keep their JSON text.
            Some(other) => {
                worksheet.write_string(row_num, col_num, other.to_string())?;
            }
        }
    }
    Ok(())
}
