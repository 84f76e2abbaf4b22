use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Malformed report: {0}")]
    Report(String),

    #[error("Generator error: {0}")]
    Tool(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
