use serde::{Deserialize, Serialize};

/// One row of a generated vulnerable-code dataset. Field names follow the
/// column schema the generator writes; every column except the code itself is
/// optional so partially populated datasets still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "GitHub URL", default)]
    pub repo_url: Option<String>,

    #[serde(rename = "Commit Hash", default)]
    pub commit: Option<String>,

    #[serde(rename = "File", default)]
    pub file: Option<String>,

    /// Full text of the sampled source file, newline-delimited.
    #[serde(rename = "Code")]
    pub code: String,

    /// Free-text static analyzer output: zero or more findings followed by a
    /// trailing summary section.
    #[serde(rename = "Flawfinder Vulnerabilities", default)]
    pub report: Option<String>,

    #[serde(rename = "Flawfinder CWEs", default)]
    pub cwes: Option<String>,
}

impl Record {
    /// Label used in the per-record review header.
    pub fn display_name(&self) -> &str {
        self.file.as_deref().unwrap_or("<unknown file>")
    }
}
