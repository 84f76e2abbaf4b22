use crate::errors::TriageError;

/// Marker that opens the trailing summary section of an analyzer report.
/// Findings are only extracted from the portion before it.
pub const SUMMARY_MARKER: &str = "ANALYSIS SUMMARY";

/// Path prefix the analyzer scanned files under. Every finding header in a
/// report starts with it.
pub const PATH_MARKER: &str = "/tmp/";

/// An analyzer report split into its per-vulnerability findings.
#[derive(Debug, Clone)]
pub struct ParsedReport {
    truncated: String,
    findings: Vec<String>,
}

impl ParsedReport {
    /// Splits a free-text analyzer report into findings. A report without a
    /// summary section is treated as all findings; a report without any path
    /// marker has none.
    pub fn parse(report: &str) -> Self {
        let truncated = match report.split_once(SUMMARY_MARKER) {
            Some((head, _)) => head,
            None => report,
        };
        let findings = truncated
            .split(PATH_MARKER)
            .skip(1)
            .map(String::from)
            .collect();
        Self {
            truncated: truncated.to_string(),
            findings,
        }
    }

    /// The finding texts, in order of appearance.
    pub fn findings(&self) -> &[String] {
        &self.findings
    }

    /// The 1-based source line the report points at, read as the third
    /// colon-delimited token of the truncated report as a whole, not of any
    /// individual finding segment. When a report carries several findings they
    /// all share the first header's line number.
    pub fn reported_line(&self) -> Result<usize, TriageError> {
        let token = self.truncated.split(':').nth(2).ok_or_else(|| {
            TriageError::Report("report header carries no line number field".into())
        })?;
        token.trim().parse().map_err(|_| {
            TriageError::Report(format!("line number token {:?} is not numeric", token.trim()))
        })
    }
}
