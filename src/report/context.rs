use crate::errors::TriageError;

/// The 1-3 source lines surrounding a reported line, shown for human triage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
    pub above: Option<String>,
    pub target: String,
    pub below: Option<String>,
}

impl ContextWindow {
    /// The window's lines in display order.
    pub fn lines(&self) -> Vec<&str> {
        self.above
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.target.as_str()))
            .chain(self.below.iter().map(String::as_str))
            .collect()
    }
}

/// Builds the review window around a 1-based reported line. The preceding
/// line is only included from the third line of the file onward; the
/// following line is included unless the target is the last line.
pub fn context_window(lines: &[&str], reported_line: usize) -> Result<ContextWindow, TriageError> {
    let idx = reported_line.checked_sub(1).ok_or_else(|| {
        TriageError::Report("reported line numbers are 1-based".into())
    })?;
    if idx >= lines.len() {
        return Err(TriageError::Report(format!(
            "reported line {} is outside the {}-line file",
            reported_line,
            lines.len()
        )));
    }

    let above = if idx > 1 {
        Some(lines[idx - 1].to_string())
    } else {
        None
    };
    let below = if idx < lines.len() - 1 {
        Some(lines[idx + 1].to_string())
    } else {
        None
    };

    Ok(ContextWindow {
        above,
        target: lines[idx].to_string(),
        below,
    })
}
