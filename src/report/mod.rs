pub mod context;
pub mod findings;

pub use context::{context_window, ContextWindow};
pub use findings::{ParsedReport, PATH_MARKER, SUMMARY_MARKER};
