pub mod loader;
pub mod spreadsheet;

pub use loader::{load_records, load_rows, Row};
pub use spreadsheet::write_spreadsheet;
