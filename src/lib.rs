//! Review and export companion for vulnerable-code datasets.

pub mod cli;
pub mod dataset;
pub mod errors;
pub mod models;
pub mod report;
pub mod tools;
