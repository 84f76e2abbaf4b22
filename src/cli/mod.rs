pub mod commands;
pub mod export;
pub mod inspect;

pub use commands::{Cli, Commands};
