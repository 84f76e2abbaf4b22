use std::env;
use std::io::ErrorKind;
use std::process::{Command, ExitStatus};

use tracing::debug;

use crate::errors::TriageError;

/// Environment variable overriding the path to the generator executable.
pub const VCGEN_ENV_VAR: &str = "VCGEN";

const VCGEN_BIN: &str = "vcgen";

fn executable() -> String {
    env::var(VCGEN_ENV_VAR).unwrap_or_else(|_| VCGEN_BIN.to_string())
}

/// Invokes the generator's help mode, inheriting stdio. The exit status is
/// ignored.
pub fn help() -> Result<(), TriageError> {
    let exe = executable();
    debug!(exe = %exe, "Invoking generator help");
    Command::new(&exe)
        .arg("-h")
        .status()
        .map_err(|e| spawn_error(&exe, e))?;
    Ok(())
}

/// Runs the generator with the forwarded arguments, inheriting stdio, and
/// returns its exit status.
pub fn run(args: &[String]) -> Result<ExitStatus, TriageError> {
    let exe = executable();
    debug!(exe = %exe, ?args, "Invoking generator");
    Command::new(&exe)
        .args(args)
        .status()
        .map_err(|e| spawn_error(&exe, e))
}

fn spawn_error(exe: &str, e: std::io::Error) -> TriageError {
    if e.kind() == ErrorKind::NotFound {
        TriageError::Tool(format!(
            "{exe} is not installed or not on PATH. Set the {VCGEN_ENV_VAR} environment \
             variable to the path of the generator executable."
        ))
    } else {
        TriageError::Io(e)
    }
}
