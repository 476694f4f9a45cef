use std::process::{Command, Stdio};

use log::info;

use crate::error::{Error, Result};

/// Executes a command attached to the current terminal and waits for it.
///
/// # Errors
///
/// Returns an error if command execution fails or exits with non-zero status.
pub fn execute_command(mut command: Command) -> Result<()> {
    let command = command
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let status = command.spawn()?.wait()?;
    info!("Sub process finished with {}", status);

    if status.success() {
        Ok(())
    } else {
        Err(Error::SubProcessExit)
    }
}
