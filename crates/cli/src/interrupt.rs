//! Ctrl-C handling.
//!
//! An interrupt at any point, usually while waiting for the selection,
//! ends the process with status 1 and no message.

use std::process;

/// Exit status used when the user interrupts
pub const INTERRUPT_EXIT_CODE: i32 = 1;

/// Runs `on_interrupt` when the process receives Ctrl-C.
///
/// # Errors
///
/// Returns an error if a handler is already installed or the signal handler
/// cannot be registered.
pub fn install_interrupt_handler_with<F>(on_interrupt: F) -> Result<(), ctrlc::Error>
where
    F: FnMut() + Send + 'static,
{
    ctrlc::set_handler(on_interrupt)
}

/// Makes Ctrl-C exit with [`INTERRUPT_EXIT_CODE`].
///
/// # Errors
///
/// Returns an error if the signal handler cannot be registered.
pub fn install_interrupt_handler() -> Result<(), ctrlc::Error> {
    install_interrupt_handler_with(|| process::exit(INTERRUPT_EXIT_CODE))
}
