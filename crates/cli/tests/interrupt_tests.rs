//! Ctrl-C handling, checked by sending SIGINT to the test process itself.
//!
//! Kept in its own test binary because only one handler may be installed
//! per process.

#![cfg(unix)]

use std::process::{self, Command};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use yapt_cli::interrupt::{install_interrupt_handler_with, INTERRUPT_EXIT_CODE};

#[test]
fn test_interrupt_runs_handler_instead_of_killing_process() {
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    install_interrupt_handler_with(move || flag.store(true, Ordering::SeqCst)).unwrap();

    // A second handler is refused, so the exit handler cannot be replaced later.
    assert!(install_interrupt_handler_with(|| {}).is_err());

    let status = Command::new("kill")
        .args(["-INT", &process::id().to_string()])
        .status()
        .unwrap();
    assert!(status.success());

    let deadline = Instant::now() + Duration::from_secs(5);
    while !interrupted.load(Ordering::SeqCst) && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(10));
    }

    assert!(interrupted.load(Ordering::SeqCst));
    assert_eq!(INTERRUPT_EXIT_CODE, 1);
}
