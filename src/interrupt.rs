//! Ctrl+C handling for the splash screen.
//!
//! Interruption is a clean termination path, not a failure: the handler
//! only sets a flag, and the renderer checks it between paced writes.

use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag for handling Ctrl+C across the application
static CTRLC_RECEIVED: AtomicBool = AtomicBool::new(false);

/// Check if Ctrl+C has been received.
pub fn interrupted() -> bool {
    CTRLC_RECEIVED.load(Ordering::SeqCst)
}

/// Set up the Ctrl+C handler.
///
/// This should be called once at program startup.
pub fn install() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        CTRLC_RECEIVED.store(true, Ordering::SeqCst);
    })
}

/// Set the flag without delivering a real signal.
#[allow(dead_code)] // Used in tests
pub fn trigger() {
    CTRLC_RECEIVED.store(true, Ordering::SeqCst);
}

/// Clear the flag so tests can run from a known state.
#[allow(dead_code)] // Used in tests
pub fn reset() {
    CTRLC_RECEIVED.store(false, Ordering::SeqCst);
}
