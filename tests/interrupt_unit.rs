//! Tests for Ctrl+C flag handling and interrupted rendering.
//!
//! These live in their own test binary because the interrupt flag is
//! process-wide; keeping them out of the library tests stops the flag
//! from leaking into unrelated render assertions.

use std::time::Duration;

use vyakart_splash::interrupt;
use vyakart_splash::splash::{Splash, SplashError};

#[test]
fn test_interrupt_flag_stops_render_before_next_row() {
    interrupt::reset();
    assert!(!interrupt::interrupted());

    interrupt::trigger();
    assert!(interrupt::interrupted());

    let splash = Splash::with_options(false, Duration::ZERO, Duration::ZERO);
    let mut buf = Vec::new();
    let result = splash.render(&mut buf);
    assert!(matches!(result, Err(SplashError::Interrupted)));
    // The flag was already set, so nothing was written.
    assert!(buf.is_empty());

    // Clearing the flag lets the same renderer complete.
    interrupt::reset();
    let mut buf = Vec::new();
    splash.render(&mut buf).expect("render after reset should succeed");
    assert!(!buf.is_empty());
}

#[test]
fn test_install_registers_handler_once() {
    // First registration in this process succeeds; the ctrlc crate
    // rejects a second one.
    assert!(interrupt::install().is_ok());
    assert!(interrupt::install().is_err());
}
