//! ANSI color handling for splash output.
//!
//! Colors are emitted only when stdout is an interactive terminal;
//! redirected output stays plain so the splash can be piped or captured
//! without escape sequences.

use std::io::{self, IsTerminal};

/// ANSI foreground color used by the splash screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    /// SGR code for this color.
    pub fn code(self) -> &'static str {
        match self {
            Color::Red => "31",
            Color::Green => "32",
            Color::Yellow => "33",
            Color::Blue => "34",
            Color::Magenta => "35",
            Color::Cyan => "36",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Green => write!(f, "green"),
            Color::Yellow => write!(f, "yellow"),
            Color::Blue => write!(f, "blue"),
            Color::Magenta => write!(f, "magenta"),
            Color::Cyan => write!(f, "cyan"),
        }
    }
}

/// Wrap `text` in the start/reset sequences for `color` when `enabled` is true.
///
/// When `enabled` is false the text is returned unchanged. The function is
/// total: any text and any palette color produce a valid result.
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("\x1b[{}m{}\x1b[0m", color.code(), text)
    } else {
        text.to_string()
    }
}

/// Check whether stdout is connected to an interactive terminal.
pub fn stdout_is_tty() -> bool {
    io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_disabled_returns_text_unchanged() {
        assert_eq!(paint("hello", Color::Cyan, false), "hello");
        assert_eq!(paint("", Color::Red, false), "");
    }

    #[test]
    fn test_paint_enabled_wraps_in_start_and_reset() {
        assert_eq!(paint("hello", Color::Cyan, true), "\x1b[36mhello\x1b[0m");
        assert_eq!(paint("", Color::Magenta, true), "\x1b[35m\x1b[0m");
    }

    #[test]
    fn test_paint_preserves_multibyte_text() {
        let painted = paint("создатель", Color::Blue, true);
        assert!(painted.contains("создатель"));
        assert!(painted.starts_with("\x1b[34m"));
        assert!(painted.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_color_codes() {
        assert_eq!(Color::Red.code(), "31");
        assert_eq!(Color::Green.code(), "32");
        assert_eq!(Color::Yellow.code(), "33");
        assert_eq!(Color::Blue.code(), "34");
        assert_eq!(Color::Magenta.code(), "35");
        assert_eq!(Color::Cyan.code(), "36");
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::Cyan.to_string(), "cyan");
        assert_eq!(Color::Magenta.to_string(), "magenta");
    }

    #[test]
    fn test_stdout_is_tty_does_not_panic() {
        // Under `cargo test` stdout is usually captured, so the value is
        // environment-dependent. Just verify the probe runs.
        let _ = stdout_is_tty();
    }
}
