//! Splash screen rendering: starfield reveal, title banner, translations.
//!
//! The render sequence is strictly linear. Delays between rows are cosmetic
//! pacing only; the Ctrl+C flag is checked at each pacing point so an
//! interrupted run stops before the next write.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::ansi::{self, paint, Color};
use crate::interrupt;
use crate::scene;

/// Delay between starfield rows.
const LINE_DELAY: Duration = Duration::from_millis(50);

/// Pause between the starfield and the title banner.
const TITLE_DELAY: Duration = Duration::from_millis(200);

/// Errors that can occur while rendering the splash screen.
#[derive(Debug, thiserror::Error)]
pub enum SplashError {
    /// Ctrl+C received mid-render
    #[error("splash interrupted")]
    Interrupted,

    /// Output stream failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Splash screen renderer.
///
/// Owns the formatting decision (color on or off) and the pacing delays.
/// Rendering writes to any [`Write`] target so tests can capture output
/// in a buffer.
#[derive(Debug, Clone)]
pub struct Splash {
    color: bool,
    line_delay: Duration,
    title_delay: Duration,
}

impl Splash {
    /// Create a renderer with stock pacing, colored only when stdout is an
    /// interactive terminal.
    pub fn new() -> Self {
        Self::with_options(ansi::stdout_is_tty(), LINE_DELAY, TITLE_DELAY)
    }

    /// Create a renderer with explicit settings.
    ///
    /// Tests use this to force color on or off and to zero out the delays.
    pub fn with_options(color: bool, line_delay: Duration, title_delay: Duration) -> Self {
        Self {
            color,
            line_delay,
            title_delay,
        }
    }

    /// Render the starfield, one cyan row per `line_delay`, top to bottom.
    pub fn render_starfield<W: Write>(&self, out: &mut W) -> Result<(), SplashError> {
        for row in scene::STARFIELD {
            if interrupt::interrupted() {
                return Err(SplashError::Interrupted);
            }
            writeln!(out, "{}", paint(row, Color::Cyan, self.color))?;
            out.flush()?;
            thread::sleep(self.line_delay);
        }
        Ok(())
    }

    /// Render the aligned translation table with cycling row colors.
    ///
    /// Language names are left-justified to the widest name so the `:`
    /// separators line up.
    pub fn render_translations<W: Write>(&self, out: &mut W) -> Result<(), SplashError> {
        let width = scene::max_language_width();
        writeln!(out)?;
        for (idx, (lang, word)) in scene::TRANSLATIONS.iter().enumerate() {
            let color = scene::COLOR_CYCLE[idx % scene::COLOR_CYCLE.len()];
            let row = format!("{:<width$} : {}", lang, word);
            writeln!(out, "{}", paint(&row, color, self.color))?;
        }
        Ok(())
    }

    /// Render the full splash: starfield, pause, title banner, translation
    /// table, trailing blank line.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<(), SplashError> {
        log::debug!("rendering starfield ({} rows)", scene::STARFIELD.len());
        self.render_starfield(out)?;

        if interrupt::interrupted() {
            return Err(SplashError::Interrupted);
        }
        thread::sleep(self.title_delay);

        writeln!(out, "{}", paint(scene::TITLE, Color::Magenta, self.color))?;

        log::debug!("rendering {} translations", scene::TRANSLATIONS.len());
        self.render_translations(out)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

impl Default for Splash {
    fn default() -> Self {
        Self::new()
    }
}
