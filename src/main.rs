mod ansi;
mod interrupt;
mod scene;
mod splash;

use clap::Parser;
use splash::{Splash, SplashError};

/// vyakart-splash: animated starfield splash screen for Vyakart
#[derive(Parser)]
#[command(name = "vyakart-splash")]
#[command(version, about = "Animated starfield splash screen for Vyakart")]
#[command(long_about = "Renders an ASCII starfield with a short line-by-line \
    reveal, then the Vyakart title banner and the word \"creator\" in ten \
    languages. Output is colored only when stdout is an interactive terminal; \
    redirected output is plain text.")]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    // Ctrl+C only sets a flag; the renderer notices it at the next pacing
    // point and the process exits cleanly. A failed registration is not
    // fatal, the splash still renders.
    if let Err(e) = interrupt::install() {
        log::warn!("could not install Ctrl+C handler: {}", e);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match Splash::new().render(&mut out) {
        Ok(()) => {}
        Err(SplashError::Interrupted) => {
            // Interruption is a clean termination path, exit status 0.
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
