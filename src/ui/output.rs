//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Normal output (the changelog preview) goes to stdout. Diagnostics go to
//! stderr so a preview can be piped without noise: debug lines are prefixed
//! `[debug]`, warnings `warning:` and errors `error:`.

use std::fmt::Display;

/// Width of the separator printed after a preview.
pub const SEPARATOR_WIDTH: usize = 79;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    #[default]
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    ///
    /// `quiet` wins over `debug`.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a debug message (only in debug mode).
pub fn debug(message: impl Display, verbosity: Verbosity) {
    if verbosity == Verbosity::Debug {
        eprintln!("[debug] {}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// The line printed between a preview and whatever follows it.
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Print a generated section followed by a separator line.
///
/// `section` is printed as-is; it is expected to end with a newline.
pub fn preview(section: &str, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        print!("{}", section);
        println!("{}", separator());
    }
}
