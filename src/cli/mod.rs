//! cli
//!
//! Command-line interface layer.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments
//! - Build the run [`Context`] once and pass it down
//! - Delegate to the command handler
//!
//! # Architecture
//!
//! The CLI layer is thin. It resolves flags, environment and configuration
//! into plain values and hands them to [`crate::changelog`].

pub mod args;
pub mod commands;

pub use args::Cli;

use crate::core::context::Context;
use crate::ui::output::Verbosity;
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
    };

    commands::update(&ctx, &cli)
}
