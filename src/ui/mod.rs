//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware printing of previews, warnings and debug lines
//!
//! # Design
//!
//! Nothing in the crate prints directly except through this module (and the
//! entry point's final error report). Callers pass the run's
//! [`Verbosity`](output::Verbosity) explicitly, usually via
//! [`crate::core::context::Context`].

pub mod output;
