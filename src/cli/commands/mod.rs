//! cli::commands
//!
//! Command handlers.

mod update;

pub use update::{update, API_URL_ENV, TOKEN_ENV};
