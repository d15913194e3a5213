//! core
//!
//! Domain types, configuration and run context.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Version, ReleaseTag, RepoSlug
//! - [`context`] - The explicit run context (working directory, verbosity)
//! - [`config`] - Configuration schema and loading
//! - [`manifest`] - Previous version lookup in a JSON manifest

pub mod config;
pub mod context;
pub mod manifest;
pub mod types;
