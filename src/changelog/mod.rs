//! changelog
//!
//! Building and writing a release section.
//!
//! # Modules
//!
//! - [`document`] - Existing changelog, split into unreleased notes and the rest
//! - [`select`] - Which pull requests belong to the release
//! - [`render`] - Header, bullets and final file text
//! - [`updater`] - The full update pipeline
//!
//! # Example
//!
//! ```ignore
//! use github_changelog::changelog::{update_changelog, UpdateRequest};
//!
//! let outcome = update_changelog(&ctx, &git, &forge, &request).await?;
//! println!("{} pull requests", outcome.pull_requests.len());
//! ```

pub mod document;
pub mod render;
pub mod select;
pub mod updater;

pub use document::ChangelogDocument;
pub use updater::{derive_repository, update_changelog, UpdateOutcome, UpdateRequest};

use std::path::PathBuf;

use thiserror::Error;

use crate::forge::ForgeError;
use crate::git::GitError;

/// Default changelog file name.
pub const DEFAULT_CHANGELOG: &str = "CHANGELOG.md";

/// Errors from the changelog pipeline.
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// No `owner/name` could be determined.
    #[error("could not determine the repository: {0}; pass --repo owner/name")]
    RepositoryUnknown(String),

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Forge(#[from] ForgeError),

    #[error("failed to read changelog '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write changelog '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
