//! core::manifest
//!
//! Reading the previous release version from a JSON manifest.
//!
//! The manifest is any JSON object with a string `version` key, typically a
//! `package.json`. Other keys are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::types::{TypeError, Version};

/// Default manifest file name.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// Errors from manifest loading.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse manifest '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("manifest '{path}': {source}")]
    InvalidVersion { path: PathBuf, source: TypeError },
}

#[derive(Deserialize)]
struct Manifest {
    version: String,
}

/// Parse the version out of manifest text.
pub fn parse_version(path: &Path, content: &str) -> Result<Version, ManifestError> {
    let manifest: Manifest =
        serde_json::from_str(content).map_err(|source| ManifestError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

    Version::new(&manifest.version).map_err(|source| ManifestError::InvalidVersion {
        path: path.to_path_buf(),
        source,
    })
}

/// Read the version from the manifest at `path`.
pub fn read_version(path: &Path) -> Result<Version, ManifestError> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    parse_version(path, &content)
}
