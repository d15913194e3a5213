//! core::config::schema
//!
//! Configuration schema types.
//!
//! The same schema is used for the global file and the repo file; the repo
//! file wins key by key.
//!
//! # Validation
//!
//! Values are validated after parsing (non-empty strings, a well-formed API
//! base URL).

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// A single configuration file.
///
/// # Example
///
/// ```toml
/// file = "CHANGELOG.md"
/// manifest = "package.json"
/// remote = "origin"
///
/// [github]
/// host = "github.example.com"
/// api_base = "https://github.example.com/api/v3"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Changelog path, relative to the working directory
    pub file: Option<String>,

    /// JSON manifest holding the previous version
    pub manifest: Option<String>,

    /// Git remote used to derive the repository identity
    pub remote: Option<String>,

    /// GitHub settings
    pub github: Option<GitHubConfig>,
}

/// GitHub host settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GitHubConfig {
    /// Host name searched for in the remote URL
    pub host: Option<String>,

    /// REST API base URL
    pub api_base: Option<String>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("file", &self.file),
            ("manifest", &self.manifest),
            ("remote", &self.remote),
        ] {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(ConfigError::InvalidValue(format!("'{}' cannot be empty", key)));
            }
        }

        if let Some(github) = &self.github {
            if matches!(&github.host, Some(h) if h.trim().is_empty()) {
                return Err(ConfigError::InvalidValue(
                    "'github.host' cannot be empty".into(),
                ));
            }
            if let Some(base) = &github.api_base {
                if !(base.starts_with("https://") || base.starts_with("http://")) {
                    return Err(ConfigError::InvalidValue(format!(
                        "'github.api_base' must be an http(s) URL, got '{}'",
                        base
                    )));
                }
            }
        }

        Ok(())
    }
}
