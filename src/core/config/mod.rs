//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Two optional TOML files are read:
//! - **Global**: user-level defaults
//! - **Repo**: `.github-changelog.toml` in the working directory
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config file
//! 3. Repo config file
//! 4. Environment and CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$GITHUB_CHANGELOG_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/github-changelog/config.toml`
//! 3. `<platform config dir>/github-changelog/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use github_changelog::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("/path/to/repo"))).unwrap();
//! println!("Changelog: {}", config.file());
//! println!("Remote: {}", config.remote());
//! ```

pub mod schema;

pub use schema::{FileConfig, GitHubConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::changelog::DEFAULT_CHANGELOG;
use crate::core::manifest::DEFAULT_MANIFEST;
use crate::forge::github::{DEFAULT_API_BASE, DEFAULT_HOST};
use crate::git::DEFAULT_REMOTE;

/// Environment variable naming an explicit global config file.
pub const CONFIG_ENV: &str = "GITHUB_CHANGELOG_CONFIG";

/// Global config file, relative to a config directory.
const GLOBAL_CONFIG_FILE: &str = "github-changelog/config.toml";

/// Repo config file name, looked up in the working directory.
pub const REPO_CONFIG_FILE: &str = ".github-changelog.toml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence (repo over global) and fall back to the
/// built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: FileConfig,
    /// Repository configuration (if present)
    pub repo: Option<FileConfig>,
    /// Paths of the files that were actually loaded
    sources: Vec<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Missing config files are not an error (defaults are used).
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated.
    pub fn load(repo_dir: Option<&Path>) -> Result<Self, ConfigError> {
        let global_path = Self::global_config_path();
        Self::load_from(global_path.as_deref(), repo_dir)
    }

    /// Load configuration from an explicit global file and repo directory.
    pub fn load_from(
        global_path: Option<&Path>,
        repo_dir: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        let mut sources = Vec::new();

        let global = match global_path.filter(|p| p.exists()) {
            Some(path) => {
                let config = Self::read_config(path)?;
                sources.push(path.to_path_buf());
                config
            }
            None => FileConfig::default(),
        };

        let repo = match repo_dir.map(|d| d.join(REPO_CONFIG_FILE)) {
            Some(path) if path.exists() => {
                let config = Self::read_config(&path)?;
                sources.push(path);
                Some(config)
            }
            _ => None,
        };

        global.validate()?;
        if let Some(ref r) = repo {
            r.validate()?;
        }

        Ok(Config {
            global,
            repo,
            sources,
        })
    }

    /// Find the global config file, if any location applies.
    fn global_config_path() -> Option<PathBuf> {
        locate_global(
            std::env::var(CONFIG_ENV).ok(),
            std::env::var("XDG_CONFIG_HOME").ok(),
        )
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Files that contributed to this configuration, global first.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    fn pick<'a>(&'a self, get: impl Fn(&'a FileConfig) -> Option<&'a String>) -> Option<&'a str> {
        self.repo
            .as_ref()
            .and_then(&get)
            .or_else(|| get(&self.global))
            .map(String::as_str)
    }

    fn pick_github<'a>(
        &'a self,
        get: impl Fn(&'a GitHubConfig) -> Option<&'a String>,
    ) -> Option<&'a str> {
        self.pick(|c| c.github.as_ref().and_then(&get))
    }

    /// Changelog file path.
    pub fn file(&self) -> &str {
        self.pick(|c| c.file.as_ref()).unwrap_or(DEFAULT_CHANGELOG)
    }

    /// Manifest file path.
    pub fn manifest(&self) -> &str {
        self.pick(|c| c.manifest.as_ref()).unwrap_or(DEFAULT_MANIFEST)
    }

    /// Git remote used for repository detection.
    pub fn remote(&self) -> &str {
        self.pick(|c| c.remote.as_ref()).unwrap_or(DEFAULT_REMOTE)
    }

    /// GitHub host name searched for in the remote URL.
    pub fn host(&self) -> &str {
        self.pick_github(|g| g.host.as_ref()).unwrap_or(DEFAULT_HOST)
    }

    /// GitHub REST API base URL.
    pub fn api_base(&self) -> &str {
        self.pick_github(|g| g.api_base.as_ref())
            .unwrap_or(DEFAULT_API_BASE)
    }
}

/// Global config location from the `GITHUB_CHANGELOG_CONFIG` and
/// `XDG_CONFIG_HOME` values.
///
/// The XDG location is only taken when the file exists there.
fn locate_global(explicit: Option<String>, xdg_home: Option<String>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }

    if let Some(xdg_home) = xdg_home {
        let path = PathBuf::from(xdg_home).join(GLOBAL_CONFIG_FILE);
        if path.exists() {
            return Some(path);
        }
    }

    dirs::config_dir().map(|dir| dir.join(GLOBAL_CONFIG_FILE))
}
