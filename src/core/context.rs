//! core::context
//!
//! The run context passed explicitly to every operation.
//!
//! There is no process-wide logger. The CLI builds one [`Context`] from its
//! flags and hands out `&Context`; library code logs through it.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::ui::output::{self, Verbosity};

/// Execution context for a single run.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Output verbosity.
    pub verbosity: Verbosity,
}

impl Context {
    /// Create a context rooted at `cwd`.
    pub fn new(cwd: impl Into<PathBuf>, verbosity: Verbosity) -> Self {
        Self {
            cwd: Some(cwd.into()),
            verbosity,
        }
    }

    /// The directory git runs in and relative paths resolve against.
    ///
    /// Falls back to `.` when no override was given.
    pub fn work_dir(&self) -> &Path {
        self.cwd.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Resolve `path` against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.work_dir().join(path)
        }
    }

    /// Emit a debug line.
    pub fn debug(&self, message: impl Display) {
        output::debug(message, self.verbosity);
    }

    /// Emit a warning.
    pub fn warn(&self, message: impl Display) {
        output::warn(message, self.verbosity);
    }

    /// Print the generated section and a separator.
    pub fn preview(&self, section: &str) {
        output::preview(section, self.verbosity);
    }
}
