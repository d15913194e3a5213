//! git::interface
//!
//! Git interface implementation over the `git` command line.
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::Spawn`]: The `git` binary could not be started
//! - [`GitError::CommandFailed`]: `git` exited with a non-zero status
//! - [`GitError::InvalidOutput`]: `git` printed something that is not UTF-8

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::core::context::Context;
use crate::core::types::ReleaseTag;
use crate::ui::output::{self, Verbosity};

/// Remote consulted when no other is configured.
pub const DEFAULT_REMOTE: &str = "origin";

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// The git binary could not be run at all.
    #[error("failed to run '{command}': {source}")]
    Spawn {
        /// The command line that was attempted
        command: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Git exited unsuccessfully.
    #[error("'{command}' failed with {}: {stderr}", exit_code_display(.code))]
    CommandFailed {
        /// The command line that failed
        command: String,
        /// Exit code (None if killed by a signal)
        code: Option<i32>,
        /// Trimmed standard error
        stderr: String,
    },

    /// Git printed output that is not valid UTF-8.
    #[error("'{command}' produced non-UTF-8 output")]
    InvalidOutput {
        /// The command line
        command: String,
    },
}

fn exit_code_display(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Completed git invocation.
struct GitOutput {
    command: String,
    code: Option<i32>,
    lines: Vec<String>,
    stderr: String,
}

impl GitOutput {
    fn success(&self) -> bool {
        self.code == Some(0)
    }

    fn into_lines(self) -> Result<Vec<String>, GitError> {
        if self.success() {
            Ok(self.lines)
        } else {
            Err(self.into_error())
        }
    }

    fn into_error(self) -> GitError {
        GitError::CommandFailed {
            command: self.command,
            code: self.code,
            stderr: self.stderr,
        }
    }
}

/// Handle to a repository, operated through the `git` binary.
#[derive(Debug, Clone)]
pub struct Git {
    /// Directory git runs in
    work_dir: PathBuf,
    /// Verbosity for command tracing
    verbosity: Verbosity,
}

impl Git {
    /// Open the repository containing the context's working directory.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepo` if the directory is not inside a work
    /// tree, or `GitError::Spawn` if git is not installed.
    pub fn open(ctx: &Context) -> Result<Self, GitError> {
        let git = Self {
            work_dir: ctx.work_dir().to_path_buf(),
            verbosity: ctx.verbosity,
        };

        let out = git.run(&["rev-parse", "--is-inside-work-tree"])?;
        if !out.success() || out.lines.first().map(String::as_str) != Some("true") {
            return Err(GitError::NotARepo {
                path: git.work_dir.clone(),
            });
        }

        Ok(git)
    }

    /// Directory the repository was opened from.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Run git and collect its complete output.
    ///
    /// Both streams are drained to the end before the exit status is
    /// looked at; stdout is split into lines.
    fn run(&self, args: &[&str]) -> Result<GitOutput, GitError> {
        let command = format!("git {}", args.join(" "));
        output::debug(format!("running {}", command), self.verbosity);

        let out = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|source| GitError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stdout = String::from_utf8(out.stdout).map_err(|_| GitError::InvalidOutput {
            command: command.clone(),
        })?;
        let lines: Vec<String> = stdout.lines().map(str::to_string).collect();
        let stderr = String::from_utf8_lossy(&out.stderr).trim().to_string();

        output::debug(
            format!(
                "{} exited with {} ({} lines)",
                command,
                exit_code_display(&out.status.code()),
                lines.len()
            ),
            self.verbosity,
        );

        Ok(GitOutput {
            command,
            code: out.status.code(),
            lines,
            stderr,
        })
    }

    /// Run git, returning stdout lines on success.
    pub fn run_lines(&self, args: &[&str]) -> Result<Vec<String>, GitError> {
        self.run(args)?.into_lines()
    }

    /// Get the URL of a remote.
    ///
    /// Returns `None` if the remote is not configured.
    pub fn remote_url(&self, name: &str) -> Result<Option<String>, GitError> {
        let key = format!("remote.{}.url", name);
        let out = self.run(&["config", "--get", &key])?;

        // `git config --get` exits 1 when the key is absent.
        match out.code {
            Some(0) => Ok(out
                .lines
                .into_iter()
                .next()
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())),
            Some(1) => Ok(None),
            _ => Err(out.into_error()),
        }
    }

    /// Commits reachable from `HEAD` but not from `tag`.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` if the tag does not exist.
    pub fn commits_since(&self, tag: &ReleaseTag) -> Result<HashSet<String>, GitError> {
        let range = format!("{}..HEAD", tag);
        let lines = self.run_lines(&["rev-list", &range])?;

        Ok(lines
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect())
    }
}
