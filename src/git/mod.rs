//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **only doorway** to Git. Everything else asks [`Git`]
//! for structured results instead of spawning `git` itself.
//!
//! The interface shells out to the `git` binary. Each invocation's output is
//! collected in full before its exit status is inspected, so a failing
//! command is always reported together with what it printed.
//!
//! # Responsibilities
//!
//! - Repository detection
//! - Remote URL lookup
//! - Commit range listing (`<tag>..HEAD`)
//!
//! # Example
//!
//! ```ignore
//! use github_changelog::core::context::Context;
//! use github_changelog::git::Git;
//!
//! let git = Git::open(&Context::default())?;
//! let url = git.remote_url("origin")?;
//! ```

mod interface;

pub use interface::{Git, GitError, DEFAULT_REMOTE};
