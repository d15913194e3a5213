//! forge::traits
//!
//! Forge trait definition for interacting with remote hosting services.
//!
//! # Design
//!
//! The `Forge` trait is async because forge operations involve network I/O.
//! All methods return `Result` so API failures surface as typed errors; no
//! method retries on its own.
//!
//! # Example
//!
//! ```ignore
//! use github_changelog::forge::{Forge, ForgeError};
//!
//! async fn count_merged(forge: &dyn Forge) -> Result<usize, ForgeError> {
//!     let prs = forge.list_closed_prs().await?;
//!     Ok(prs.iter().filter(|pr| pr.is_merged()).count())
//! }
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors from forge operations.
///
/// These error types map to common failure modes when interacting
/// with remote hosting services like GitHub.
#[derive(Debug, Clone, Error)]
pub enum ForgeError {
    /// Authentication failed (invalid token, expired, insufficient permissions).
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Network or connection error.
    #[error("network error: {0}")]
    NetworkError(String),
}

/// Repository information returned from the forge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    /// `owner/name`
    pub full_name: String,
    /// Web URL of the repository (no trailing slash)
    pub html_url: String,
}

/// A closed pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// PR URL (web URL for viewing)
    pub url: String,
    /// Commit the head branch pointed at when queried
    pub head_sha: String,
    /// When the PR was merged; `None` if closed without merging
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    /// Whether the PR was merged.
    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }
}

/// The Forge trait for interacting with remote hosting services.
///
/// # Error Handling
///
/// All methods return `Result<T, ForgeError>`. Callers should handle:
/// - `AuthFailed`: Token missing scopes or invalid
/// - `NotFound`: Repository doesn't exist or is private
/// - `RateLimited`: Retry later or set a token
#[async_trait]
pub trait Forge: Send + Sync {
    /// Get the forge name (e.g., "github").
    fn name(&self) -> &'static str;

    /// Fetch the repository the forge is bound to.
    async fn get_repository(&self) -> Result<Repository, ForgeError>;

    /// List every closed pull request in the repository.
    ///
    /// Implementations page through the full result set. Order is the
    /// forge's native order.
    async fn list_closed_prs(&self) -> Result<Vec<PullRequest>, ForgeError>;
}
