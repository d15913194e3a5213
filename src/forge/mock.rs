//! forge::mock
//!
//! Mock forge implementation for deterministic testing.
//!
//! # Design
//!
//! The mock forge serves a fixed repository and PR list from memory, records
//! every call, and can be told to fail a given operation.
//!
//! # Example
//!
//! ```
//! use github_changelog::forge::mock::MockForge;
//! use github_changelog::forge::Forge;
//!
//! # tokio_test::block_on(async {
//! let forge = MockForge::new("https://github.com/octo/widgets");
//! forge.add_pr(MockForge::merged_pr(1, "Add feature", "abc123", "2024-01-01T00:00:00Z"));
//!
//! let prs = forge.list_closed_prs().await.unwrap();
//! assert_eq!(prs.len(), 1);
//! assert_eq!(forge.operations().len(), 1);
//! # });
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};

use super::traits::{Forge, ForgeError, PullRequest, Repository};

/// Mock forge for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping.
#[derive(Debug, Clone)]
pub struct MockForge {
    /// Internal state shared across clones.
    inner: Arc<Mutex<MockForgeInner>>,
}

/// Internal mutable state.
#[derive(Debug)]
struct MockForgeInner {
    /// Repository served by `get_repository`.
    repository: Repository,
    /// Closed PRs in "API order".
    prs: Vec<PullRequest>,
    /// Method to fail on (for testing error paths).
    fail_on: Option<FailOn>,
    /// Recorded operations for verification.
    operations: Vec<MockOperation>,
}

/// Configuration for which operation should fail.
#[derive(Debug, Clone)]
pub enum FailOn {
    /// Fail get_repository with the given error.
    GetRepository(ForgeError),
    /// Fail list_closed_prs with the given error.
    ListClosedPrs(ForgeError),
}

/// Recorded operation for test verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOperation {
    GetRepository,
    ListClosedPrs,
}

impl MockForge {
    /// Create a mock forge serving the repository at `html_url`.
    pub fn new(html_url: &str) -> Self {
        let html_url = html_url.trim_end_matches('/').to_string();
        let mut segments = html_url.rsplit('/');
        let name = segments.next().unwrap_or_default();
        let owner = segments.next().unwrap_or_default();
        let full_name = format!("{}/{}", owner, name);

        Self {
            inner: Arc::new(Mutex::new(MockForgeInner {
                repository: Repository {
                    full_name,
                    html_url,
                },
                prs: Vec::new(),
                fail_on: None,
                operations: Vec::new(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockForgeInner> {
        self.inner.lock().expect("mock forge lock poisoned")
    }

    /// Build a merged PR in the `octo/widgets` fixture repository.
    ///
    /// `merged_at` is RFC 3339.
    pub fn merged_pr(number: u64, title: &str, head_sha: &str, merged_at: &str) -> PullRequest {
        let merged_at = DateTime::parse_from_rfc3339(merged_at)
            .expect("invalid RFC 3339 timestamp")
            .with_timezone(&Utc);
        PullRequest {
            merged_at: Some(merged_at),
            ..Self::closed_pr(number, title, head_sha)
        }
    }

    /// Build a PR in the `octo/widgets` fixture repository that was closed
    /// without merging.
    pub fn closed_pr(number: u64, title: &str, head_sha: &str) -> PullRequest {
        PullRequest {
            number,
            title: title.to_string(),
            url: format!("https://github.com/octo/widgets/pull/{}", number),
            head_sha: head_sha.to_string(),
            merged_at: None,
        }
    }

    /// Add a closed PR.
    pub fn add_pr(&self, pr: PullRequest) {
        self.lock().prs.push(pr);
    }

    /// Configure an operation to fail.
    pub fn fail_on(&self, fail: FailOn) {
        self.lock().fail_on = Some(fail);
    }

    /// Clear failure configuration.
    pub fn clear_fail(&self) {
        self.lock().fail_on = None;
    }

    /// Get recorded operations.
    pub fn operations(&self) -> Vec<MockOperation> {
        self.lock().operations.clone()
    }
}

#[async_trait]
impl Forge for MockForge {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn get_repository(&self) -> Result<Repository, ForgeError> {
        let mut inner = self.lock();
        inner.operations.push(MockOperation::GetRepository);

        if let Some(FailOn::GetRepository(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        Ok(inner.repository.clone())
    }

    async fn list_closed_prs(&self) -> Result<Vec<PullRequest>, ForgeError> {
        let mut inner = self.lock();
        inner.operations.push(MockOperation::ListClosedPrs);

        if let Some(FailOn::ListClosedPrs(err)) = &inner.fail_on {
            return Err(err.clone());
        }

        Ok(inner.prs.clone())
    }
}
