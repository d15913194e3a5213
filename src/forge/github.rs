//! forge::github
//!
//! GitHub forge implementation using the REST API.
//!
//! # Authentication
//!
//! A bearer token is optional. Without one, requests are anonymous and
//! subject to GitHub's low unauthenticated rate limit. The CLI reads the
//! token from `CHANGELOG_GITHUB_TOKEN`.
//!
//! # Rate Limiting
//!
//! GitHub signals an exhausted rate limit with `429`, or with `403` and
//! `X-RateLimit-Remaining: 0`. Both map to `ForgeError::RateLimited`; there
//! is no automatic retry.
//!
//! # Example
//!
//! ```ignore
//! use github_changelog::core::types::RepoSlug;
//! use github_changelog::forge::github::GitHubForge;
//! use github_changelog::forge::Forge;
//!
//! let slug = RepoSlug::new("octocat/hello-world")?;
//! let forge = GitHubForge::new(None, &slug);
//! let prs = forge.list_closed_prs().await?;
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use super::traits::{Forge, ForgeError, PullRequest, Repository};
use crate::core::types::RepoSlug;

/// Default GitHub API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Default host name looked for in remote URLs.
pub const DEFAULT_HOST: &str = "github.com";

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "github-changelog";

/// GitHub's maximum page size.
const PER_PAGE: usize = 100;

/// GitHub forge implementation.
pub struct GitHubForge {
    /// HTTP client for making requests
    client: Client,
    /// Bearer token; anonymous when absent
    token: Option<String>,
    /// Repository owner (user or organization)
    owner: String,
    /// Repository name
    repo: String,
    /// API base URL (configurable for GitHub Enterprise)
    api_base: String,
}

// Custom Debug to avoid exposing the token
impl std::fmt::Debug for GitHubForge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubForge")
            .field("has_token", &self.token.is_some())
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl GitHubForge {
    /// Create a forge for `slug` on github.com.
    pub fn new(token: Option<String>, slug: &RepoSlug) -> Self {
        Self::with_api_base(token, slug, DEFAULT_API_BASE)
    }

    /// Create a forge with a custom API base URL.
    ///
    /// Used for GitHub Enterprise and for pointing tests at a mock server.
    /// A trailing slash on `api_base` is ignored.
    pub fn with_api_base(token: Option<String>, slug: &RepoSlug, api_base: &str) -> Self {
        Self {
            client: Client::new(),
            token: token.filter(|t| !t.trim().is_empty()),
            owner: slug.owner().to_string(),
            repo: slug.name().to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Get the repository owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Get the repository name.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Whether requests carry a bearer token.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Build common headers for API requests.
    fn headers(&self) -> Result<HeaderMap, ForgeError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                .map_err(|_| ForgeError::AuthFailed("token contains invalid characters".into()))?;
            headers.insert(AUTHORIZATION, value);
        }
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        Ok(headers)
    }

    /// Build URL for a repository endpoint.
    fn repo_url(&self, path: &str) -> String {
        if path.is_empty() {
            format!("{}/repos/{}/{}", self.api_base, self.owner, self.repo)
        } else {
            format!(
                "{}/repos/{}/{}/{}",
                self.api_base, self.owner, self.repo, path
            )
        }
    }

    async fn get<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, ForgeError> {
        let response = self
            .client
            .get(url)
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Handle API response, mapping errors appropriately.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, ForgeError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("Failed to parse response: {}", e),
            })
        } else {
            self.handle_error_response(response, status).await
        }
    }

    /// Handle an error response from the API.
    async fn handle_error_response<T>(
        &self,
        response: Response,
        status: StatusCode,
    ) -> Result<T, ForgeError> {
        let rate_limit_exhausted = response
            .headers()
            .get("X-RateLimit-Remaining")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.trim() == "0")
            .unwrap_or(false);

        let message = match response.json::<GitHubErrorResponse>().await {
            Ok(err) => err.message,
            Err(_) => "Unknown error".to_string(),
        };

        Err(match status {
            StatusCode::UNAUTHORIZED => {
                ForgeError::AuthFailed(format!("Invalid or expired token: {}", message))
            }
            StatusCode::FORBIDDEN if rate_limit_exhausted => ForgeError::RateLimited(message),
            StatusCode::FORBIDDEN => ForgeError::AuthFailed(format!("Permission denied: {}", message)),
            StatusCode::NOT_FOUND => ForgeError::NotFound(format!(
                "{}/{}: {}",
                self.owner, self.repo, message
            )),
            StatusCode::TOO_MANY_REQUESTS => ForgeError::RateLimited(message),
            _ if status.is_server_error() => ForgeError::ApiError {
                status: status.as_u16(),
                message: format!("GitHub server error: {}", message),
            },
            _ => ForgeError::ApiError {
                status: status.as_u16(),
                message,
            },
        })
    }
}

#[async_trait]
impl Forge for GitHubForge {
    fn name(&self) -> &'static str {
        "github"
    }

    async fn get_repository(&self) -> Result<Repository, ForgeError> {
        let repo: GitHubRepository = self.get(&self.repo_url("")).await?;
        Ok(repo.into())
    }

    async fn list_closed_prs(&self) -> Result<Vec<PullRequest>, ForgeError> {
        let mut all_prs = Vec::new();
        let mut page: u32 = 1;

        loop {
            let url = format!(
                "{}?state=closed&per_page={}&page={}",
                self.repo_url("pulls"),
                PER_PAGE,
                page
            );

            let page_prs: Vec<GitHubPullRequest> = self.get(&url).await?;
            let page_count = page_prs.len();
            all_prs.extend(page_prs.into_iter().map(PullRequest::from));

            // A short page is the last one
            if page_count < PER_PAGE {
                break;
            }

            page += 1;
        }

        Ok(all_prs)
    }
}

// --------------------------------------------------------------------------
// API Response Types
// --------------------------------------------------------------------------

/// GitHub error response format.
#[derive(Deserialize)]
struct GitHubErrorResponse {
    message: String,
}

/// GitHub repository response format (subset).
#[derive(Deserialize)]
struct GitHubRepository {
    full_name: String,
    html_url: String,
}

impl From<GitHubRepository> for Repository {
    fn from(repo: GitHubRepository) -> Self {
        Repository {
            full_name: repo.full_name,
            html_url: repo.html_url.trim_end_matches('/').to_string(),
        }
    }
}

/// GitHub PR list item (subset of fields).
#[derive(Deserialize)]
struct GitHubPullRequest {
    number: u64,
    title: String,
    html_url: String,
    merged_at: Option<DateTime<Utc>>,
    head: GitHubHeadRef,
}

/// GitHub head ref.
#[derive(Deserialize)]
struct GitHubHeadRef {
    sha: String,
}

impl From<GitHubPullRequest> for PullRequest {
    fn from(pr: GitHubPullRequest) -> Self {
        PullRequest {
            number: pr.number,
            title: pr.title,
            url: pr.html_url,
            head_sha: pr.head.sha,
            merged_at: pr.merged_at,
        }
    }
}

// --------------------------------------------------------------------------
// URL Parsing
// --------------------------------------------------------------------------

/// Extract the repository identity from a git remote URL.
///
/// A trailing `.git` is dropped, `host` is located anywhere in the URL and
/// the path after it (past a single `:` or `/`) is the `owner/name` slug.
/// Both SSH and HTTPS forms work:
/// - `git@github.com:owner/repo.git`
/// - `https://github.com/owner/repo.git`
/// - `ssh://git@github.com/owner/repo`
///
/// # Returns
///
/// `None` if `host` does not occur in the URL or what follows it is not an
/// `owner/name` pair.
///
/// # Example
///
/// ```
/// use github_changelog::forge::github::parse_remote_url;
///
/// let slug = parse_remote_url("git@github.com:octocat/hello-world.git", "github.com").unwrap();
/// assert_eq!(slug.owner(), "octocat");
/// assert_eq!(slug.name(), "hello-world");
/// ```
pub fn parse_remote_url(url: &str, host: &str) -> Option<RepoSlug> {
    let url = url.trim();
    let url = url.strip_suffix(".git").unwrap_or(url);

    let start = url.find(host)? + host.len();
    let rest = &url[start..];
    let rest = rest.strip_prefix(':').or_else(|| rest.strip_prefix('/'))?;

    RepoSlug::new(rest.trim_end_matches('/')).ok()
}
