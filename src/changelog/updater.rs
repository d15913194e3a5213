//! changelog::updater
//!
//! The end-to-end update: commit range, PR selection, rendering, write-back.
//!
//! # Order of operations
//!
//! 1. Commit ids since the previous tag (git)
//! 2. Repository web URL (forge)
//! 3. Closed PRs (forge), filtered and sorted
//! 4. Render, preview, write
//!
//! Git runs before any network request so a missing tag fails fast. The
//! file is written in a single call only after the full contents exist in
//! memory.

use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;

use super::document::ChangelogDocument;
use super::render::{render, Release};
use super::select::merged_since;
use super::ChangelogError;
use crate::core::context::Context;
use crate::core::types::{ReleaseTag, RepoSlug, Version};
use crate::forge::github::parse_remote_url;
use crate::forge::{Forge, PullRequest};
use crate::git::Git;

/// Parameters for one changelog update.
#[derive(Debug, Clone)]
pub struct UpdateRequest {
    /// Version of the previous release (lower bound of the commit range)
    pub old_version: Version,
    /// Version being released
    pub new_version: Version,
    /// Changelog file
    pub path: PathBuf,
    /// Date printed in the section header
    pub date: NaiveDate,
}

/// What an update did.
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    /// The generated section, as previewed
    pub section: String,
    /// PRs included, in output order
    pub pull_requests: Vec<PullRequest>,
    /// File that was written
    pub path: PathBuf,
}

/// Work out `owner/name` from a git remote.
///
/// # Errors
///
/// `ChangelogError::RepositoryUnknown` when the remote is not configured or
/// its URL does not mention `host`.
pub fn derive_repository(git: &Git, remote: &str, host: &str) -> Result<RepoSlug, ChangelogError> {
    let url = git
        .remote_url(remote)?
        .ok_or_else(|| {
            ChangelogError::RepositoryUnknown(format!("git remote '{}' is not configured", remote))
        })?;

    parse_remote_url(&url, host).ok_or_else(|| {
        ChangelogError::RepositoryUnknown(format!(
            "remote '{}' ({}) is not a {} repository",
            remote, url, host
        ))
    })
}

/// Regenerate the changelog for `request.new_version`.
pub async fn update_changelog<F: Forge + ?Sized>(
    ctx: &Context,
    git: &Git,
    forge: &F,
    request: &UpdateRequest,
) -> Result<UpdateOutcome, ChangelogError> {
    let previous = ReleaseTag::for_version(&request.old_version);

    let new_shas = git.commits_since(&previous)?;
    ctx.debug(format!("{} commits since {}", new_shas.len(), previous));

    let repository = forge.get_repository().await?;
    ctx.debug(format!(
        "repository {} at {}",
        repository.full_name, repository.html_url
    ));

    let closed = forge.list_closed_prs().await?;
    let closed_count = closed.len();
    let pull_requests = merged_since(closed, &new_shas);
    ctx.debug(format!(
        "{} of {} closed pull requests merged since {}",
        pull_requests.len(),
        closed_count,
        previous
    ));
    if pull_requests.is_empty() {
        ctx.warn(format!("no merged pull requests found since {}", previous));
    }

    let document = ChangelogDocument::read(&request.path)?;
    if document.has_unreleased() {
        ctx.debug("merging unreleased section into the new release");
    }

    let release = Release {
        repo_url: repository.html_url,
        previous,
        version: request.new_version.clone(),
        date: request.date,
    };
    let rendered = render(&document, &release, &pull_requests);

    ctx.preview(&rendered.section);

    fs::write(&request.path, rendered.contents.as_bytes()).map_err(|source| {
        ChangelogError::Write {
            path: request.path.clone(),
            source,
        }
    })?;
    ctx.debug(format!("wrote {}", request.path.display()));

    Ok(UpdateOutcome {
        section: rendered.section,
        pull_requests,
        path: request.path.clone(),
    })
}
