//! cli::commands::update
//!
//! Resolve inputs and run the changelog update.
//!
//! # Resolution
//!
//! - Previous version: `--old-version`, else the manifest's `version`
//! - Repository: `--repo`, else the configured remote's URL
//! - API base: `CHANGELOG_GITHUB_API_URL`, else config, else api.github.com
//! - Token: `CHANGELOG_GITHUB_TOKEN` (optional)
//!
//! The repository is resolved before the forge is built, so a missing
//! identity never reaches the network.
//!
//! # Example
//!
//! ```bash
//! update-changelog 1.3.0
//! update-changelog 1.3.0 --old-version 1.2.0 --repo octo/widgets
//! ```

use std::path::Path;

use anyhow::{Context as _, Result};
use chrono::Utc;

use crate::changelog::{derive_repository, update_changelog, UpdateRequest};
use crate::cli::Cli;
use crate::core::config::Config;
use crate::core::context::Context;
use crate::core::manifest;
use crate::core::types::{RepoSlug, Version};
use crate::forge::github::GitHubForge;
use crate::git::Git;

/// Environment variable holding the GitHub token.
pub const TOKEN_ENV: &str = "CHANGELOG_GITHUB_TOKEN";

/// Environment variable overriding the GitHub API base URL.
pub const API_URL_ENV: &str = "CHANGELOG_GITHUB_API_URL";

/// Run the update command.
///
/// This is a synchronous wrapper that uses tokio to run the network part.
pub fn update(ctx: &Context, cli: &Cli) -> Result<()> {
    let config = Config::load(Some(ctx.work_dir())).context("Failed to load configuration")?;
    for source in config.sources() {
        ctx.debug(format!("loaded config {}", source.display()));
    }

    let new_version = Version::new(&cli.new_version)?;
    let old_version = match &cli.old_version {
        Some(v) => Version::new(v)?,
        None => {
            let path = match &cli.manifest {
                Some(p) => ctx.resolve(p),
                None => ctx.resolve(Path::new(config.manifest())),
            };
            ctx.debug(format!("reading previous version from {}", path.display()));
            manifest::read_version(&path)?
        }
    };
    ctx.debug(format!("updating {} -> {}", old_version, new_version));

    let git = Git::open(ctx)?;

    let slug = match &cli.repo {
        Some(repo) => RepoSlug::new(repo)?,
        None => derive_repository(&git, config.remote(), config.host())?,
    };
    ctx.debug(format!("repository {}", slug));

    let token = std::env::var(TOKEN_ENV)
        .ok()
        .filter(|t| !t.trim().is_empty());
    if token.is_none() {
        ctx.debug(format!("{} not set, using anonymous API access", TOKEN_ENV));
    }
    let api_base = std::env::var(API_URL_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| config.api_base().to_string());
    let forge = GitHubForge::with_api_base(token, &slug, &api_base);

    let path = match &cli.file {
        Some(p) => ctx.resolve(p),
        None => ctx.resolve(Path::new(config.file())),
    };

    let request = UpdateRequest {
        old_version,
        new_version,
        path,
        date: Utc::now().date_naive(),
    };

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let outcome = rt.block_on(update_changelog(ctx, &git, &forge, &request))?;

    ctx.debug(format!(
        "added {} pull requests to {}",
        outcome.pull_requests.len(),
        outcome.path.display()
    ));

    Ok(())
}
