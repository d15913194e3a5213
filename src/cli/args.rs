//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Flags
//!
//! - `<NEW_VERSION>`: version being released (required)
//! - `--old-version` / `-o`: previous version (default: read from the manifest)
//! - `--repo` / `-r`: `owner/name` (default: derived from the git remote)
//! - `--file` / `-f`: changelog path (default: `CHANGELOG.md`)
//! - `--manifest` / `-m`: JSON manifest path (default: `package.json`)
//! - `--cwd <path>`: Run as if started in that directory
//! - `--debug` / `-d`: Enable debug logging
//! - `--quiet` / `-q`: Do not print the preview

use clap::Parser;
use std::path::PathBuf;

/// Regenerate CHANGELOG.md from pull requests merged since the last release
#[derive(Parser, Debug)]
#[command(name = "update-changelog")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
ENVIRONMENT:
    CHANGELOG_GITHUB_TOKEN     GitHub token, avoids anonymous rate limits
    CHANGELOG_GITHUB_API_URL   GitHub API base URL (GitHub Enterprise)

EXAMPLES:
    # Previous version from package.json, repository from the origin remote
    update-changelog 1.3.0

    # Everything explicit
    update-changelog 1.3.0 -o 1.2.0 -r octo/widgets -f docs/CHANGES.md")]
pub struct Cli {
    /// Version being released (e.g. 1.3.0)
    #[arg(value_name = "NEW_VERSION")]
    pub new_version: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Changelog file to update [default: CHANGELOG.md]
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Previous version; read from the manifest when omitted
    #[arg(short, long, value_name = "VERSION")]
    pub old_version: Option<String>,

    /// GitHub repository as owner/name; derived from the git remote when omitted
    #[arg(short, long, value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// JSON manifest holding the previous version [default: package.json]
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Run as if started in this directory
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Do not print the generated section
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_version_only() {
        let cli = Cli::try_parse_from(["update-changelog", "1.3.0"]).unwrap();
        assert_eq!(cli.new_version, "1.3.0");
        assert!(!cli.debug);
        assert!(cli.file.is_none());
        assert!(cli.old_version.is_none());
        assert!(cli.repo.is_none());
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from([
            "update-changelog",
            "-d",
            "-f",
            "CHANGES.md",
            "-o",
            "1.2.0",
            "-r",
            "octo/widgets",
            "1.3.0",
        ])
        .unwrap();

        assert!(cli.debug);
        assert_eq!(cli.file, Some(PathBuf::from("CHANGES.md")));
        assert_eq!(cli.old_version.as_deref(), Some("1.2.0"));
        assert_eq!(cli.repo.as_deref(), Some("octo/widgets"));
    }

    #[test]
    fn long_flags() {
        let cli = Cli::try_parse_from([
            "update-changelog",
            "2.0.0",
            "--old-version",
            "1.9.0",
            "--repo",
            "a/b",
            "--manifest",
            "app.json",
            "--quiet",
        ])
        .unwrap();

        assert_eq!(cli.old_version.as_deref(), Some("1.9.0"));
        assert_eq!(cli.manifest, Some(PathBuf::from("app.json")));
        assert!(cli.quiet);
    }

    #[test]
    fn new_version_is_required() {
        assert!(Cli::try_parse_from(["update-changelog"]).is_err());
    }
}
