//! core::types
//!
//! Strong types for release and repository identifiers.
//!
//! # Types
//!
//! - [`Version`] - A release version as written in the manifest or on the CLI
//! - [`ReleaseTag`] - The git tag naming a release (`v<version>`)
//! - [`RepoSlug`] - A GitHub repository identity (`owner/name`)
//!
//! # Examples
//!
//! ```
//! use github_changelog::core::types::{ReleaseTag, RepoSlug, Version};
//!
//! let version = Version::new("1.2.0").unwrap();
//! assert_eq!(ReleaseTag::for_version(&version).as_str(), "v1.2.0");
//!
//! let slug = RepoSlug::new("octocat/hello-world").unwrap();
//! assert_eq!(slug.owner(), "octocat");
//! assert_eq!(slug.name(), "hello-world");
//!
//! assert!(Version::new("").is_err());
//! assert!(RepoSlug::new("no-slash").is_err());
//! ```

use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid version: {0}")]
    InvalidVersion(String),

    #[error("invalid repository '{0}': expected owner/name")]
    InvalidRepoSlug(String),
}

/// A release version.
///
/// Versions are kept as written (no semver parsing). A single leading `v`
/// is stripped so that `v1.2.0` and `1.2.0` name the same release.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    /// Create a new validated version.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidVersion` if the version is empty or
    /// contains whitespace.
    pub fn new(version: impl AsRef<str>) -> Result<Self, TypeError> {
        let raw = version.as_ref().trim();
        let stripped = raw.strip_prefix('v').unwrap_or(raw);

        if stripped.is_empty() {
            return Err(TypeError::InvalidVersion(format!(
                "'{}' is empty",
                version.as_ref()
            )));
        }
        if stripped.chars().any(char::is_whitespace) {
            return Err(TypeError::InvalidVersion(format!(
                "'{}' contains whitespace",
                raw
            )));
        }

        Ok(Self(stripped.to_string()))
    }

    /// Get the version as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A release tag in git (`v<version>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseTag(String);

impl ReleaseTag {
    /// Build the tag for a version.
    pub fn for_version(version: &Version) -> Self {
        Self(format!("v{}", version.as_str()))
    }

    /// Get the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A GitHub repository identity.
///
/// Exactly two non-empty segments separated by `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSlug {
    owner: String,
    name: String,
}

impl RepoSlug {
    /// Parse an `owner/name` string.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRepoSlug` if the string does not have
    /// exactly two non-empty segments.
    pub fn new(slug: impl AsRef<str>) -> Result<Self, TypeError> {
        let slug = slug.as_ref().trim();
        let mut parts = slug.split('/');

        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(TypeError::InvalidRepoSlug(slug.to_string())),
        }
    }

    /// Repository owner (user or organization).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod version {
        use super::*;

        #[test]
        fn plain() {
            let v = Version::new("1.2.0").unwrap();
            assert_eq!(v.as_str(), "1.2.0");
        }

        #[test]
        fn strips_leading_v() {
            let v = Version::new("v1.2.0").unwrap();
            assert_eq!(v.as_str(), "1.2.0");
        }

        #[test]
        fn trims_surrounding_whitespace() {
            let v = Version::new("  2.0.0-rc.1\n").unwrap();
            assert_eq!(v.as_str(), "2.0.0-rc.1");
        }

        #[test]
        fn rejects_empty() {
            assert!(Version::new("").is_err());
            assert!(Version::new("v").is_err());
            assert!(Version::new("   ").is_err());
        }

        #[test]
        fn rejects_inner_whitespace() {
            assert!(matches!(
                Version::new("1.2 .0"),
                Err(TypeError::InvalidVersion(_))
            ));
        }
    }

    mod release_tag {
        use super::*;

        #[test]
        fn prefixes_v() {
            let v = Version::new("1.3.0").unwrap();
            assert_eq!(ReleaseTag::for_version(&v).to_string(), "v1.3.0");
        }

        #[test]
        fn does_not_double_prefix() {
            let v = Version::new("v1.3.0").unwrap();
            assert_eq!(ReleaseTag::for_version(&v).as_str(), "v1.3.0");
        }
    }

    mod repo_slug {
        use super::*;

        #[test]
        fn parses_owner_and_name() {
            let slug = RepoSlug::new("rust-lang/cargo").unwrap();
            assert_eq!(slug.owner(), "rust-lang");
            assert_eq!(slug.name(), "cargo");
            assert_eq!(slug.to_string(), "rust-lang/cargo");
        }

        #[test]
        fn allows_dots_in_name() {
            let slug = RepoSlug::new("owner/repo.rs").unwrap();
            assert_eq!(slug.name(), "repo.rs");
        }

        #[test]
        fn rejects_missing_name() {
            assert!(RepoSlug::new("owner").is_err());
            assert!(RepoSlug::new("owner/").is_err());
            assert!(RepoSlug::new("/repo").is_err());
        }

        #[test]
        fn rejects_extra_segments() {
            assert_eq!(
                RepoSlug::new("a/b/c"),
                Err(TypeError::InvalidRepoSlug("a/b/c".into()))
            );
        }
    }
}
