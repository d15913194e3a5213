//! changelog::render
//!
//! Text rendering of a release section.
//!
//! ```text
//! Changes in [1.3.0](https://github.com/o/r/releases/tag/v1.3.0) (2024-01-01)
//! ===========================================================================
//! [Full Changelog](https://github.com/o/r/compare/v1.2.0...v1.3.0)
//!
//!  * Fix bug
//!    [\#42](https://github.com/o/r/pull/42)
//! ```

use chrono::NaiveDate;
use textwrap::{Options, WordSeparator, WrapAlgorithm};

use crate::core::types::{ReleaseTag, Version};
use crate::forge::PullRequest;

use super::document::ChangelogDocument;

/// Column limit for PR bullets.
pub const WRAP_WIDTH: usize = 79;

/// Prefix of the first line of a bullet.
pub const BULLET_INDENT: &str = " * ";

/// Prefix of continuation lines (and the PR reference line).
pub const CONTINUATION_INDENT: &str = "   ";

/// Identifies the release being written.
#[derive(Debug, Clone)]
pub struct Release {
    /// Web URL of the repository, without trailing slash
    pub repo_url: String,
    /// Tag of the previous release
    pub previous: ReleaseTag,
    /// Version being released
    pub version: Version,
    /// Release date (UTC)
    pub date: NaiveDate,
}

impl Release {
    /// Tag of the release being written.
    pub fn tag(&self) -> ReleaseTag {
        ReleaseTag::for_version(&self.version)
    }

    /// Link to the release page.
    pub fn release_url(&self) -> String {
        format!("{}/releases/tag/{}", self.repo_url, self.tag())
    }

    /// Link to the diff between the previous release and this one.
    pub fn compare_url(&self) -> String {
        format!("{}/compare/{}...{}", self.repo_url, self.previous, self.tag())
    }

    /// Title, underline, comparison link and a blank line.
    pub fn header_lines(&self) -> Vec<String> {
        let title = format!(
            "Changes in [{}]({}) ({})",
            self.version,
            self.release_url(),
            self.date.format("%Y-%m-%d")
        );
        let underline = "=".repeat(title.chars().count());

        vec![
            title,
            underline,
            format!("[Full Changelog]({})", self.compare_url()),
            String::new(),
        ]
    }
}

/// Bullet lines for one pull request: the wrapped title, then its reference.
///
/// Leading and trailing whitespace of the title is dropped.
pub fn pr_lines(pr: &PullRequest) -> Vec<String> {
    // Each whitespace character becomes one space; runs are not collapsed.
    let title: String = pr
        .title
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();

    let mut lines: Vec<String> = if title.trim().is_empty() {
        vec![BULLET_INDENT.trim_end().to_string()]
    } else {
        // Greedy fill over space-separated words.
        let options = Options::new(WRAP_WIDTH)
            .initial_indent(BULLET_INDENT)
            .subsequent_indent(CONTINUATION_INDENT)
            .word_separator(WordSeparator::AsciiSpace)
            .wrap_algorithm(WrapAlgorithm::FirstFit);
        textwrap::wrap(title.trim(), options)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    };

    lines.push(format!(
        "{}[\\#{}]({})",
        CONTINUATION_INDENT, pr.number, pr.url
    ));
    lines
}

/// A rendered changelog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The new release section alone (header, merged notes, bullets).
    pub section: String,
    /// The full file contents to write.
    pub contents: String,
}

/// Render the new section and splice it above the existing document.
///
/// `prs` are emitted in the given order. Unreleased notes and the remainder
/// keep their original bytes, line endings included.
pub fn render(document: &ChangelogDocument, release: &Release, prs: &[PullRequest]) -> Rendered {
    let split = document.split();

    let mut section = String::new();
    for line in release.header_lines() {
        push_line(&mut section, &line);
    }
    for line in split.unreleased {
        push_line(&mut section, line);
    }
    for pr in prs {
        for line in pr_lines(pr) {
            push_line(&mut section, &line);
        }
    }
    section.push('\n');

    let mut contents = section.clone();
    contents.extend(split.remainder.iter().map(String::as_str));

    Rendered { section, contents }
}

/// Append `line`, terminating it with `\n` unless it already ends a line.
fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    if !line.ends_with('\n') {
        out.push('\n');
    }
}
