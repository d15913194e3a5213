//! changelog::document
//!
//! The existing changelog file as a sequence of lines.
//!
//! # Structure
//!
//! ```text
//! Unreleased            <- optional; any line containing "unreleased"
//! ==========            <- optional underline
//!                       <- optional blank line
//! * pending note        <- body, carried into the new release
//!
//! Changes in [1.2.0](…) <- first release header ends the body
//! ...
//! ```
//!
//! Matching is deliberately literal: the first line must contain
//! `unreleased` (any case), at most one all-`=` line and one blank line are
//! skipped, and the body ends at the first line starting with `changes `
//! (any case). A file without an unreleased header is left untouched as the
//! remainder.
//!
//! Lines are stored with their terminators so both parts can be written back
//! byte for byte. Matching looks at the text without the `\n` or `\r\n`.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::ChangelogError;

/// A changelog split into its unreleased body and everything after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<'a> {
    /// Unreleased notes to merge into the new section, verbatim.
    pub unreleased: &'a [String],
    /// Lines kept unchanged below the new section.
    pub remainder: &'a [String],
}

/// An existing changelog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogDocument {
    /// Lines including their terminator (the last may have none).
    lines: Vec<String>,
}

impl ChangelogDocument {
    /// Parse changelog text into lines, keeping each line's terminator.
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// Read the changelog at `path`.
    ///
    /// A missing file reads as an empty document.
    pub fn read(path: &Path) -> Result<Self, ChangelogError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ChangelogError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Whether the document starts with an unreleased section.
    pub fn has_unreleased(&self) -> bool {
        self.lines
            .first()
            .map(|l| text(l).to_lowercase().contains("unreleased"))
            .unwrap_or(false)
    }

    /// Separate the unreleased body from the rest of the file.
    pub fn split(&self) -> Split<'_> {
        if !self.has_unreleased() {
            return Split {
                unreleased: &[],
                remainder: &self.lines,
            };
        }

        let mut i = 1;
        if self.lines.get(i).is_some_and(|l| is_underline(l)) {
            i += 1;
        }
        if self.lines.get(i).is_some_and(|l| is_blank(l)) {
            i += 1;
        }

        let body_start = i;
        while self.lines.get(i).is_some_and(|l| !is_release_header(l)) {
            i += 1;
        }

        Split {
            unreleased: &self.lines[body_start..i],
            remainder: &self.lines[i..],
        }
    }
}

/// A line without its `\n` or `\r\n`.
fn text(line: &str) -> &str {
    match line.strip_suffix('\n') {
        Some(l) => l.strip_suffix('\r').unwrap_or(l),
        None => line,
    }
}

/// `^=+$`
fn is_underline(line: &str) -> bool {
    let line = text(line);
    !line.is_empty() && line.chars().all(|c| c == '=')
}

/// `^\s*$`
fn is_blank(line: &str) -> bool {
    line.chars().all(char::is_whitespace)
}

/// A line opening a released version's section.
fn is_release_header(line: &str) -> bool {
    text(line).to_lowercase().starts_with("changes ")
}
