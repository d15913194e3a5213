//! github-changelog - Generate changelog sections from merged GitHub pull requests
//!
//! Given the previous release's version, the tool finds the commits added
//! since its tag, matches them to merged pull requests by head commit, and
//! writes a new section at the top of the changelog. Notes collected under
//! an "Unreleased" heading are folded into the new section.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, resolves inputs)
//! - [`changelog`] - Document splitting, PR selection, rendering, update pipeline
//! - [`core`] - Domain types, configuration, manifest, run context
//! - [`git`] - Single interface for all Git operations
//! - [`forge`] - Abstraction for the remote forge (GitHub)
//! - [`ui`] - Output utilities
//!
//! # Guarantees
//!
//! 1. Every listed PR was merged and its head commit is in `<tag>..HEAD`
//! 2. PRs appear newest merge first
//! 3. The changelog is only written once the new contents are complete

pub mod changelog;
pub mod cli;
pub mod core;
pub mod forge;
pub mod git;
pub mod ui;
