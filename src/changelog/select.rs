//! changelog::select
//!
//! Choosing which pull requests belong to a release.
//!
//! A PR belongs to the release when its head commit is among the commits
//! introduced since the previous tag and it was actually merged. Closed but
//! unmerged PRs never qualify, even if their head commit is in range.

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::forge::PullRequest;

/// Keep merged PRs whose head commit is in `new_shas`, newest merge first.
///
/// PRs with equal merge times keep their input order.
pub fn merged_since(prs: Vec<PullRequest>, new_shas: &HashSet<String>) -> Vec<PullRequest> {
    let mut merged: Vec<PullRequest> = prs
        .into_iter()
        .filter(|pr| pr.merged_at.is_some() && new_shas.contains(&pr.head_sha))
        .collect();

    merged.sort_by_key(|pr| Reverse(pr.merged_at));
    merged
}
