//! Commits, commit comments, statuses, and deployments.

use super::{RouteResult, route};
use crate::ensure::require_path_segment;

pub fn repository_commits(repository_id: u64) -> RouteResult {
    route("repositories/{0}/commits", &[&repository_id])
}

/// A single commit by SHA, branch, or tag.
pub fn repository_commit(repository_id: u64, reference: &str) -> RouteResult {
    let reference = require_path_segment(reference, "reference")?;
    route("repositories/{0}/commits/{1}", &[&repository_id, &reference])
}

/// A single commit comment.
pub fn commit_comment(repository_id: u64, number: u64) -> RouteResult {
    route("repositories/{0}/comments/{1}", &[&repository_id, &number])
}

/// Comments on one commit.
pub fn commit_comments(repository_id: u64, sha: &str) -> RouteResult {
    let sha = require_path_segment(sha, "sha")?;
    route("repositories/{0}/commits/{1}/comments", &[&repository_id, &sha])
}

/// Commit comments across the repository.
pub fn repository_commit_comments(repository_id: u64) -> RouteResult {
    route("repositories/{0}/comments", &[&repository_id])
}

pub fn commit_statuses(repository_id: u64, reference: &str) -> RouteResult {
    let reference = require_path_segment(reference, "reference")?;
    route(
        "repositories/{0}/commits/{1}/statuses",
        &[&repository_id, &reference],
    )
}

/// Combined status for `reference` (singular `status`).
pub fn combined_commit_status(repository_id: u64, reference: &str) -> RouteResult {
    let reference = require_path_segment(reference, "reference")?;
    route(
        "repositories/{0}/commits/{1}/status",
        &[&repository_id, &reference],
    )
}

/// Target for creating a status. Note the top-level `statuses` collection.
pub fn create_commit_status(repository_id: u64, reference: &str) -> RouteResult {
    let reference = require_path_segment(reference, "reference")?;
    route("repositories/{0}/statuses/{1}", &[&repository_id, &reference])
}

pub fn deployments(repository_id: u64) -> RouteResult {
    route("repositories/{0}/deployments", &[&repository_id])
}

pub fn deployment_statuses(repository_id: u64, deployment_id: u64) -> RouteResult {
    route(
        "repositories/{0}/deployments/{1}/statuses",
        &[&repository_id, &deployment_id],
    )
}
