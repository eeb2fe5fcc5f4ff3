//! Git database: blobs, commits, references, tags, trees, merges.

use super::{RouteResult, route};
use crate::ensure::require_path_segment;

/// Blob collection (target for creating blobs).
pub fn blob_root(repository_id: u64) -> RouteResult {
    route("repositories/{0}/git/blobs", &[&repository_id])
}

/// A blob by SHA.
///
/// An absent or empty `reference` omits the trailing segment entirely,
/// giving the same URI as [`blob_root`]; there is never an empty segment.
pub fn blob(repository_id: u64, reference: Option<&str>) -> RouteResult {
    match reference.filter(|r| !r.is_empty()) {
        Some(reference) => {
            let reference = require_path_segment(reference, "reference")?;
            route(
                "repositories/{0}/git/blobs/{1}",
                &[&repository_id, &reference],
            )
        }
        None => blob_root(repository_id),
    }
}

pub fn create_commit(repository_id: u64) -> RouteResult {
    route("repositories/{0}/git/commits", &[&repository_id])
}

/// A git commit object by SHA.
pub fn git_commit(repository_id: u64, reference: &str) -> RouteResult {
    let reference = require_path_segment(reference, "reference")?;
    route("repositories/{0}/git/commits/{1}", &[&repository_id, &reference])
}

pub fn references(repository_id: u64) -> RouteResult {
    route("repositories/{0}/git/refs", &[&repository_id])
}

/// A reference such as `heads/main`; the `/` is kept as a path separator.
pub fn reference(repository_id: u64, reference_name: &str) -> RouteResult {
    let reference_name = require_path_segment(reference_name, "reference_name")?;
    route(
        "repositories/{0}/git/refs/{1}",
        &[&repository_id, &reference_name],
    )
}

pub fn create_tag(repository_id: u64) -> RouteResult {
    route("repositories/{0}/git/tags", &[&repository_id])
}

/// An annotated tag object by SHA.
pub fn git_tag(repository_id: u64, reference: &str) -> RouteResult {
    let reference = require_path_segment(reference, "reference")?;
    route("repositories/{0}/git/tags/{1}", &[&repository_id, &reference])
}

pub fn trees(repository_id: u64) -> RouteResult {
    route("repositories/{0}/git/trees", &[&repository_id])
}

pub fn tree(repository_id: u64, reference: &str) -> RouteResult {
    let reference = require_path_segment(reference, "reference")?;
    route("repositories/{0}/git/trees/{1}", &[&repository_id, &reference])
}

/// Tree with every nested entry expanded.
pub fn tree_recursive(repository_id: u64, reference: &str) -> RouteResult {
    let reference = require_path_segment(reference, "reference")?;
    route(
        "repositories/{0}/git/trees/{1}?recursive=1",
        &[&repository_id, &reference],
    )
}

/// Merge target (repository-level `merges`, not under `git/`).
pub fn create_merge(repository_id: u64) -> RouteResult {
    route("repositories/{0}/merges", &[&repository_id])
}
