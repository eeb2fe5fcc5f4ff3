//! Repository contents.
//!
//! Paths are placed verbatim so nested directories keep their `/`
//! separators; a path with characters outside the URI grammar fails
//! formatting instead of being silently rewritten.

use super::{RouteResult, route};
use crate::ensure::{require_path_segment, require_query_value};

/// Root directory listing.
pub fn repository_contents(repository_id: u64) -> RouteResult {
    route("repositories/{0}/contents", &[&repository_id])
}

/// File or directory at `path` on the default branch.
pub fn repository_content_path(repository_id: u64, path: &str) -> RouteResult {
    let path = require_path_segment(path, "path")?;
    route("repositories/{0}/contents/{1}", &[&repository_id, &path])
}

/// File or directory at `path` as of `reference`.
///
/// `(1, "src/app.ts", "main")` -> `repositories/1/contents/src/app.ts?ref=main`
pub fn repository_content(repository_id: u64, path: &str, reference: &str) -> RouteResult {
    let path = require_path_segment(path, "path")?;
    let reference = require_query_value(reference, "reference")?;
    route(
        "repositories/{0}/contents/{1}?ref={2}",
        &[&repository_id, &path, &reference],
    )
}
