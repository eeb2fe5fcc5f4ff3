//! Releases and release assets.

use super::{RouteResult, route};

pub fn releases(repository_id: u64) -> RouteResult {
    route("repositories/{0}/releases", &[&repository_id])
}

pub fn release(repository_id: u64, release_id: u64) -> RouteResult {
    route("repositories/{0}/releases/{1}", &[&repository_id, &release_id])
}

/// Latest published full release.
pub fn latest_release(repository_id: u64) -> RouteResult {
    route("repositories/{0}/releases/latest", &[&repository_id])
}

/// Assets attached to one release.
pub fn release_assets(repository_id: u64, release_id: u64) -> RouteResult {
    route(
        "repositories/{0}/releases/{1}/assets",
        &[&repository_id, &release_id],
    )
}

/// A single asset, addressed by asset id alone.
pub fn release_asset(repository_id: u64, asset_id: u64) -> RouteResult {
    route(
        "repositories/{0}/releases/assets/{1}",
        &[&repository_id, &asset_id],
    )
}
