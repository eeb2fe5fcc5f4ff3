//! Repository-level resources: metadata, people, hooks, pages, archives.

use super::{RouteResult, route};
use crate::ensure::{require_non_blank, require_path_segment};
use crate::parameter::{ArchiveFormat, Parameter};
use crate::uri::encode;

/// The repository itself.
pub fn repository(repository_id: u64) -> RouteResult {
    route("repositories/{0}", &[&repository_id])
}

/// Users that issues may be assigned to.
pub fn assignees(repository_id: u64) -> RouteResult {
    route("repositories/{0}/assignees", &[&repository_id])
}

/// 204 if `login` is an assignable user, 404 otherwise.
pub fn check_assignee(repository_id: u64, login: &str) -> RouteResult {
    let login = require_path_segment(login, "login")?;
    route("repositories/{0}/assignees/{1}", &[&repository_id, &login])
}

pub fn branches(repository_id: u64) -> RouteResult {
    route("repositories/{0}/branches", &[&repository_id])
}

/// A single branch. The name is placed verbatim.
pub fn branch(repository_id: u64, branch_name: &str) -> RouteResult {
    let branch_name = require_path_segment(branch_name, "branch_name")?;
    route("repositories/{0}/branches/{1}", &[&repository_id, &branch_name])
}

pub fn collaborators(repository_id: u64) -> RouteResult {
    route("repositories/{0}/collaborators", &[&repository_id])
}

pub fn contributors(repository_id: u64) -> RouteResult {
    route("repositories/{0}/contributors", &[&repository_id])
}

pub fn forks(repository_id: u64) -> RouteResult {
    route("repositories/{0}/forks", &[&repository_id])
}

pub fn languages(repository_id: u64) -> RouteResult {
    route("repositories/{0}/languages", &[&repository_id])
}

/// The preferred README.
pub fn readme(repository_id: u64) -> RouteResult {
    route("repositories/{0}/readme", &[&repository_id])
}

pub fn tags(repository_id: u64) -> RouteResult {
    route("repositories/{0}/tags", &[&repository_id])
}

pub fn teams(repository_id: u64) -> RouteResult {
    route("repositories/{0}/teams", &[&repository_id])
}

pub fn stargazers(repository_id: u64) -> RouteResult {
    route("repositories/{0}/stargazers", &[&repository_id])
}

/// Star state of the repository for the authenticated user.
pub fn starred(repository_id: u64) -> RouteResult {
    route("user/starred/{0}", &[&repository_id])
}

/// Subscription of the authenticated user.
pub fn watched(repository_id: u64) -> RouteResult {
    route("repositories/{0}/subscription", &[&repository_id])
}

/// Users watching the repository.
pub fn watchers(repository_id: u64) -> RouteResult {
    route("repositories/{0}/subscribers", &[&repository_id])
}

pub fn notifications(repository_id: u64) -> RouteResult {
    route("repositories/{0}/notifications", &[&repository_id])
}

/// Public events across the repository network.
pub fn network_events(repository_id: u64) -> RouteResult {
    route("networks/{0}/events", &[&repository_id])
}

pub fn deploy_keys(repository_id: u64) -> RouteResult {
    route("repositories/{0}/keys", &[&repository_id])
}

pub fn deploy_key(repository_id: u64, number: u64) -> RouteResult {
    route("repositories/{0}/keys/{1}", &[&repository_id, &number])
}

pub fn hooks(repository_id: u64) -> RouteResult {
    route("repositories/{0}/hooks", &[&repository_id])
}

pub fn hook(repository_id: u64, hook_id: u64) -> RouteResult {
    route("repositories/{0}/hooks/{1}", &[&repository_id, &hook_id])
}

/// Sends a `ping` event to the hook.
pub fn hook_ping(repository_id: u64, hook_id: u64) -> RouteResult {
    route("repositories/{0}/hooks/{1}/pings", &[&repository_id, &hook_id])
}

/// Triggers the hook with the latest push.
pub fn hook_test(repository_id: u64, hook_id: u64) -> RouteResult {
    route("repositories/{0}/hooks/{1}/tests", &[&repository_id, &hook_id])
}

/// Pages site information.
pub fn pages(repository_id: u64) -> RouteResult {
    route("repositories/{0}/pages", &[&repository_id])
}

pub fn page_builds(repository_id: u64) -> RouteResult {
    route("repositories/{0}/pages/builds", &[&repository_id])
}

pub fn latest_page_build(repository_id: u64) -> RouteResult {
    route("repositories/{0}/pages/builds/latest", &[&repository_id])
}

/// Comparison between two refs.
///
/// Both refs are validated and percent-encoded, then joined with `...`:
/// `("feat/a", "main")` -> `repositories/1/compare/feat%2Fa...main`
pub fn repo_compare(repository_id: u64, base: &str, head: &str) -> RouteResult {
    let base = encode(require_non_blank(base, "base")?);
    let head = encode(require_non_blank(head, "head")?);
    route(
        "repositories/{0}/compare/{1}...{2}",
        &[&repository_id, &base, &head],
    )
}

/// Download redirect for a source archive at `reference`.
pub fn repository_archive_link(
    repository_id: u64,
    archive_format: ArchiveFormat,
    reference: &str,
) -> RouteResult {
    let reference = require_path_segment(reference, "reference")?;
    let format = archive_format.to_parameter();
    route(
        "repositories/{0}/{1}/{2}",
        &[&repository_id, &format, &reference],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;

    #[test]
    fn test_repository() {
        assert_eq!(repository(1).unwrap(), "repositories/1");
        assert_eq!(
            repository(9_876_543_210).unwrap(),
            "repositories/9876543210"
        );
    }

    #[test]
    fn test_irregular_collection_names() {
        assert_eq!(watched(3).unwrap(), "repositories/3/subscription");
        assert_eq!(watchers(3).unwrap(), "repositories/3/subscribers");
        assert_eq!(deploy_keys(3).unwrap(), "repositories/3/keys");
        assert_eq!(deploy_key(3, 8).unwrap(), "repositories/3/keys/8");
        assert_eq!(starred(3).unwrap(), "user/starred/3");
        assert_eq!(network_events(3).unwrap(), "networks/3/events");
    }

    #[test]
    fn test_hook_actions() {
        assert_eq!(hook(1, 2).unwrap(), "repositories/1/hooks/2");
        assert_eq!(hook_ping(1, 2).unwrap(), "repositories/1/hooks/2/pings");
        assert_eq!(hook_test(1, 2).unwrap(), "repositories/1/hooks/2/tests");
    }

    #[test]
    fn test_pages() {
        assert_eq!(pages(1).unwrap(), "repositories/1/pages");
        assert_eq!(page_builds(1).unwrap(), "repositories/1/pages/builds");
        assert_eq!(
            latest_page_build(1).unwrap(),
            "repositories/1/pages/builds/latest"
        );
    }

    #[test]
    fn test_branch() {
        assert_eq!(branch(1, "main").unwrap(), "repositories/1/branches/main");
        assert!(matches!(
            branch(1, " "),
            Err(RouteError::InvalidArgument { name: "branch_name", .. })
        ));
        // Not encoded, so illegal characters surface as a format error
        assert!(matches!(branch(1, "my branch"), Err(RouteError::Format(_))));
        // A fragment delimiter would cut the branch name short
        assert!(matches!(
            branch(1, "fix#2"),
            Err(RouteError::InvalidArgument { name: "branch_name", .. })
        ));
    }

    #[test]
    fn test_check_assignee() {
        assert_eq!(
            check_assignee(1, "octocat").unwrap(),
            "repositories/1/assignees/octocat"
        );
        assert!(check_assignee(1, "").is_err());
    }

    #[test]
    fn test_repo_compare_encodes_both_refs() {
        assert_eq!(
            repo_compare(1, "feat/a", "main").unwrap(),
            "repositories/1/compare/feat%2Fa...main"
        );
        assert_eq!(
            repo_compare(1, "main", "user:fix #2").unwrap(),
            "repositories/1/compare/main...user%3Afix+%232"
        );
        assert_eq!(
            repo_compare(1, "v1.0", "v1.1").unwrap(),
            "repositories/1/compare/v1.0...v1.1"
        );
    }

    #[test]
    fn test_repo_compare_validates_base_first() {
        let err = repo_compare(1, "", "main").unwrap_err();
        assert!(matches!(err, RouteError::InvalidArgument { name: "base", .. }));

        let err = repo_compare(1, "main", "\t").unwrap_err();
        assert!(matches!(err, RouteError::InvalidArgument { name: "head", .. }));

        let err = repo_compare(1, "", "").unwrap_err();
        assert_eq!(err.argument_name(), Some("base"));
    }

    #[test]
    fn test_archive_link() {
        assert_eq!(
            repository_archive_link(1, ArchiveFormat::Tarball, "main").unwrap(),
            "repositories/1/tarball/main"
        );
        assert_eq!(
            repository_archive_link(1, ArchiveFormat::Zipball, "v2.0.0").unwrap(),
            "repositories/1/zipball/v2.0.0"
        );
        assert!(matches!(
            repository_archive_link(1, ArchiveFormat::Zipball, ""),
            Err(RouteError::InvalidArgument { name: "reference", .. })
        ));
    }
}
