//! Static route table.
//!
//! Each entry pairs a route name with its template and parameter list, and
//! builds through the same function a direct caller would use.

use super::*;

const REPO: ParamSpec = ParamSpec::id("repository_id");

/// Every route, grouped by resource.
pub static ROUTES: &[RouteDef] = &[
    // Repository
    RouteDef {
        name: "repository",
        template: "repositories/{0}",
        params: &[REPO],
        build: |a| repository(a.id(0)?),
    },
    RouteDef {
        name: "assignees",
        template: "repositories/{0}/assignees",
        params: &[REPO],
        build: |a| assignees(a.id(0)?),
    },
    RouteDef {
        name: "check_assignee",
        template: "repositories/{0}/assignees/{1}",
        params: &[REPO, ParamSpec::segment("login")],
        build: |a| check_assignee(a.id(0)?, a.text(1)?),
    },
    RouteDef {
        name: "branches",
        template: "repositories/{0}/branches",
        params: &[REPO],
        build: |a| branches(a.id(0)?),
    },
    RouteDef {
        name: "branch",
        template: "repositories/{0}/branches/{1}",
        params: &[REPO, ParamSpec::segment("branch_name")],
        build: |a| branch(a.id(0)?, a.text(1)?),
    },
    RouteDef {
        name: "collaborators",
        template: "repositories/{0}/collaborators",
        params: &[REPO],
        build: |a| collaborators(a.id(0)?),
    },
    RouteDef {
        name: "contributors",
        template: "repositories/{0}/contributors",
        params: &[REPO],
        build: |a| contributors(a.id(0)?),
    },
    RouteDef {
        name: "forks",
        template: "repositories/{0}/forks",
        params: &[REPO],
        build: |a| forks(a.id(0)?),
    },
    RouteDef {
        name: "languages",
        template: "repositories/{0}/languages",
        params: &[REPO],
        build: |a| languages(a.id(0)?),
    },
    RouteDef {
        name: "readme",
        template: "repositories/{0}/readme",
        params: &[REPO],
        build: |a| readme(a.id(0)?),
    },
    RouteDef {
        name: "tags",
        template: "repositories/{0}/tags",
        params: &[REPO],
        build: |a| tags(a.id(0)?),
    },
    RouteDef {
        name: "teams",
        template: "repositories/{0}/teams",
        params: &[REPO],
        build: |a| teams(a.id(0)?),
    },
    RouteDef {
        name: "stargazers",
        template: "repositories/{0}/stargazers",
        params: &[REPO],
        build: |a| stargazers(a.id(0)?),
    },
    RouteDef {
        name: "starred",
        template: "user/starred/{0}",
        params: &[REPO],
        build: |a| starred(a.id(0)?),
    },
    RouteDef {
        name: "watched",
        template: "repositories/{0}/subscription",
        params: &[REPO],
        build: |a| watched(a.id(0)?),
    },
    RouteDef {
        name: "watchers",
        template: "repositories/{0}/subscribers",
        params: &[REPO],
        build: |a| watchers(a.id(0)?),
    },
    RouteDef {
        name: "notifications",
        template: "repositories/{0}/notifications",
        params: &[REPO],
        build: |a| notifications(a.id(0)?),
    },
    RouteDef {
        name: "network_events",
        template: "networks/{0}/events",
        params: &[REPO],
        build: |a| network_events(a.id(0)?),
    },
    RouteDef {
        name: "deploy_keys",
        template: "repositories/{0}/keys",
        params: &[REPO],
        build: |a| deploy_keys(a.id(0)?),
    },
    RouteDef {
        name: "deploy_key",
        template: "repositories/{0}/keys/{1}",
        params: &[REPO, ParamSpec::id("number")],
        build: |a| deploy_key(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "hooks",
        template: "repositories/{0}/hooks",
        params: &[REPO],
        build: |a| hooks(a.id(0)?),
    },
    RouteDef {
        name: "hook",
        template: "repositories/{0}/hooks/{1}",
        params: &[REPO, ParamSpec::id("hook_id")],
        build: |a| hook(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "hook_ping",
        template: "repositories/{0}/hooks/{1}/pings",
        params: &[REPO, ParamSpec::id("hook_id")],
        build: |a| hook_ping(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "hook_test",
        template: "repositories/{0}/hooks/{1}/tests",
        params: &[REPO, ParamSpec::id("hook_id")],
        build: |a| hook_test(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "pages",
        template: "repositories/{0}/pages",
        params: &[REPO],
        build: |a| pages(a.id(0)?),
    },
    RouteDef {
        name: "page_builds",
        template: "repositories/{0}/pages/builds",
        params: &[REPO],
        build: |a| page_builds(a.id(0)?),
    },
    RouteDef {
        name: "latest_page_build",
        template: "repositories/{0}/pages/builds/latest",
        params: &[REPO],
        build: |a| latest_page_build(a.id(0)?),
    },
    RouteDef {
        name: "repo_compare",
        template: "repositories/{0}/compare/{1}...{2}",
        params: &[REPO, ParamSpec::new("base", ParamKind::NonEmpty), ParamSpec::new("head", ParamKind::NonEmpty)],
        build: |a| repo_compare(a.id(0)?, a.text(1)?, a.text(2)?),
    },
    RouteDef {
        name: "repository_archive_link",
        template: "repositories/{0}/{1}/{2}",
        params: &[REPO, ParamSpec::new("archive_format", ParamKind::Enum), ParamSpec::segment("reference")],
        build: |a| repository_archive_link(a.id(0)?, a.archive_format(1)?, a.text(2)?),
    },
    // Contents
    RouteDef {
        name: "repository_contents",
        template: "repositories/{0}/contents",
        params: &[REPO],
        build: |a| repository_contents(a.id(0)?),
    },
    RouteDef {
        name: "repository_content_path",
        template: "repositories/{0}/contents/{1}",
        params: &[REPO, ParamSpec::segment("path")],
        build: |a| repository_content_path(a.id(0)?, a.text(1)?),
    },
    RouteDef {
        name: "repository_content",
        template: "repositories/{0}/contents/{1}?ref={2}",
        params: &[REPO, ParamSpec::segment("path"), ParamSpec::segment("reference")],
        build: |a| repository_content(a.id(0)?, a.text(1)?, a.text(2)?),
    },
    // Commits
    RouteDef {
        name: "repository_commits",
        template: "repositories/{0}/commits",
        params: &[REPO],
        build: |a| repository_commits(a.id(0)?),
    },
    RouteDef {
        name: "repository_commit",
        template: "repositories/{0}/commits/{1}",
        params: &[REPO, ParamSpec::segment("reference")],
        build: |a| repository_commit(a.id(0)?, a.text(1)?),
    },
    RouteDef {
        name: "commit_comment",
        template: "repositories/{0}/comments/{1}",
        params: &[REPO, ParamSpec::id("number")],
        build: |a| commit_comment(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "commit_comments",
        template: "repositories/{0}/commits/{1}/comments",
        params: &[REPO, ParamSpec::segment("sha")],
        build: |a| commit_comments(a.id(0)?, a.text(1)?),
    },
    RouteDef {
        name: "repository_commit_comments",
        template: "repositories/{0}/comments",
        params: &[REPO],
        build: |a| repository_commit_comments(a.id(0)?),
    },
    RouteDef {
        name: "commit_statuses",
        template: "repositories/{0}/commits/{1}/statuses",
        params: &[REPO, ParamSpec::segment("reference")],
        build: |a| commit_statuses(a.id(0)?, a.text(1)?),
    },
    RouteDef {
        name: "combined_commit_status",
        template: "repositories/{0}/commits/{1}/status",
        params: &[REPO, ParamSpec::segment("reference")],
        build: |a| combined_commit_status(a.id(0)?, a.text(1)?),
    },
    RouteDef {
        name: "create_commit_status",
        template: "repositories/{0}/statuses/{1}",
        params: &[REPO, ParamSpec::segment("reference")],
        build: |a| create_commit_status(a.id(0)?, a.text(1)?),
    },
    RouteDef {
        name: "deployments",
        template: "repositories/{0}/deployments",
        params: &[REPO],
        build: |a| deployments(a.id(0)?),
    },
    RouteDef {
        name: "deployment_statuses",
        template: "repositories/{0}/deployments/{1}/statuses",
        params: &[REPO, ParamSpec::id("deployment_id")],
        build: |a| deployment_statuses(a.id(0)?, a.id(1)?),
    },
    // Issues
    RouteDef {
        name: "issues",
        template: "repositories/{0}/issues",
        params: &[REPO],
        build: |a| issues(a.id(0)?),
    },
    RouteDef {
        name: "issue",
        template: "repositories/{0}/issues/{1}",
        params: &[REPO, ParamSpec::id("number")],
        build: |a| issue(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "issue_lock",
        template: "repositories/{0}/issues/{1}/lock",
        params: &[REPO, ParamSpec::id("number")],
        build: |a| issue_lock(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "issue_comment",
        template: "repositories/{0}/issues/comments/{1}",
        params: &[REPO, ParamSpec::id("comment_id")],
        build: |a| issue_comment(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "issue_comments",
        template: "repositories/{0}/issues/{1}/comments",
        params: &[REPO, ParamSpec::id("number")],
        build: |a| issue_comments(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "repository_issue_comments",
        template: "repositories/{0}/issues/comments",
        params: &[REPO],
        build: |a| repository_issue_comments(a.id(0)?),
    },
    RouteDef {
        name: "issue_event",
        template: "repositories/{0}/issues/events/{1}",
        params: &[REPO, ParamSpec::id("event_id")],
        build: |a| issue_event(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "issue_events",
        template: "repositories/{0}/issues/{1}/events",
        params: &[REPO, ParamSpec::id("number")],
        build: |a| issue_events(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "repository_issue_events",
        template: "repositories/{0}/issues/events",
        params: &[REPO],
        build: |a| repository_issue_events(a.id(0)?),
    },
    RouteDef {
        name: "issue_labels",
        template: "repositories/{0}/issues/{1}/labels",
        params: &[REPO, ParamSpec::id("number")],
        build: |a| issue_labels(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "issue_label",
        template: "repositories/{0}/issues/{1}/labels/{2}",
        params: &[REPO, ParamSpec::id("number"), ParamSpec::segment("label_name")],
        build: |a| issue_label(a.id(0)?, a.id(1)?, a.text(2)?),
    },
    RouteDef {
        name: "labels",
        template: "repositories/{0}/labels",
        params: &[REPO],
        build: |a| labels(a.id(0)?),
    },
    RouteDef {
        name: "label",
        template: "repositories/{0}/labels/{1}",
        params: &[REPO, ParamSpec::segment("label_name")],
        build: |a| label(a.id(0)?, a.text(1)?),
    },
    RouteDef {
        name: "milestones",
        template: "repositories/{0}/milestones",
        params: &[REPO],
        build: |a| milestones(a.id(0)?),
    },
    RouteDef {
        name: "milestone",
        template: "repositories/{0}/milestones/{1}",
        params: &[REPO, ParamSpec::id("number")],
        build: |a| milestone(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "milestone_labels",
        template: "repositories/{0}/milestones/{1}/labels",
        params: &[REPO, ParamSpec::id("number")],
        build: |a| milestone_labels(a.id(0)?, a.id(1)?),
    },
    // Pull requests
    RouteDef {
        name: "pull_requests",
        template: "repositories/{0}/pulls",
        params: &[REPO],
        build: |a| pull_requests(a.id(0)?),
    },
    RouteDef {
        name: "pull_request",
        template: "repositories/{0}/pulls/{1}",
        params: &[REPO, ParamSpec::id("number")],
        build: |a| pull_request(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "pull_request_commits",
        template: "repositories/{0}/pulls/{1}/commits",
        params: &[REPO, ParamSpec::id("number")],
        build: |a| pull_request_commits(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "pull_request_files",
        template: "repositories/{0}/pulls/{1}/files",
        params: &[REPO, ParamSpec::id("number")],
        build: |a| pull_request_files(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "merge_pull_request",
        template: "repositories/{0}/pulls/{1}/merge",
        params: &[REPO, ParamSpec::id("number")],
        build: |a| merge_pull_request(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "pull_request_review_comment",
        template: "repositories/{0}/pulls/comments/{1}",
        params: &[REPO, ParamSpec::id("comment_id")],
        build: |a| pull_request_review_comment(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "pull_request_review_comments",
        template: "repositories/{0}/pulls/{1}/comments",
        params: &[REPO, ParamSpec::id("number")],
        build: |a| pull_request_review_comments(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "repository_review_comments",
        template: "repositories/{0}/pulls/comments",
        params: &[REPO],
        build: |a| repository_review_comments(a.id(0)?),
    },
    // Git database
    RouteDef {
        name: "blob_root",
        template: "repositories/{0}/git/blobs",
        params: &[REPO],
        build: |a| blob_root(a.id(0)?),
    },
    RouteDef {
        name: "blob",
        template: "repositories/{0}/git/blobs/{1}",
        params: &[REPO, ParamSpec::new("reference", ParamKind::Optional)],
        build: |a| blob(a.id(0)?, a.optional(1)),
    },
    RouteDef {
        name: "create_commit",
        template: "repositories/{0}/git/commits",
        params: &[REPO],
        build: |a| create_commit(a.id(0)?),
    },
    RouteDef {
        name: "git_commit",
        template: "repositories/{0}/git/commits/{1}",
        params: &[REPO, ParamSpec::segment("reference")],
        build: |a| git_commit(a.id(0)?, a.text(1)?),
    },
    RouteDef {
        name: "references",
        template: "repositories/{0}/git/refs",
        params: &[REPO],
        build: |a| references(a.id(0)?),
    },
    RouteDef {
        name: "reference",
        template: "repositories/{0}/git/refs/{1}",
        params: &[REPO, ParamSpec::segment("reference_name")],
        build: |a| reference(a.id(0)?, a.text(1)?),
    },
    RouteDef {
        name: "create_tag",
        template: "repositories/{0}/git/tags",
        params: &[REPO],
        build: |a| create_tag(a.id(0)?),
    },
    RouteDef {
        name: "git_tag",
        template: "repositories/{0}/git/tags/{1}",
        params: &[REPO, ParamSpec::segment("reference")],
        build: |a| git_tag(a.id(0)?, a.text(1)?),
    },
    RouteDef {
        name: "trees",
        template: "repositories/{0}/git/trees",
        params: &[REPO],
        build: |a| trees(a.id(0)?),
    },
    RouteDef {
        name: "tree",
        template: "repositories/{0}/git/trees/{1}",
        params: &[REPO, ParamSpec::segment("reference")],
        build: |a| tree(a.id(0)?, a.text(1)?),
    },
    RouteDef {
        name: "tree_recursive",
        template: "repositories/{0}/git/trees/{1}?recursive=1",
        params: &[REPO, ParamSpec::segment("reference")],
        build: |a| tree_recursive(a.id(0)?, a.text(1)?),
    },
    RouteDef {
        name: "create_merge",
        template: "repositories/{0}/merges",
        params: &[REPO],
        build: |a| create_merge(a.id(0)?),
    },
    // Releases
    RouteDef {
        name: "releases",
        template: "repositories/{0}/releases",
        params: &[REPO],
        build: |a| releases(a.id(0)?),
    },
    RouteDef {
        name: "release",
        template: "repositories/{0}/releases/{1}",
        params: &[REPO, ParamSpec::id("release_id")],
        build: |a| release(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "latest_release",
        template: "repositories/{0}/releases/latest",
        params: &[REPO],
        build: |a| latest_release(a.id(0)?),
    },
    RouteDef {
        name: "release_assets",
        template: "repositories/{0}/releases/{1}/assets",
        params: &[REPO, ParamSpec::id("release_id")],
        build: |a| release_assets(a.id(0)?, a.id(1)?),
    },
    RouteDef {
        name: "release_asset",
        template: "repositories/{0}/releases/assets/{1}",
        params: &[REPO, ParamSpec::id("asset_id")],
        build: |a| release_asset(a.id(0)?, a.id(1)?),
    },
];

/// Look up a route by name.
pub fn find(name: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|def| def.name == name)
}
