//! Issues, issue comments and events, labels, and milestones.
//!
//! Repository-wide comment and event collections live under `issues/`
//! next to the numbered issues, e.g. `issues/comments/{id}` versus
//! `issues/{number}/comments`.

use super::{RouteResult, route};
use crate::ensure::require_path_segment;

pub fn issues(repository_id: u64) -> RouteResult {
    route("repositories/{0}/issues", &[&repository_id])
}

pub fn issue(repository_id: u64, number: u64) -> RouteResult {
    route("repositories/{0}/issues/{1}", &[&repository_id, &number])
}

/// Lock or unlock an issue's conversation.
pub fn issue_lock(repository_id: u64, number: u64) -> RouteResult {
    route("repositories/{0}/issues/{1}/lock", &[&repository_id, &number])
}

/// A single issue comment by comment id.
pub fn issue_comment(repository_id: u64, comment_id: u64) -> RouteResult {
    route(
        "repositories/{0}/issues/comments/{1}",
        &[&repository_id, &comment_id],
    )
}

/// Comments on one issue.
pub fn issue_comments(repository_id: u64, number: u64) -> RouteResult {
    route("repositories/{0}/issues/{1}/comments", &[&repository_id, &number])
}

/// Issue comments across the repository.
pub fn repository_issue_comments(repository_id: u64) -> RouteResult {
    route("repositories/{0}/issues/comments", &[&repository_id])
}

pub fn issue_event(repository_id: u64, event_id: u64) -> RouteResult {
    route(
        "repositories/{0}/issues/events/{1}",
        &[&repository_id, &event_id],
    )
}

pub fn issue_events(repository_id: u64, number: u64) -> RouteResult {
    route("repositories/{0}/issues/{1}/events", &[&repository_id, &number])
}

pub fn repository_issue_events(repository_id: u64) -> RouteResult {
    route("repositories/{0}/issues/events", &[&repository_id])
}

pub fn issue_labels(repository_id: u64, number: u64) -> RouteResult {
    route("repositories/{0}/issues/{1}/labels", &[&repository_id, &number])
}

/// One label on one issue.
pub fn issue_label(repository_id: u64, number: u64, label_name: &str) -> RouteResult {
    let label_name = require_path_segment(label_name, "label_name")?;
    route(
        "repositories/{0}/issues/{1}/labels/{2}",
        &[&repository_id, &number, &label_name],
    )
}

pub fn labels(repository_id: u64) -> RouteResult {
    route("repositories/{0}/labels", &[&repository_id])
}

/// A repository label by name.
pub fn label(repository_id: u64, label_name: &str) -> RouteResult {
    let label_name = require_path_segment(label_name, "label_name")?;
    route("repositories/{0}/labels/{1}", &[&repository_id, &label_name])
}

pub fn milestones(repository_id: u64) -> RouteResult {
    route("repositories/{0}/milestones", &[&repository_id])
}

pub fn milestone(repository_id: u64, number: u64) -> RouteResult {
    route("repositories/{0}/milestones/{1}", &[&repository_id, &number])
}

/// Labels of every issue in a milestone.
pub fn milestone_labels(repository_id: u64, number: u64) -> RouteResult {
    route(
        "repositories/{0}/milestones/{1}/labels",
        &[&repository_id, &number],
    )
}
