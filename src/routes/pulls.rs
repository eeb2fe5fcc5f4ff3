//! Pull requests and review comments.

use super::{RouteResult, route};

pub fn pull_requests(repository_id: u64) -> RouteResult {
    route("repositories/{0}/pulls", &[&repository_id])
}

pub fn pull_request(repository_id: u64, number: u64) -> RouteResult {
    route("repositories/{0}/pulls/{1}", &[&repository_id, &number])
}

pub fn pull_request_commits(repository_id: u64, number: u64) -> RouteResult {
    route("repositories/{0}/pulls/{1}/commits", &[&repository_id, &number])
}

pub fn pull_request_files(repository_id: u64, number: u64) -> RouteResult {
    route("repositories/{0}/pulls/{1}/files", &[&repository_id, &number])
}

/// Merge state of a pull request (`GET` checks, `PUT` merges).
pub fn merge_pull_request(repository_id: u64, number: u64) -> RouteResult {
    route("repositories/{0}/pulls/{1}/merge", &[&repository_id, &number])
}

/// A single review comment by comment id.
pub fn pull_request_review_comment(repository_id: u64, comment_id: u64) -> RouteResult {
    route(
        "repositories/{0}/pulls/comments/{1}",
        &[&repository_id, &comment_id],
    )
}

/// Review comments on one pull request.
pub fn pull_request_review_comments(repository_id: u64, number: u64) -> RouteResult {
    route("repositories/{0}/pulls/{1}/comments", &[&repository_id, &number])
}

/// Review comments across the repository.
pub fn repository_review_comments(repository_id: u64) -> RouteResult {
    route("repositories/{0}/pulls/comments", &[&repository_id])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_requests() {
        assert_eq!(pull_requests(1).unwrap(), "repositories/1/pulls");
        assert_eq!(pull_request(1, 8).unwrap(), "repositories/1/pulls/8");
        assert_eq!(
            pull_request_commits(1, 8).unwrap(),
            "repositories/1/pulls/8/commits"
        );
        assert_eq!(pull_request_files(1, 8).unwrap(), "repositories/1/pulls/8/files");
        assert_eq!(merge_pull_request(1, 8).unwrap(), "repositories/1/pulls/8/merge");
    }

    #[test]
    fn test_review_comment_nesting() {
        assert_eq!(
            pull_request_review_comment(1, 8).unwrap(),
            "repositories/1/pulls/comments/8"
        );
        assert_eq!(
            pull_request_review_comments(1, 8).unwrap(),
            "repositories/1/pulls/8/comments"
        );
        assert_eq!(
            repository_review_comments(1).unwrap(),
            "repositories/1/pulls/comments"
        );
    }
}
