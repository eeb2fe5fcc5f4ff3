//! Percent-encoding for caller text placed inside a path segment.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes left as-is: alphanumerics, `-_.!*()`, and space (rewritten to `+`).
const FORM_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'*')
    .remove(b'(')
    .remove(b')')
    .remove(b' ');

/// Encode `token` for use as a single URI segment.
///
/// Form-style: space becomes `+`, reserved and non-ASCII bytes become
/// uppercase `%XX`. A literal `+` is escaped first, so output stays
/// unambiguous.
///
/// # Examples
/// ```
/// use repo_routes::uri::encode;
/// assert_eq!(encode("feat/a"), "feat%2Fa");
/// assert_eq!(encode("my branch"), "my+branch");
/// ```
pub fn encode(token: &str) -> String {
    utf8_percent_encode(token, FORM_SEGMENT)
        .to_string()
        .replace(' ', "+")
}
