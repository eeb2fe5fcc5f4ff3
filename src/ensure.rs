//! Argument precondition checks.
//!
//! Route builders call these before touching the template so a bad call site
//! fails with the parameter name instead of producing a wrong path.

use std::time::Duration;

use crate::error::RouteError;

/// Fail when `value` is absent.
#[inline]
pub fn require_present<T>(value: Option<T>, name: &'static str) -> Result<T, RouteError> {
    value.ok_or_else(|| RouteError::invalid(name, "value cannot be absent"))
}

/// Fail when `value` is empty or whitespace-only.
#[inline]
pub fn require_non_blank<'a>(value: &'a str, name: &'static str) -> Result<&'a str, RouteError> {
    if value.trim().is_empty() {
        return Err(RouteError::invalid(name, "string cannot be empty"));
    }
    Ok(value)
}

/// Fail when `value` is blank or would end the path early.
///
/// Verbatim path text may contain `/`, but a `?` or `#` would turn the rest
/// of the value into a query or fragment.
pub fn require_path_segment<'a>(value: &'a str, name: &'static str) -> Result<&'a str, RouteError> {
    reject_delimiters(require_non_blank(value, name)?, name, &['?', '#'])
}

/// Fail when `value` is blank or would escape its `key=value` query pair.
pub fn require_query_value<'a>(value: &'a str, name: &'static str) -> Result<&'a str, RouteError> {
    reject_delimiters(require_non_blank(value, name)?, name, &['&', '#'])
}

fn reject_delimiters<'a>(
    value: &'a str,
    name: &'static str,
    delimiters: &[char],
) -> Result<&'a str, RouteError> {
    match value.chars().find(|ch| delimiters.contains(ch)) {
        Some(ch) => Err(RouteError::invalid(
            name,
            format!("`{ch}` is not allowed here, encode the value first"),
        )),
        None => Ok(value),
    }
}

/// Fail when `value` is absent, empty, or whitespace-only.
pub fn require_non_empty_string<'a>(
    value: Option<&'a str>,
    name: &'static str,
) -> Result<&'a str, RouteError> {
    require_non_blank(require_present(value, name)?, name)
}

/// Fail when `value` is absent or not strictly greater than zero.
pub fn require_positive_duration(
    value: Option<Duration>,
    name: &'static str,
) -> Result<Duration, RouteError> {
    let duration = require_present(value, name)?;
    if duration.is_zero() {
        return Err(RouteError::invalid(name, "duration must be greater than zero"));
    }
    Ok(duration)
}
