//! Relative URI type for request targets.
//!
//! - Only [`format_uri`] constructs a [`RelativeUri`]
//! - Always a relative reference: no scheme, no authority
//! - Never decoded or normalized after construction

mod encode;
mod template;

use std::borrow::Borrow;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use url::Url;

pub use encode::encode;
pub use template::format_uri;

/// Relative request target, e.g. `repositories/1/issues/42`.
///
/// Invariants:
/// - Passed relative-reference validation when formatted
/// - Contains no raw caller text where an encoded token is required
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativeUri(Arc<str>);

impl RelativeUri {
    /// Wrap an already validated string. Only the formatter calls this.
    fn from_validated(uri: String) -> Self {
        Self(Arc::from(uri))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path component (everything before `?` or `#`).
    pub fn path(&self) -> &str {
        self.0.split(['?', '#']).next().unwrap_or(&self.0)
    }

    /// Query component without the leading `?`.
    ///
    /// `contents/a?ref=main` -> `Some("ref=main")`, `contents/a` -> `None`
    pub fn query(&self) -> Option<&str> {
        let before_fragment = self.0.split('#').next().unwrap_or(&self.0);
        before_fragment.split_once('?').map(|(_, query)| query)
    }

    /// Resolve against an API base URL.
    ///
    /// The base should end with `/`, otherwise its last path segment is
    /// replaced (standard reference resolution).
    pub fn join(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(&self.0)
    }
}

impl std::fmt::Display for RelativeUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RelativeUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RelativeUri {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RelativeUri {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for RelativeUri {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for RelativeUri {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(template: &str, args: &[&dyn std::fmt::Display]) -> RelativeUri {
        format_uri(template, args).unwrap()
    }

    #[test]
    fn test_path_and_query() {
        let with_query = uri("repositories/{0}/contents/{1}?ref={2}", &[&1, &"a.rs", &"main"]);
        assert_eq!(with_query.path(), "repositories/1/contents/a.rs");
        assert_eq!(with_query.query(), Some("ref=main"));

        let plain = uri("repositories/{0}", &[&7]);
        assert_eq!(plain.path(), "repositories/7");
        assert_eq!(plain.query(), None);
    }

    #[test]
    fn test_join_keeps_base_prefix() {
        let target = uri("repositories/{0}/issues", &[&5]);

        let base = Url::parse("https://api.github.com/").unwrap();
        assert_eq!(
            target.join(&base).unwrap().as_str(),
            "https://api.github.com/repositories/5/issues"
        );

        let enterprise = Url::parse("https://ghe.example.com/api/v3/").unwrap();
        assert_eq!(
            target.join(&enterprise).unwrap().as_str(),
            "https://ghe.example.com/api/v3/repositories/5/issues"
        );
    }

    #[test]
    fn test_join_preserves_encoding() {
        let target = uri("repositories/{0}/compare/{1}...{2}", &[&1, &"feat%2Fa", &"main"]);
        let base = Url::parse("https://api.github.com/").unwrap();
        assert_eq!(
            target.join(&base).unwrap().path(),
            "/repositories/1/compare/feat%2Fa...main"
        );
    }

    #[test]
    fn test_display_and_equality() {
        let a = uri("repositories/{0}", &[&1]);
        let b = uri("repositories/{0}", &[&1]);
        assert_eq!(a, b);
        assert_eq!(a, "repositories/1");
        assert_eq!(format!("{a}"), "repositories/1");
        let s: &str = a.as_ref();
        assert_eq!(s, "repositories/1");
    }

    #[test]
    fn test_serialize() {
        let target = uri("repositories/{0}/git/trees/{1}?recursive=1", &[&1, &"abc"]);
        let json = serde_json::to_string(&target).unwrap();
        assert_eq!(json, r#""repositories/1/git/trees/abc?recursive=1""#);
    }
}
