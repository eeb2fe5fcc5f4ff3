//! Wire names for enumerated route parameters.
//!
//! Most members map to their lowercased name; members whose API spelling
//! differs carry an explicit `#[parameter(value = "...")]` override.
//!
//! ```ignore
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Parameter)]
//! enum SortDirection {
//!     #[parameter(value = "asc")]
//!     Ascending,
//!     #[parameter(value = "desc")]
//!     Descending,
//! }
//!
//! assert_eq!(to_parameter(Some(SortDirection::Ascending)).as_deref(), Some("asc"));
//! ```

use std::borrow::Cow;

pub use macros::Parameter;

/// An enum whose members have a wire-level string form.
///
/// Implemented by `#[derive(Parameter)]`; the override table is a `match`
/// generated at compile time.
pub trait Parameter: Copy + PartialEq + 'static {
    /// Every member, in declaration order.
    const MEMBERS: &'static [Self];

    /// Member identifier as written in source (`Tarball`).
    fn member_name(self) -> &'static str;

    /// Explicit wire string, if this member has one.
    fn wire_override(self) -> Option<&'static str>;

    /// Wire string: the override, else the lowercased member name.
    fn to_parameter(self) -> Cow<'static, str> {
        match self.wire_override() {
            Some(wire) => Cow::Borrowed(wire),
            None => Cow::Owned(self.member_name().to_lowercase()),
        }
    }

    /// Reverse lookup from a wire string. Exact match only.
    fn from_parameter(wire: &str) -> Option<Self> {
        Self::MEMBERS
            .iter()
            .copied()
            .find(|member| member.to_parameter() == wire)
    }
}

/// Map an optional enum value to its wire string.
///
/// `None` stays `None`; nothing falls back to a default member.
#[inline]
pub fn to_parameter<P: Parameter>(value: Option<P>) -> Option<Cow<'static, str>> {
    value.map(Parameter::to_parameter)
}

/// Repository archive format used by archive link routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Parameter)]
pub enum ArchiveFormat {
    /// Gzipped tar archive (`tarball`).
    Tarball,
    /// Zip archive (`zipball`).
    Zipball,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Parameter)]
    enum SortDirection {
        #[parameter(value = "asc")]
        Ascending,
        #[parameter(value = "desc")]
        Descending,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Parameter)]
    enum MergeMethod {
        Merge,
        #[parameter(value = "Squash-And-Merge")]
        Squash,
        RebaseAndMerge,
    }

    #[test]
    fn test_archive_format_defaults() {
        assert_eq!(ArchiveFormat::Tarball.to_parameter(), "tarball");
        assert_eq!(ArchiveFormat::Zipball.to_parameter(), "zipball");
        assert_eq!(ArchiveFormat::MEMBERS, &[ArchiveFormat::Tarball, ArchiveFormat::Zipball]);
    }

    #[test]
    fn test_absent_value() {
        assert_eq!(to_parameter::<ArchiveFormat>(None), None);
        assert_eq!(
            to_parameter(Some(ArchiveFormat::Tarball)).as_deref(),
            Some("tarball")
        );
    }

    #[test]
    fn test_override_wins() {
        assert_eq!(SortDirection::Ascending.to_parameter(), "asc");
        assert_eq!(SortDirection::Descending.to_parameter(), "desc");
        assert_eq!(SortDirection::Ascending.member_name(), "Ascending");
    }

    #[test]
    fn test_override_is_verbatim() {
        // No case folding applied to overrides
        assert_eq!(MergeMethod::Squash.to_parameter(), "Squash-And-Merge");
        assert!(matches!(MergeMethod::Squash.to_parameter(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_mixed_table() {
        assert_eq!(MergeMethod::Merge.to_parameter(), "merge");
        assert_eq!(MergeMethod::RebaseAndMerge.to_parameter(), "rebaseandmerge");
        assert_eq!(MergeMethod::Merge.wire_override(), None);
        assert_eq!(MergeMethod::Squash.wire_override(), Some("Squash-And-Merge"));
    }

    #[test]
    fn test_from_parameter() {
        assert_eq!(
            ArchiveFormat::from_parameter("zipball"),
            Some(ArchiveFormat::Zipball)
        );
        assert_eq!(SortDirection::from_parameter("desc"), Some(SortDirection::Descending));
        // Member names are not wire names when overridden
        assert_eq!(SortDirection::from_parameter("descending"), None);
        assert_eq!(ArchiveFormat::from_parameter("Tarball"), None);
        assert_eq!(ArchiveFormat::from_parameter(""), None);
    }
}
