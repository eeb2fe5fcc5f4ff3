//! Route construction error types.

use thiserror::Error;

// ============================================================================
// RouteError
// ============================================================================

/// Errors returned by route builders.
///
/// Both kinds are call-site mistakes, not transient conditions: retrying with
/// the same arguments always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl RouteError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Name of the offending argument, if this is an argument error.
    pub fn argument_name(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { name, .. } => Some(*name),
            Self::Format(_) => None,
        }
    }
}

// ============================================================================
// FormatError
// ============================================================================

/// Template substitution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unbalanced brace at byte {position} in `{template}`")]
    UnbalancedBrace { template: String, position: usize },

    #[error("invalid placeholder `{{{placeholder}}}` in `{template}`")]
    InvalidPlaceholder {
        template: String,
        placeholder: String,
    },

    #[error("placeholder {{{index}}} has no argument ({given} given) in `{template}`")]
    MissingArgument {
        template: String,
        index: usize,
        given: usize,
    },

    #[error("character {ch:?} at byte {position} is not allowed in a relative URI: `{uri}`")]
    IllegalCharacter {
        uri: String,
        ch: char,
        position: usize,
    },

    #[error("`{uri}` is not a relative URI reference: {reason}")]
    NotRelative { uri: String, reason: String },
}
