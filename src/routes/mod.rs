//! Route catalog - one function per REST resource.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── repository    # metadata, people, hooks, pages, compare, archives
//! ├── contents      # contents/{path}[?ref=]
//! ├── commits       # commits, commit comments, statuses, deployments
//! ├── issues        # issues, comments, events, labels, milestones
//! ├── pulls         # pull requests and review comments
//! ├── git           # blobs, git commits, refs, tags, trees, merges
//! ├── releases      # releases and assets
//! └── catalog       # ROUTES table (name -> template -> builder)
//! ```
//!
//! Every route is a pure function: identical arguments always give the
//! same [`RelativeUri`]. Route paths are spelled out per function rather
//! than derived, since the API's nesting and pluralization are irregular.

mod catalog;
mod commits;
mod contents;
mod git;
mod issues;
mod pulls;
mod releases;
mod repository;


use std::fmt::Display;

use serde::Serialize;

use crate::ensure::require_present;
use crate::error::RouteError;
use crate::parameter::{ArchiveFormat, Parameter};
use crate::uri::{RelativeUri, format_uri};

pub use catalog::{ROUTES, find};
pub use commits::*;
pub use contents::*;
pub use git::*;
pub use issues::*;
pub use pulls::*;
pub use releases::*;
pub use repository::*;

/// Result of every route builder.
pub type RouteResult = Result<RelativeUri, RouteError>;

#[inline]
fn route(template: &str, args: &[&dyn Display]) -> RouteResult {
    Ok(format_uri(template, args)?)
}

// ============================================================================
// Route definitions
// ============================================================================

/// Semantic kind of a route parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Integer identifier rendered in decimal.
    Id,
    /// Non-blank caller text placed verbatim.
    Segment,
    /// Non-blank caller text, percent-encoded before substitution.
    NonEmpty,
    /// Enum value resolved through its wire parameter.
    Enum,
    /// Trailing segment, omitted entirely when absent.
    Optional,
}

/// One parameter of a route, in template order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
}

impl ParamSpec {
    pub const fn new(name: &'static str, kind: ParamKind) -> Self {
        Self { name, kind }
    }

    pub const fn id(name: &'static str) -> Self {
        Self::new(name, ParamKind::Id)
    }

    pub const fn segment(name: &'static str) -> Self {
        Self::new(name, ParamKind::Segment)
    }

    pub const fn is_required(&self) -> bool {
        !matches!(self.kind, ParamKind::Optional)
    }
}

/// A named route: template, parameter list, and builder.
///
/// Definitions live in the static [`ROUTES`] table and are never mutated.
#[derive(Serialize)]
pub struct RouteDef {
    pub name: &'static str,
    /// Template with every optional segment present.
    pub template: &'static str,
    pub params: &'static [ParamSpec],
    #[serde(skip)]
    build: fn(&RouteArgs<'_>) -> RouteResult,
}

impl RouteDef {
    /// Build the route from raw string arguments, in parameter order.
    ///
    /// Text is parsed according to each [`ParamKind`], then handed to the
    /// route function, so validation and encoding match direct calls.
    pub fn build(&self, values: &[String]) -> RouteResult {
        if values.len() > self.params.len() {
            return Err(RouteError::invalid(
                "args",
                format!(
                    "`{}` expects at most {} argument(s), got {}",
                    self.name,
                    self.params.len(),
                    values.len()
                ),
            ));
        }
        (self.build)(&RouteArgs {
            params: self.params,
            values,
        })
    }

    /// Number of arguments that must be supplied.
    pub fn required(&self) -> usize {
        self.params.iter().filter(|p| p.is_required()).count()
    }
}

impl std::fmt::Debug for RouteDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteDef")
            .field("name", &self.name)
            .field("template", &self.template)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Raw arguments for a [`RouteDef`] builder.
pub struct RouteArgs<'a> {
    params: &'static [ParamSpec],
    values: &'a [String],
}

impl<'a> RouteArgs<'a> {
    fn name(&self, index: usize) -> &'static str {
        self.params.get(index).map_or("argument", |p| p.name)
    }

    fn optional(&self, index: usize) -> Option<&'a str> {
        self.values.get(index).map(String::as_str)
    }

    fn text(&self, index: usize) -> Result<&'a str, RouteError> {
        require_present(self.optional(index), self.name(index))
    }

    fn id(&self, index: usize) -> Result<u64, RouteError> {
        let raw = self.text(index)?;
        raw.parse().map_err(|_| {
            RouteError::invalid(
                self.name(index),
                format!("expected an integer identifier, got `{raw}`"),
            )
        })
    }

    fn archive_format(&self, index: usize) -> Result<ArchiveFormat, RouteError> {
        let raw = self.text(index)?;
        ArchiveFormat::from_parameter(raw).ok_or_else(|| {
            let known: Vec<_> = ArchiveFormat::MEMBERS
                .iter()
                .map(|m| m.to_parameter())
                .collect();
            RouteError::invalid(
                self.name(index),
                format!("unknown archive format `{raw}`, expected one of: {}", known.join(", ")),
            )
        })
    }
}
