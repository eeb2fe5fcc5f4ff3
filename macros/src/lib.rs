//! Proc macros for repo-routes.
//!
//! # Parameter derive macro
//!
//! Maps each member of a fieldless enum to its wire string.
//!
//! ```ignore
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Parameter)]
//! pub enum ArchiveFormat {
//!     Tarball,
//!     #[parameter(value = "zip")]
//!     Zipball,
//! }
//!
//! // Generates:
//! // - ArchiveFormat::MEMBERS -> [Tarball, Zipball]
//! // - member_name(Zipball) -> "Zipball"
//! // - wire_override(Zipball) -> Some("zip"), wire_override(Tarball) -> None
//! ```
//!
//! # Attributes
//!
//! Variant-level:
//! - `#[parameter(value = "x")]` - Explicit wire string for this member

mod attr;
mod parameter;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that implements `repo_routes::parameter::Parameter`.
#[proc_macro_derive(Parameter, attributes(parameter))]
pub fn derive_parameter(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    parameter::derive(&input).into()
}
