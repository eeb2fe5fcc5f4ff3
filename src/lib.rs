//! repo-routes - typed relative URIs for a repository REST API.
//!
//! Every route is a pure function from typed identifiers to a
//! [`RelativeUri`]:
//!
//! ```
//! use repo_routes::routes;
//!
//! let uri = routes::issue(1, 42).unwrap();
//! assert_eq!(uri.as_str(), "repositories/1/issues/42");
//!
//! let uri = routes::repo_compare(1, "feat/a", "main").unwrap();
//! assert_eq!(uri.as_str(), "repositories/1/compare/feat%2Fa...main");
//! ```
//!
//! # Layers
//!
//! | Module      | Purpose                                              |
//! |-------------|------------------------------------------------------|
//! | `ensure`    | Argument preconditions (present, non-blank, positive) |
//! | `uri`       | `RelativeUri`, template formatter, segment encoder   |
//! | `parameter` | Enum member -> wire string, with overrides           |
//! | `routes`    | One function per resource, plus the `ROUTES` table   |
//! | `config`    | `repo-routes.toml` loading and base URL validation    |

// Lets `#[derive(Parameter)]` name the trait by one path inside and outside this crate.
extern crate self as repo_routes;

pub mod config;
pub mod ensure;
pub mod error;
pub mod logger;
pub mod parameter;
pub mod routes;
pub mod uri;

pub use config::{ConfigError, RoutesConfig};
pub use error::{FormatError, RouteError};
pub use parameter::{ArchiveFormat, Parameter, to_parameter};
pub use routes::{ParamKind, ParamSpec, ROUTES, RouteDef, RouteResult};
pub use uri::{RelativeUri, encode, format_uri};
