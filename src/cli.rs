//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::{Path, PathBuf};

use repo_routes::config::DEFAULT_CONFIG;

/// Typed relative URIs for a repository REST API
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: repo-routes.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List every route with its template
    #[command(visible_alias = "l")]
    List {
        /// Emit route definitions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build one route from its arguments
    #[command(visible_alias = "r")]
    Resolve {
        /// Route name, as shown by `list`
        route: String,

        /// Arguments in template order (ids, names, formats)
        args: Vec<String>,

        /// Join the result with the configured base URL
        #[arg(short, long)]
        absolute: bool,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Config file to read, and whether the user named it explicitly.
    pub fn config_path(&self) -> (&Path, bool) {
        match &self.config {
            Some(path) => (path, true),
            None => (Path::new(DEFAULT_CONFIG), false),
        }
    }
}
