//! repo-routes - list and resolve repository API routes.

mod cli;

use anyhow::{Context, Result, bail};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use repo_routes::{RoutesConfig, debug, log, logger, routes};

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Err(err) = run(&cli) {
        log!("error"; "{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::List { json } => list_routes(*json),
        Commands::Resolve {
            route,
            args,
            absolute,
            json,
        } => {
            let config = load_config(cli)?;
            resolve_route(&config, route, args, *absolute, *json)
        }
    }
}

fn load_config(cli: &Cli) -> Result<RoutesConfig> {
    let (path, explicit) = cli.config_path();
    let config = RoutesConfig::load(path, explicit)
        .with_context(|| format!("Failed to load config `{}`", path.display()))?;
    debug!("config"; "base url {}", config.api.base_url);
    Ok(config)
}

// =============================================================================
// Commands
// =============================================================================

fn list_routes(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(routes::ROUTES)?);
        return Ok(());
    }

    let width = routes::ROUTES.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for def in routes::ROUTES {
        println!("{:<width$}  {}", def.name, def.template);
    }
    Ok(())
}

fn resolve_route(
    config: &RoutesConfig,
    name: &str,
    args: &[String],
    absolute: bool,
    json: bool,
) -> Result<()> {
    let Some(def) = routes::find(name) else {
        bail!("Unknown route `{name}`. Run `repo-routes list` to see all routes.");
    };
    debug!("resolve"; "{} <- {:?}", def.template, args);

    let uri = def
        .build(args)
        .with_context(|| format!("Failed to build route `{name}`"))?;
    let url = if absolute {
        Some(config.absolute(&uri)?)
    } else {
        None
    };
    debug!("resolve"; "{name} -> {uri}");

    if json {
        let value = serde_json::json!({
            "route": def.name,
            "uri": uri,
            "url": url.as_ref().map(url::Url::as_str),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        match url {
            Some(url) => println!("{url}"),
            None => println!("{uri}"),
        }
    }
    Ok(())
}
