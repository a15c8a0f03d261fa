use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use path_router::config::load_config;
use path_router::routing::ParamValues;
use path_router::Router;

#[derive(Parser)]
#[command(name = "route-cli")]
#[command(about = "Inspect a route file offline", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routes in priority order
    List,
    /// Resolve a path to a route
    Match {
        path: String,
    },
    /// Generate a URI for a named route
    Uri {
        name: String,
        /// Parameters as key=value
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{s}'"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    let router = Router::from_config(&config.routes)?;

    match cli.command {
        Commands::List => {
            for (name, route) in router.routes().iter() {
                println!("{:<24} {:<40} {}", name, route.pattern(), route.action());
            }
        }
        Commands::Match { path } => match router.find_by_path(&path) {
            Some(found) => {
                let out = json!({
                    "route": found.name,
                    "action": found.route.action(),
                    "args": found.route.action_args(),
                    "params": found.route.values(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            None => {
                eprintln!("No route matches {path}");
                std::process::exit(1);
            }
        },
        Commands::Uri { name, params } => {
            let params: ParamValues = params.into_iter().collect();
            println!("{}", router.uri(&name, &params)?);
        }
    }

    Ok(())
}
