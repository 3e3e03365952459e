use std::fs;

use clap::Parser;
use cli::Args;
use fetch::fetch_artifacts;
use logging::setup_logging;
use route::{list_repositories, route_group};
use tracing::{info, warn};
use vane_config::{
    config::{self, generate_default_config, get_config, Config, CONFIG_PATH},
    error::ConfigError,
    manifest::{manifest_attributes, render_manifest},
    utils::resolve_path,
};
use vane_dl::http::configure_http_client;

mod cli;
mod fetch;
mod logging;
mod route;
mod utils;

fn handle_cli() -> miette::Result<()> {
    let args = Args::parse();

    setup_logging(&args);

    if args.no_color {
        let mut color = utils::COLOR.write().unwrap();
        *color = false;
    }

    if let Some(ref c) = args.config {
        let mut config_path = CONFIG_PATH.write().unwrap();
        *config_path = resolve_path(c)?;
    }

    match args.command {
        cli::Commands::DefConfig => generate_default_config()?,
        command => {
            config::init()?;

            let user_agent = args
                .user_agent
                .clone()
                .unwrap_or_else(|| get_config().user_agent());
            configure_http_client(|config| {
                config.user_agent = user_agent;
            });

            match command {
                cli::Commands::Route {
                    group,
                } => route_group(&group, args.json)?,
                cli::Commands::Fetch {
                    coordinates,
                    output,
                } => fetch_artifacts(&coordinates, output.as_deref(), args.json)?,
                cli::Commands::List => list_repositories(args.json)?,
                cli::Commands::Manifest => {
                    let config = get_config();
                    let attributes = manifest_attributes(&config.project);

                    if args.json {
                        let payload: serde_json::Map<_, _> = attributes
                            .into_iter()
                            .map(|(key, value)| (key, serde_json::Value::String(value)))
                            .collect();
                        println!("{}", serde_json::Value::Object(payload));
                    } else {
                        print!("{}", render_manifest(&attributes));
                    }
                }
                cli::Commands::Config => {
                    let config_path = CONFIG_PATH.read().unwrap().to_path_buf();
                    let content = match fs::read_to_string(&config_path) {
                        Ok(v) => v,
                        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                            warn!("Config file {} not found", config_path.display());
                            toml::to_string_pretty(&Config::default_config())
                                .map_err(ConfigError::SerializeConfig)?
                        }
                        Err(err) => return Err(ConfigError::Io(err).into()),
                    };
                    info!("{}", content);
                }
                _ => unreachable!(),
            }
        }
    }

    Ok(())
}

fn main() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    if let Err(err) = handle_cli() {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}
