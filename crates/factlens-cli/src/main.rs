//! FactLens CLI - Command-line front end for claim highlighting and checking.

use clap::Parser;
use factlens_cli::commands;
use factlens_cli::repl;
use factlens_cli::{Cli, Command, Config, Formatter};
use factlens_sdk::ApiClient;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for JSON output.
fn init_tracing(verbose: bool, color: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(color)
        .init();
}

async fn run() -> factlens_cli::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let color_enabled = config.color_enabled(cli.no_color);
    init_tracing(cli.verbose, color_enabled);

    if let Some(profile_name) = cli.profile.clone() {
        config.switch_profile(profile_name)?;
    }

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let formatter = Formatter::new(format, color_enabled);

    let api_url = cli.api_url.as_deref();

    match cli.command {
        None => {
            let client = optional_client(&config, api_url);
            repl::run_repl(&config, client, None, &formatter).await?;
        }
        Some(Command::Repl(args)) => {
            let client = optional_client(&config, api_url);
            repl::run_repl(&config, client, args.seed, &formatter).await?;
        }
        Some(Command::Check(args)) => {
            commands::execute_check(args, &config, &formatter).await?;
        }
        Some(Command::Profile(args)) => {
            commands::execute_profile(args, &mut config, &formatter).await?;
        }
        Some(cmd) => {
            // Commands that talk to the backend
            let client = ApiClient::new(config.client_config(api_url)?)?;

            match cmd {
                Command::Extract(args) => {
                    commands::execute_extract(args, &client, &formatter).await?;
                }
                Command::Verify(args) => {
                    commands::execute_verify(args, &client, &formatter).await?;
                }
                Command::Sources => {
                    commands::execute_sources(&client, &formatter).await?;
                }
                Command::Health => {
                    commands::execute_health(&client, &formatter).await?;
                }
                Command::Tones => {
                    commands::execute_tones(&client, &formatter).await?;
                }
                Command::Platforms => {
                    commands::execute_platforms(&client, &formatter).await?;
                }
                Command::Rewrite(args) => {
                    commands::execute_rewrite(args, &client, &formatter).await?;
                }
                Command::Comments(args) => {
                    commands::execute_comments(args, &client, &formatter).await?;
                }
                _ => unreachable!(),
            }
        }
    }

    Ok(())
}

/// A client if the configured backend URL is usable; the REPL works without one.
fn optional_client(config: &Config, api_url: Option<&str>) -> Option<ApiClient> {
    let client = config
        .client_config(api_url)
        .and_then(|c| ApiClient::new(c).map_err(Into::into));
    match client {
        Ok(client) => Some(client),
        Err(e) => {
            warn!("Backend unavailable: {}", e);
            None
        }
    }
}
