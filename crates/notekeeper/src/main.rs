//! `notekeeper` - CLI for the notes API
//!
//! This binary starts the HTTP server and offers a few configuration helpers.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;

use notekeeper::cli::{Cli, Command, ConfigCommand, ServeCommand};
use notekeeper::{init_logging, server, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    match cli.command {
        Command::Serve(serve_cmd) => {
            let config = Config::load_from(cli.config.clone())
                .context("failed to load configuration")?;
            handle_serve(config, &serve_cmd).await
        }
        Command::Config(config_cmd) => handle_config(cli.config, config_cmd),
    }
}

async fn handle_serve(mut config: Config, cmd: &ServeCommand) -> anyhow::Result<()> {
    cmd.apply_to(&mut config);
    config
        .validate()
        .context("invalid command-line overrides")?;

    server::serve(&config)
        .await
        .with_context(|| format!("server on {} failed", config.bind_addr()))
}

fn handle_config(
    config_path: Option<std::path::PathBuf>,
    cmd: ConfigCommand,
) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            let config = Config::load_from(config_path).context("failed to load configuration")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Server]");
                println!("  Host:               {}", config.server.host);
                println!("  Port:               {}", config.server.port);
                println!("  CORS enabled:       {}", config.server.cors_enabled);
                println!();
                println!("[Notes]");
                println!(
                    "  Title preview:      {} chars",
                    config.notes.title_preview_chars
                );
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file
                .or(config_path)
                .unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::load_from(Some(path)).context("configuration is invalid")?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
