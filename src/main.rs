//! Modforge - AI Minecraft mod generator CLI
//!
//! Main entry point for the Modforge application.

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use modforge::cli::{Cli, Commands};
use modforge::commands;
use modforge::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let config = Config::load(Path::new(&cli.config))?;

    match cli.command {
        Commands::Generate {
            description,
            loader,
            version,
            out,
        } => {
            tracing::info!("Starting mod generation");
            commands::handle_generate(
                &config,
                &description,
                loader.as_deref(),
                version.as_deref(),
                &out,
            )
            .await
        }
        Commands::Port {
            jar,
            loader,
            target_version,
            out,
        } => {
            tracing::info!("Starting jar porting");
            commands::handle_port(
                &config,
                &jar,
                loader.as_deref(),
                target_version.as_deref(),
                &out,
            )
            .await
        }
        Commands::Session => {
            tracing::info!("Starting interactive session");
            commands::run_session(&config).await
        }
        Commands::Versions => {
            commands::handle_versions();
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "modforge=debug" } else { "modforge=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
