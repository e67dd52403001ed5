pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod entities;
pub mod ingest;
pub mod models;
pub mod parser;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub use config::Config;

use cli::commands::{cmd_config_init, cmd_config_show, cmd_ingest, cmd_serve, cmd_stats};
use cli::{Cli, Commands};

pub async fn run() -> anyhow::Result<()> {
    let config = Config::load()?;
    config.validate()?;

    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // RUST_LOG wins over the configured level.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        cli::print_help();
        return Ok(());
    };

    match command {
        Commands::Ingest { titles, credits } => {
            cmd_ingest(&config, titles.as_deref(), credits.as_deref()).await
        }
        Commands::Serve { port } => cmd_serve(&config, port).await,
        Commands::Stats => cmd_stats(&config).await,
        Commands::Init => cmd_config_init(),
        Commands::Config => cmd_config_show(&config),
    }
}
