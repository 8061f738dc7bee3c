mod cli;
mod config;

use clap::Parser;
use cli::{Cli, Commands};
use config::FridgeConfig;
use fridge_client::FridgeClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays pipeable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = FridgeConfig::load_or_default(&cli.config)?;
    if let Some(url) = cli.api_url {
        config.api.url = url;
    }
    if let Some(url) = cli.frontend_url {
        config.api.frontend_url = url;
    }
    if let Some(day) = cli.day {
        config.routine.day = day;
    }
    let day = config.routine.day;

    match cli.command {
        Commands::Config(cmd) => cli::config_cmd::run(cmd, &cli.config),
        Commands::Dedup(args) => cli::issues::dedup_file(args),
        Commands::Issues(args) => cli::issues::run(args, &connect(&config)?, day).await,
        Commands::Tag(args) => cli::tag::run(args, &connect(&config)?).await,
        Commands::Products(cmd) => cli::products::run(cmd, &connect(&config)?, day).await,
        Commands::SkinType(cmd) => cli::skin::run(cmd, &connect(&config)?).await,
    }
}

fn connect(config: &FridgeConfig) -> anyhow::Result<FridgeClient> {
    let client = FridgeClient::new(config.client_config())?;
    tracing::debug!("Using fridge API at {}", client.config().api_url);
    Ok(client)
}
