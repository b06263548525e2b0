mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tyb_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::from_path(path)?,
        None => Config::load()?,
    };

    match cli.command {
        cli::Commands::Serve {
            host,
            port,
            upstream,
        } => commands::serve::handle(config, host, port, upstream).await,
        cli::Commands::Redact { json } => commands::redact::handle(&config, json),
    }
}
