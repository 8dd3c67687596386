use anyhow::Result;
use clap::Parser;
use poolboard::application::{Cli, CommandExecutor};
use poolboard::shared::config::ConfigLoader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so JSON reports on stdout stay machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Priority: CLI flags > config file > defaults
    let config = ConfigLoader::load_or_default(cli.config.as_deref())?;

    CommandExecutor::execute(cli.command, config).await?;
    Ok(())
}
