mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use joker_lib::{build_client, JokerConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "joker")]
#[command(about = "Fetch random jokes from the Chuck Norris joke service")]
struct Cli {
    /// Output format: text or json
    #[arg(long, default_value = "text", global = true)]
    output: String,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Joke endpoint URL (overrides config file and JOKER_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Response cache size in bytes, 0 disables the cache
    #[arg(long, global = true)]
    cache_bytes: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print one joke
    Tell,
    /// Show a joke and fetch a new one each time Enter is pressed
    Watch,
}

impl Cli {
    fn resolve_config(&self) -> Result<JokerConfig> {
        let mut config = JokerConfig::load(self.config.as_deref())?;
        if let Some(ref endpoint) = self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(cache_bytes) = self.cache_bytes {
            config.cache_bytes = cache_bytes;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("joker=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Text,
    };

    let config = cli.resolve_config()?;
    let client = build_client(&config)?;
    tracing::debug!("Using joke endpoint {}", client.endpoint());

    match &cli.command {
        Commands::Tell => commands::tell::run(&client, &format).await?,
        Commands::Watch => commands::watch::run(&client, &format).await?,
    }

    Ok(())
}
