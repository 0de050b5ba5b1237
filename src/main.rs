use anyhow::Result;
use random_stats::{init_logging, random_mean, serve, AppState, Orchestrator, RandomOrgFetcher, ServerConfig};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "random-stats")]
#[command(about = "Standard deviations over batches of upstream random integers")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        #[arg(short, long)]
        port: Option<u16>,

        #[arg(short = 'b', long)]
        host: Option<String>,
    },
    /// Run one fan-out and print the JSON response
    Fetch {
        #[arg(short, long)]
        requests: usize,

        #[arg(short, long)]
        length: usize,
    },
}

fn build_orchestrator(config: &ServerConfig) -> Result<Orchestrator> {
    let fetcher = RandomOrgFetcher::new(config.upstream_url.clone())?;
    Ok(Orchestrator::new(Arc::new(fetcher), config.fetch_timeout))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables before the log filter reads RUST_LOG
    dotenv::dotenv().ok();

    // Initialize logging
    init_logging();

    // Parse command line arguments
    let cli = Cli::parse();

    let config = ServerConfig::from_env()?;

    match cli.command {
        Commands::Serve { host, port } => {
            let config = config.with_overrides(host, port);
            info!(
                "Starting API server (upstream: {}, fetch timeout: {:?})",
                config.upstream_url, config.fetch_timeout
            );

            let orchestrator = build_orchestrator(&config)?;
            serve(&config, AppState::new(orchestrator)).await?;
        }
        Commands::Fetch { requests, length } => {
            let orchestrator = build_orchestrator(&config)?;

            match random_mean(&orchestrator, requests, length).await {
                Ok(response) => println!("{}", serde_json::to_string_pretty(&response)?),
                Err(e) => {
                    error!("Fetch failed: {}", e);
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}
