//! # Livepeer Node Stats - Main Entry Point
//!
//! Queries a running node's HTTP control API and prints its status as
//! bordered terminal tables: node identity and balances, then broadcaster
//! or transcoder economics, then delegator state, then the current round.

use clap::Parser;
use color_eyre::Result;
use livepeer_stats::{
    reports,
    Config,
    Mode,
    NodeClient,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "livepeer-stats")]
#[command(about = "Livepeer node status reporter")]
#[command(version)]
struct Cli {
    /// Host of the node's HTTP control API
    #[arg(long, env = "LIVEPEER_HOST", default_value = "localhost")]
    host: String,

    /// Port of the node's HTTP control API
    #[arg(long, env = "LIVEPEER_HTTP_PORT", default_value_t = 8935)]
    http_port: u16,

    /// RTMP ingest port (display only)
    #[arg(long, env = "LIVEPEER_RTMP_PORT", default_value_t = 1935)]
    rtmp_port: u16,

    /// Show transcoder stats instead of broadcaster stats
    #[arg(long)]
    transcoder: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("livepeer_stats={log_level}"))
        .init();

    color_eyre::install()?;

    let mode = if cli.transcoder {
        Mode::Transcoder
    } else {
        Mode::Broadcaster
    };
    let config = Config::new(cli.host, cli.http_port, cli.rtmp_port, mode);
    info!("Querying node at {}", config.base_url());

    let client = NodeClient::new(&config);
    let report = reports::run(&client, &config, &client).await;
    print!("{report}");

    // Best-effort by design: partial failures were already logged, and the
    // exit status stays 0 either way.
    Ok(())
}
