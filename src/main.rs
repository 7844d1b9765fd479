//! finweb main entry point

use clap::Parser;
use finweb_api::start_server;
use finweb_client::ApiClient;
use finweb_config::Config;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "finweb")]
#[command(version = "0.1.0")]
#[command(about = "A lightweight web frontend for the FinanzApp finance-tracking API", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = Config::load_or_default(&args.config)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.logging.level),
    )
    .init();

    log::info!(
        "Config loaded: listening on {}:{}, downstream API {}",
        config.server.host,
        config.server.port,
        config.api.base_url
    );

    let client = Arc::new(ApiClient::new(config.api.base_url.clone()));

    let rt = Runtime::new()?;
    rt.block_on(start_server(config, client))?;

    Ok(())
}
