//! Service bootstrap: configuration, logging, the background gas price
//! refresh task and the HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use eyre::Result;
use log::info;

use pricer::amm::quote::QuoteEngine;
use pricer::api::{self, AppState};
use pricer::cache::{CacheStore, RedisStore};
use pricer::chain::{ChainClient, RpcChainClient};
use pricer::config::Config;
use pricer::gas::oracle::GasOracle;
use pricer::utils::logger::setup_logger;

/// Command line options.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the port from APP_PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    setup_logger()?;

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    config.print();

    let chain: Arc<dyn ChainClient> = Arc::new(RpcChainClient::new(config.rpc_url.clone()));
    let cache: Arc<dyn CacheStore> =
        Arc::new(RedisStore::connect(&config.redis_host, config.redis_port)?);

    let quote_engine = Arc::new(QuoteEngine::new(
        Arc::clone(&chain),
        config.factory_address,
        config.pair_init_code_hash,
    ));
    let gas_oracle = Arc::new(GasOracle::new(
        chain,
        cache,
        config.gas_price_cache_key.clone(),
        config.gas_price_cache_ttl_secs,
    ));

    // Refresh runs on its own schedule, decoupled from request serving
    let refresh_oracle = Arc::clone(&gas_oracle);
    let interval = Duration::from_millis(config.gas_price_refresh_interval_ms);
    tokio::spawn(async move {
        info!("Starting gas price refresh task");
        refresh_oracle.run_refresh_loop(interval).await;
    });

    let app = api::router(AppState {
        quote_engine,
        gas_oracle,
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
