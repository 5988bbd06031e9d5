//! Environment-variable configuration.
//!
//! Loaded once at startup; a missing or malformed variable aborts boot with
//! a message naming the variable. `dotenv` is applied by the binary before
//! this module reads the environment.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use alloy::primitives::{Address, B256};
use eyre::{eyre, Result};
use url::Url;

/// Runtime configuration for the service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds to (`APP_PORT`)
    pub port: u16,
    /// JSON-RPC endpoint of the chain node (`RPC_URL`)
    pub rpc_url: Url,
    /// Redis host (`REDIS_HOST`, default `localhost`)
    pub redis_host: String,
    /// Redis port (`REDIS_PORT`, default 6379)
    pub redis_port: u16,
    /// Key the cached gas price lives under (`GAS_PRICE_CACHE_KEY`)
    pub gas_price_cache_key: String,
    /// Expiry of the cached gas price in seconds
    /// (`GAS_PRICE_CACHE_TTL`, default 60).
    ///
    /// Independent of the refresh interval; a TTL shorter than the refresh
    /// period lets reads observe cache misses under a healthy refresh loop.
    pub gas_price_cache_ttl_secs: u64,
    /// Period of the background gas price refresh in milliseconds
    /// (`GAS_PRICE_UPDATE_INTERVAL_MS`, default 2000)
    pub gas_price_refresh_interval_ms: u64,
    /// Pair factory contract (`UNISWAP_V2_FACTORY_ADDRESS`)
    pub factory_address: Address,
    /// keccak256 of the pair creation code (`UNISWAP_V2_PAIR_INIT_CODE_HASH`)
    pub pair_init_code_hash: B256,
}

impl Config {
    /// Loads and validates the configuration from the environment.
    ///
    /// # Errors
    /// * If a required variable is unset or fails to parse
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: parsed_var("APP_PORT")?,
            rpc_url: parsed_var("RPC_URL")?,
            redis_host: env::var("REDIS_HOST").unwrap_or_else(|_| "localhost".to_string()),
            redis_port: parsed_var_or("REDIS_PORT", 6379)?,
            gas_price_cache_key: required_var("GAS_PRICE_CACHE_KEY")?,
            gas_price_cache_ttl_secs: parsed_var_or("GAS_PRICE_CACHE_TTL", 60)?,
            gas_price_refresh_interval_ms: parsed_var_or("GAS_PRICE_UPDATE_INTERVAL_MS", 2_000)?,
            factory_address: parsed_var("UNISWAP_V2_FACTORY_ADDRESS")?,
            pair_init_code_hash: parsed_var("UNISWAP_V2_PAIR_INIT_CODE_HASH")?,
        })
    }

    /// Logs the non-secret parts of the configuration at startup.
    pub fn print(&self) {
        log::info!("APP_PORT: {}", self.port);
        log::info!("REDIS: {}:{}", self.redis_host, self.redis_port);
        log::info!(
            "GAS_PRICE_CACHE: key={} ttl={}s refresh={}ms",
            self.gas_price_cache_key,
            self.gas_price_cache_ttl_secs,
            self.gas_price_refresh_interval_ms
        );
        log::info!("UNISWAP_V2_FACTORY_ADDRESS: {}", self.factory_address);
    }
}

/// Reads a required variable as a string.
fn required_var(name: &str) -> Result<String> {
    env::var(name).map_err(|_| eyre!("{name} must be set"))
}

/// Reads and parses a required variable.
fn parsed_var<T>(name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    required_var(name)?
        .parse()
        .map_err(|e| eyre!("{name} is invalid: {e}"))
}

/// Reads and parses an optional variable, falling back to `default` when unset.
fn parsed_var_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw.parse().map_err(|e| eyre!("{name} is invalid: {e}")),
        Err(_) => Ok(default),
    }
}
