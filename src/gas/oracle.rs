//! Gas price oracle.
//!
//! One logical value, externalized in the cache store. Reads are
//! cache-aside: a hit is returned verbatim, a miss or a failing cache read
//! falls through to a synchronous chain fetch, and only the combination of
//! both failing surfaces an error. A fixed-period background task refreshes
//! the cached value independently of request serving; its failures are
//! logged and swallowed so the schedule never stops.

use std::sync::Arc;
use std::time::Duration;

use eyre::Result;

use crate::cache::CacheStore;
use crate::chain::ChainClient;
use crate::errors::GasPriceError;
use crate::gas::price::GasPrice;

/// Serves the current recommended gas price.
pub struct GasOracle {
    /// Gateway for base fee and fee data reads
    chain: Arc<dyn ChainClient>,
    /// Store holding the one cached gas price value
    cache: Arc<dyn CacheStore>,
    /// Key the cached value lives under
    cache_key: String,
    /// Expiry of the cached value.
    ///
    /// Configured independently of the refresh interval: a TTL shorter than
    /// the refresh period makes reads observe misses even under a healthy
    /// refresh loop.
    cache_ttl_secs: u64,
}

impl GasOracle {
    /// Creates an oracle over the given gateway and store.
    #[must_use]
    pub fn new(
        chain: Arc<dyn ChainClient>,
        cache: Arc<dyn CacheStore>,
        cache_key: String,
        cache_ttl_secs: u64,
    ) -> Self {
        Self {
            chain,
            cache,
            cache_key,
            cache_ttl_secs,
        }
    }

    /// Returns the current gas price, preferring the cached value.
    ///
    /// A cache hit is returned as stored. A miss, a failing cache read or an
    /// undecodable payload falls through to a direct chain fetch; the miss
    /// itself is never an error.
    ///
    /// # Errors
    /// * [`GasPriceError::Unavailable`] when both the cache and the chain fail
    pub async fn get_gas_price(&self) -> Result<GasPrice, GasPriceError> {
        match self.cache.get(&self.cache_key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(price) => return Ok(price),
                Err(e) => log::warn!("Discarding undecodable cached gas price: {e}"),
            },
            Ok(None) => log::info!("Gas price cache miss, fetching from chain"),
            Err(e) => log::warn!("Gas price cache read failed, falling back to chain: {e}"),
        }

        self.fetch_from_chain().await.map_err(|e| {
            log::error!("Failed to fetch gas price: {e}");
            GasPriceError::Unavailable(e.to_string())
        })
    }

    /// Fetches a fresh gas price and writes it to the cache.
    ///
    /// Runs on the refresh schedule with no caller to report to, so every
    /// failure is logged and swallowed. A failed fetch performs no write,
    /// leaving the previously cached value untouched.
    pub async fn update_gas_price(&self) {
        let price = match self.fetch_from_chain().await {
            Ok(price) => price,
            Err(e) => {
                log::error!("Failed to update gas price: {e}");
                return;
            }
        };

        let raw = match serde_json::to_string(&price) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("Failed to encode gas price for caching: {e}");
                return;
            }
        };

        match self.cache.set(&self.cache_key, &raw, self.cache_ttl_secs).await {
            Ok(()) => log::info!("Successfully updated gas price"),
            Err(e) => log::error!("Failed to cache gas price: {e}"),
        }
    }

    /// Refreshes the cached gas price every `interval`, forever.
    ///
    /// The next tick is independent of whether the previous one succeeded;
    /// there is no skip or backoff at this layer.
    pub async fn run_refresh_loop(self: Arc<Self>, interval: Duration) {
        loop {
            self.update_gas_price().await;
            tokio::time::sleep(interval).await;
        }
    }

    /// Reads the pending base fee and the network fee data concurrently and
    /// selects the gas price format.
    ///
    /// A zero/absent base fee means the chain does not support the fee
    /// market for this request, yielding the legacy format. Otherwise the
    /// max fee is recomputed as `base_fee + max_priority_fee_per_gas`; the
    /// gateway's own estimate may trail the pending base fee and is
    /// discarded.
    async fn fetch_from_chain(&self) -> Result<GasPrice> {
        let (base_fee, fee_data) =
            tokio::try_join!(self.chain.base_fee_per_gas(), self.chain.fee_data())?;

        if base_fee.is_zero() {
            return Ok(GasPrice::Legacy {
                gas_price: fee_data.gas_price,
            });
        }

        Ok(GasPrice::Eip1559 {
            base_fee,
            max_priority_fee_per_gas: fee_data.max_priority_fee_per_gas,
            max_fee_per_gas: base_fee + fee_data.max_priority_fee_per_gas,
        })
    }
}
