//! Scripted chain and cache doubles for the core tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use alloy::primitives::{address, Address, b256, B256, U256};
use async_trait::async_trait;
use eyre::{bail, Result};

use crate::amm::quote::QuoteEngine;
use crate::cache::CacheStore;
use crate::chain::{ChainClient, FeeData};
use crate::gas::oracle::GasOracle;

/// Factory used by engine tests
pub const FACTORY: Address = address!("0x5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");
/// Init code hash used by engine tests
pub const INIT_CODE_HASH: B256 =
    b256!("0x96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f");
/// Cache key used by oracle tests
pub const CACHE_KEY: &str = "gas-price";
/// Cache TTL used by oracle tests
pub const CACHE_TTL_SECS: u64 = 60;

/// Chain gateway double with fixed responses and a call counter.
pub struct MockChainClient {
    /// Pending-block base fee to report
    base_fee: U256,
    /// Fee data to report; `max_fee_per_gas` is a deliberately independent
    /// gateway estimate so tests can prove the oracle discards it
    fee_data: FeeData,
    /// Reserves to report for any pair, in canonical ordering
    reserves: (U256, U256),
    /// When false, every method fails
    healthy: bool,
    /// Number of gateway method invocations
    calls: AtomicUsize,
}

impl MockChainClient {
    /// Gateway reporting the given base fee, gas price and priority fee.
    pub fn healthy(base_fee: u64, gas_price: u64, max_priority_fee_per_gas: u64) -> Self {
        Self {
            base_fee: U256::from(base_fee),
            fee_data: FeeData {
                gas_price: U256::from(gas_price),
                max_priority_fee_per_gas: U256::from(max_priority_fee_per_gas),
                max_fee_per_gas: U256::from(gas_price),
            },
            reserves: (U256::ZERO, U256::ZERO),
            healthy: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Gateway reporting the given canonical reserves for every pair.
    pub fn with_reserves(reserve0: U256, reserve1: U256) -> Self {
        let mut mock = Self::healthy(0, 1, 0);
        mock.reserves = (reserve0, reserve1);
        mock
    }

    /// Gateway whose every call fails.
    pub fn failing() -> Self {
        let mut mock = Self::healthy(0, 0, 0);
        mock.healthy = false;
        mock
    }

    /// Number of gateway method invocations so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    async fn base_fee_per_gas(&self) -> Result<U256> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.healthy {
            bail!("chain unavailable");
        }
        Ok(self.base_fee)
    }

    async fn fee_data(&self) -> Result<FeeData> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.healthy {
            bail!("chain unavailable");
        }
        Ok(self.fee_data.clone())
    }

    async fn pair_reserves(&self, _pair: Address) -> Result<(U256, U256)> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.healthy {
            bail!("chain unavailable");
        }
        Ok(self.reserves)
    }
}

/// Cache store double over an in-memory map. TTLs are recorded, not enforced.
pub struct MockCacheStore {
    /// Stored entries
    entries: Mutex<HashMap<String, String>>,
    /// TTL of the most recent set
    last_ttl: Mutex<Option<u64>>,
    /// When false, every method fails
    healthy: bool,
}

impl MockCacheStore {
    /// Empty, healthy store.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            last_ttl: Mutex::new(None),
            healthy: true,
        }
    }

    /// Store whose every call fails.
    pub fn failing() -> Self {
        let mut mock = Self::new();
        mock.healthy = false;
        mock
    }

    /// Seeds an entry, bypassing the trait.
    #[allow(clippy::unwrap_used)]
    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Current value under `key`, bypassing the trait.
    #[allow(clippy::unwrap_used)]
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    /// TTL passed to the most recent successful set.
    #[allow(clippy::unwrap_used)]
    pub fn last_ttl(&self) -> Option<u64> {
        *self.last_ttl.lock().unwrap()
    }
}

impl Default for MockCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MockCacheStore {
    #[allow(clippy::unwrap_used)]
    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        if !self.healthy {
            bail!("store unavailable");
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        *self.last_ttl.lock().unwrap() = Some(ttl_secs);
        Ok(())
    }

    #[allow(clippy::unwrap_used)]
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if !self.healthy {
            bail!("store unavailable");
        }
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }
}

/// Builds a quote engine over the mock gateway, returning both so tests can
/// inspect gateway traffic.
pub fn quote_engine(chain: MockChainClient) -> (QuoteEngine, Arc<MockChainClient>) {
    let chain = Arc::new(chain);
    let engine = QuoteEngine::new(Arc::clone(&chain) as Arc<dyn ChainClient>, FACTORY, INIT_CODE_HASH);
    (engine, chain)
}

/// Builds a gas oracle over the mock gateway and store, returning all three.
pub fn gas_oracle(
    chain: MockChainClient,
    cache: MockCacheStore,
) -> (GasOracle, Arc<MockChainClient>, Arc<MockCacheStore>) {
    let chain = Arc::new(chain);
    let cache = Arc::new(cache);
    let oracle = GasOracle::new(
        Arc::clone(&chain) as Arc<dyn ChainClient>,
        Arc::clone(&cache) as Arc<dyn CacheStore>,
        CACHE_KEY.to_string(),
        CACHE_TTL_SECS,
    );
    (oracle, chain, cache)
}
