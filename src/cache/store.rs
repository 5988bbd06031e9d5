//! Key/value store abstraction and its Redis implementation.

use async_trait::async_trait;
use eyre::Result;
use redis::AsyncCommands;

/// Asynchronous key/value store with per-key expiry.
///
/// Values are JSON strings; serialization stays with the caller so the
/// store does not need to know the payload shape.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Stores `value` under `key`, expiring after `ttl_secs` seconds.
    ///
    /// # Errors
    /// * If the store is unreachable or the write fails
    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()>;

    /// Reads the value under `key`, or `None` when the key is absent or
    /// has expired.
    ///
    /// # Errors
    /// * If the store is unreachable or the read fails
    async fn get(&self, key: &str) -> Result<Option<String>>;
}

/// [`CacheStore`] backed by a Redis server.
pub struct RedisStore {
    /// Lazily connecting Redis client
    client: redis::Client,
}

impl RedisStore {
    /// Creates a store for the Redis server at `host:port`.
    ///
    /// # Errors
    /// * If the connection URL cannot be constructed
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        let client = redis::Client::open(format!("redis://{host}:{port}"))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> Result<()> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let _: () = conn.set_ex(key, value, ttl_secs).await?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        Ok(conn.get(key).await?)
    }
}
