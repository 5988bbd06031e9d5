//! # Cache Module
//!
//! Key/value store with expiry for transiently persisted values. The store
//! is the sole hand-off point between the background gas refresh task and
//! request serving, so every operation is one atomic request/response.

/// Cache store trait and Redis implementation
pub mod store;

pub use store::{CacheStore, RedisStore};
