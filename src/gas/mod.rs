//! # Gas Module
//!
//! The recommended gas price: a tagged legacy/EIP-1559 value and the oracle
//! that serves it cache-aside with a periodic background refresh.

/// Gas price oracle
pub mod oracle;
/// Gas price value types
pub mod price;
