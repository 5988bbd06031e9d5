//! # AMM Module
//!
//! Constant-product swap pricing against Uniswap-V2-style pools: the
//! deterministic pair address derivation and the quote engine that applies
//! the x·y=k formula with the fixed 0.3% fee.

/// Deterministic pair address derivation
pub mod pair;
/// Swap quote engine
pub mod quote;
