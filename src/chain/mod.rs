//! # Chain Module
//!
//! Read-only access to the blockchain network: pending-block base fee,
//! network fee data and pair reserves, behind a trait so the pricing core
//! can be exercised without a node.

/// Chain client trait and JSON-RPC implementation
pub mod client;

pub use client::{ChainClient, FeeData, RpcChainClient};
