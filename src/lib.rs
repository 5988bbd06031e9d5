/*!
 * # Pricer - Swap Quote and Gas Price Service
 *
 * Pricer is a small HTTP service exposing two read-mostly pricing facts
 * about an EVM network: the expected output of a two-token swap against a
 * constant-product liquidity pool, and the current recommended gas price,
 * cached in Redis with a periodic background refresh.
 *
 * ## Core Features
 *
 * - **Swap Quotes**: Constant-product (x·y=k) pricing with the fixed 0.3%
 *   fee and deterministic Uniswap V2 pair address derivation
 * - **Gas Price Oracle**: Cache-aside reads with legacy/EIP-1559 format
 *   selection and a fixed-period refresh loop
 * - **Graceful Degradation**: A failing cache or refresh tick never takes
 *   down request serving
 *
 * ## Module Structure
 *
 * - `amm`: Pair address derivation and the swap quote engine
 * - `api`: HTTP routing and error mapping
 * - `cache`: Key/value store abstraction and Redis implementation
 * - `chain`: Read-only JSON-RPC gateway to the network
 * - `config`: Environment-variable configuration
 * - `errors`: Typed failure taxonomy
 * - `gas`: Gas price types and oracle
 * - `utils`: Utility functions and helpers
 */

/// Pair address derivation and the swap quote engine
pub mod amm;
/// HTTP routing and error mapping
pub mod api;
/// Key/value store abstraction and Redis implementation
pub mod cache;
/// Read-only JSON-RPC gateway to the network
pub mod chain;
/// Environment-variable configuration
pub mod config;
/// Typed failure taxonomy
pub mod errors;
/// Gas price types and oracle
pub mod gas;
/// Utility functions and helpers
pub mod utils;

/// Scripted doubles shared by the core tests
#[cfg(test)]
pub mod test_helpers;
