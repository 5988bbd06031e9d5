//! Deterministic Uniswap V2 pair address derivation.
//!
//! A pair address is computable off-chain from the factory address, the
//! canonically ordered token pair and the pair contract's init code hash.
//! The derivation must be bit-exact with the on-chain deployment scheme: any
//! deviation silently points at a wrong or non-existent pool with no error
//! signal, so this module is covered by a known mainnet vector.

use alloy::primitives::{keccak256, Address, B256};

/// Orders two token addresses into the canonical `(token0, token1)` pair.
///
/// Byte-wise ordering on [`Address`] is identical to the lexicographic
/// ordering of the lowercase hex encoding, so two requests that differ only
/// in argument order (or in letter case, which is dropped at parse time)
/// resolve to the same pair.
#[must_use]
pub fn sort_tokens(token_a: Address, token_b: Address) -> (Address, Address) {
    if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    }
}

/// Derives the pair address for an unordered token pair.
///
/// Computes the CREATE2 address
/// `keccak256(0xff ++ factory ++ keccak256(token0 ++ token1) ++ init_code_hash)`
/// truncated to 20 bytes. Pure and side-effect free.
///
/// # Arguments
/// * `token_a` - One token of the pair, in either order
/// * `token_b` - The other token of the pair
/// * `factory` - The factory contract that deploys pairs
/// * `init_code_hash` - keccak256 of the pair contract creation code
#[must_use]
pub fn pair_address(
    token_a: Address,
    token_b: Address,
    factory: Address,
    init_code_hash: B256,
) -> Address {
    let (token0, token1) = sort_tokens(token_a, token_b);

    // Tightly packed abi.encodePacked(token0, token1)
    let mut packed = [0u8; 40];
    packed[..20].copy_from_slice(token0.as_slice());
    packed[20..].copy_from_slice(token1.as_slice());
    let salt = keccak256(packed);

    factory.create2(salt, init_code_hash)
}
