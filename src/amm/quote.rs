//! Swap quote engine.
//!
//! Validates a swap request, resolves the pair address, fetches a fresh
//! reserve snapshot through the chain gateway and applies the
//! constant-product formula. Aside from the single network read the quote
//! is a pure function of its inputs.

use std::str::FromStr;
use std::sync::Arc;

use alloy::primitives::{Address, B256, U256, U512};

use crate::amm::pair::{pair_address, sort_tokens};
use crate::chain::ChainClient;
use crate::errors::QuoteError;

/// Fee numerator: 997/1000 encodes the fixed 0.3% pool fee.
const FEE_NUMERATOR: u64 = 997;
/// Fee denominator of the 0.3% pool fee.
const FEE_DENOMINATOR: u64 = 1000;

/// Computes the expected output of a two-token swap.
pub struct QuoteEngine {
    /// Gateway used to fetch reserve snapshots
    chain: Arc<dyn ChainClient>,
    /// Factory that deploys the pair contracts
    factory: Address,
    /// keccak256 of the pair contract creation code
    pair_init_code_hash: B256,
}

impl QuoteEngine {
    /// Creates an engine for pools deployed by `factory`.
    #[must_use]
    pub fn new(chain: Arc<dyn ChainClient>, factory: Address, pair_init_code_hash: B256) -> Self {
        Self {
            chain,
            factory,
            pair_init_code_hash,
        }
    }

    /// Quotes the output amount for swapping `amount_in` of `from_token`
    /// into `to_token` against the pair's current reserves.
    ///
    /// `amount_in` is a decimal string because realistic token amounts
    /// exceed native integer range.
    ///
    /// # Errors
    /// * [`QuoteError::InvalidInputAmount`] if `amount_in` is not a positive integer
    /// * [`QuoteError::ReserveFetchUnavailable`] if the reserve fetch fails
    /// * [`QuoteError::InsufficientLiquidity`] if either reserve is zero
    pub async fn quote(
        &self,
        from_token: Address,
        to_token: Address,
        amount_in: &str,
    ) -> Result<U256, QuoteError> {
        let pair = pair_address(from_token, to_token, self.factory, self.pair_init_code_hash);

        let amount_in = U256::from_str(amount_in).map_err(|_| {
            log::error!("Invalid input amount: {amount_in}");
            QuoteError::InvalidInputAmount(format!("not an unsigned integer: {amount_in}"))
        })?;
        if amount_in.is_zero() {
            log::error!("Invalid input amount: 0");
            return Err(QuoteError::InvalidInputAmount(
                "amount must be greater than zero".to_string(),
            ));
        }

        let (reserve_in, reserve_out) = self.directed_reserves(pair, from_token, to_token).await?;
        if reserve_in.is_zero() || reserve_out.is_zero() {
            log::error!("Invalid reserves for pair {pair}: {reserve_in} {reserve_out}");
            return Err(QuoteError::InsufficientLiquidity(format!(
                "pair {pair} has reserves {reserve_in}/{reserve_out}"
            )));
        }

        Ok(amount_out(amount_in, reserve_in, reserve_out))
    }

    /// Fetches raw reserves for `pair` and reorders them to match the
    /// caller's `(from_token, to_token)` direction.
    async fn directed_reserves(
        &self,
        pair: Address,
        from_token: Address,
        to_token: Address,
    ) -> Result<(U256, U256), QuoteError> {
        let (reserve0, reserve1) = self.chain.pair_reserves(pair).await.map_err(|e| {
            log::error!("Failed to fetch reserves for pair {pair}: {e}");
            QuoteError::ReserveFetchUnavailable(e.to_string())
        })?;

        let (token0, _) = sort_tokens(from_token, to_token);
        if from_token == token0 {
            Ok((reserve0, reserve1))
        } else {
            Ok((reserve1, reserve0))
        }
    }
}

/// Constant-product output amount for an input against `(reserve_in, reserve_out)`,
/// with the 0.3% fee applied and floored integer division.
///
/// Reserves originate from `uint112` pool slots, so the 512-bit
/// intermediates cannot overflow even for inputs near `U256::MAX`, and the
/// quotient is strictly smaller than `reserve_out`.
#[must_use]
pub fn amount_out(amount_in: U256, reserve_in: U256, reserve_out: U256) -> U256 {
    let amount_in_with_fee = amount_in.to::<U512>() * U512::from(FEE_NUMERATOR);
    let numerator = amount_in_with_fee * reserve_out.to::<U512>();
    let denominator = reserve_in.to::<U512>() * U512::from(FEE_DENOMINATOR) + amount_in_with_fee;

    (numerator / denominator).to::<U256>()
}
