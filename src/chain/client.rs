//! JSON-RPC chain gateway.
//!
//! All methods are single read round-trips. Callers that need bounded
//! latency impose timeouts on the provider, not here.

use alloy::{
    network::Ethereum,
    primitives::{Address, U256},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::types::{BlockNumberOrTag, BlockTransactionsKind},
    sol,
};
use async_trait::async_trait;
use eyre::Result;
use url::Url;

sol! {
    #[sol(rpc)]
    interface IUniswapV2Pair {
        function getReserves() external view returns (uint112 reserve0, uint112 reserve1, uint32 blockTimestampLast);
    }
}

/// Network fee data as reported by the node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeData {
    /// Suggested gas price for legacy transactions
    pub gas_price: U256,
    /// Suggested priority fee (tip) per gas unit
    pub max_priority_fee_per_gas: U256,
    /// The node's own max fee estimate. The gas oracle discards this in
    /// favour of a recomputation against the live base fee.
    pub max_fee_per_gas: U256,
}

/// Read-only gateway to the blockchain network.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Base fee per gas of the pending block, or zero when the chain
    /// predates the fee-market upgrade or the field is absent.
    ///
    /// # Errors
    /// * If the RPC call fails
    async fn base_fee_per_gas(&self) -> Result<U256>;

    /// Current network fee data.
    ///
    /// # Errors
    /// * If any of the underlying RPC calls fail
    async fn fee_data(&self) -> Result<FeeData>;

    /// Raw reserves of a pair contract, in the pool's own canonical token
    /// ordering, not the caller's swap direction.
    ///
    /// # Errors
    /// * If the contract call fails or the response cannot be decoded
    async fn pair_reserves(&self, pair: Address) -> Result<(U256, U256)>;
}

/// [`ChainClient`] backed by an alloy HTTP provider.
pub struct RpcChainClient {
    /// Shared HTTP provider
    provider: RootProvider<Ethereum>,
}

impl RpcChainClient {
    /// Creates a client for the node at `rpc_url`.
    #[must_use]
    pub fn new(rpc_url: Url) -> Self {
        let provider = ProviderBuilder::new().on_http(rpc_url);
        Self {
            provider: (*provider.root()).clone(),
        }
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn base_fee_per_gas(&self) -> Result<U256> {
        let pending = self
            .provider
            .get_block_by_number(BlockNumberOrTag::Pending, BlockTransactionsKind::Hashes)
            .await?;

        Ok(pending
            .and_then(|block| block.header.base_fee_per_gas)
            .map_or(U256::ZERO, U256::from))
    }

    async fn fee_data(&self) -> Result<FeeData> {
        let (gas_price, max_priority_fee_per_gas) = tokio::try_join!(
            self.provider.get_gas_price(),
            self.provider.get_max_priority_fee_per_gas()
        )?;

        Ok(FeeData {
            gas_price: U256::from(gas_price),
            max_priority_fee_per_gas: U256::from(max_priority_fee_per_gas),
            // The suggested price already reflects current network
            // conditions; consumers recompute against the live base fee.
            max_fee_per_gas: U256::from(gas_price) + U256::from(max_priority_fee_per_gas),
        })
    }

    async fn pair_reserves(&self, pair: Address) -> Result<(U256, U256)> {
        let pair_contract = IUniswapV2Pair::new(pair, &self.provider);
        let reserves = pair_contract.getReserves().call().await?;

        Ok((
            reserves.reserve0.to::<U256>(),
            reserves.reserve1.to::<U256>(),
        ))
    }
}
