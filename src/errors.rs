//! Typed failure taxonomy for the pricing core.
//!
//! Gateway and store failures are never surfaced verbatim. They are caught at
//! the nearest service boundary and re-signalled as one of these kinds, with
//! the original message retained in the detail string for diagnostics. Each
//! kind carries a stable machine-readable identifier that the HTTP layer maps
//! to a status family.

use thiserror::Error;

/// Failures of the swap quote path.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The input amount was missing, non-numeric or non-positive.
    /// Client error, not retryable.
    #[error("invalid input amount: {0}")]
    InvalidInputAmount(String),

    /// The resolved pair has a zero reserve on either side, meaning the pool
    /// is empty or does not exist. Client error, not retryable.
    #[error("insufficient liquidity: {0}")]
    InsufficientLiquidity(String),

    /// The chain gateway failed while fetching pair reserves.
    /// Transient, retryable by the caller.
    #[error("failed to fetch pair reserves: {0}")]
    ReserveFetchUnavailable(String),
}

impl QuoteError {
    /// Stable machine-readable identifier for this error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInputAmount(_) => "error.insufficient-input-amount",
            Self::InsufficientLiquidity(_) => "error.insufficient-liquidity",
            Self::ReserveFetchUnavailable(_) => "error.pair-reserve-fetch",
        }
    }

    /// Whether a caller may retry the same request and expect it to succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ReserveFetchUnavailable(_))
    }
}

/// Failures of the gas price read path.
#[derive(Debug, Error)]
pub enum GasPriceError {
    /// Both the cache and the chain gateway failed while serving a gas price
    /// read. Transient, retryable by the caller.
    #[error("failed to fetch gas price: {0}")]
    Unavailable(String),
}

impl GasPriceError {
    /// Stable machine-readable identifier for this error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unavailable(_) => "error.gas-price-fetch",
        }
    }
}
