//! HTTP boundary.
//!
//! Two read endpoints over the pricing core:
//! `GET /api/return/{fromTokenAddress}/{toTokenAddress}/{amountIn}` and
//! `GET /api/gasPrice`. Client-caused errors map to 400, transient
//! infrastructure errors to 503; bodies carry the stable error kind plus a
//! human-readable detail.

use std::str::FromStr;
use std::sync::Arc;

use alloy::primitives::Address;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::amm::quote::QuoteEngine;
use crate::errors::{GasPriceError, QuoteError};
use crate::gas::oracle::GasOracle;
use crate::gas::price::GasPrice;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Swap quote engine
    pub quote_engine: Arc<QuoteEngine>,
    /// Gas price oracle
    pub gas_oracle: Arc<GasOracle>,
}

/// Builds the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/return/:from_token_address/:to_token_address/:amount_in",
            get(get_exchange_output),
        )
        .route("/api/gasPrice", get(get_gas_price))
        .with_state(state)
}

/// Body of a successful quote response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExchangeOutput {
    /// Output amount in the smallest unit of the destination token
    amount_out: String,
}

/// Body of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Stable machine-readable error kind
    error: &'static str,
    /// Human-readable detail
    message: String,
}

/// An error response: a status code plus an [`ErrorBody`].
#[derive(Debug)]
struct ApiError {
    /// HTTP status to respond with
    status: StatusCode,
    /// JSON body
    body: ErrorBody,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        let status = match err {
            QuoteError::InvalidInputAmount(_) | QuoteError::InsufficientLiquidity(_) => {
                StatusCode::BAD_REQUEST
            }
            QuoteError::ReserveFetchUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };
        Self {
            status,
            body: ErrorBody {
                error: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

impl From<GasPriceError> for ApiError {
    fn from(err: GasPriceError) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: ErrorBody {
                error: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

/// Parses a path segment as a token address, rejecting with 400 on failure.
fn parse_address(name: &str, raw: &str) -> Result<Address, ApiError> {
    Address::from_str(raw).map_err(|_| ApiError {
        status: StatusCode::BAD_REQUEST,
        body: ErrorBody {
            error: "error.validation",
            message: format!("{name} is not a valid token address: {raw}"),
        },
    })
}

/// `GET /api/return/{fromTokenAddress}/{toTokenAddress}/{amountIn}`
async fn get_exchange_output(
    State(state): State<AppState>,
    Path((from_token_address, to_token_address, amount_in)): Path<(String, String, String)>,
) -> Result<Json<ExchangeOutput>, ApiError> {
    let from_token = parse_address("fromTokenAddress", &from_token_address)?;
    let to_token = parse_address("toTokenAddress", &to_token_address)?;

    let amount_out = state
        .quote_engine
        .quote(from_token, to_token, &amount_in)
        .await?;

    Ok(Json(ExchangeOutput {
        amount_out: amount_out.to_string(),
    }))
}

/// `GET /api/gasPrice`
async fn get_gas_price(State(state): State<AppState>) -> Result<Json<GasPrice>, ApiError> {
    Ok(Json(state.gas_oracle.get_gas_price().await?))
}
