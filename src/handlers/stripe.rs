//! Stripe balance HTTP handlers.
//!
//! This module implements the read-only Stripe proxy endpoints:
//! - GET /api/stripe/balance - Current account balance
//! - GET /api/stripe/balance-transactions - One page of balance transactions

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};

use crate::{
    error::AppError,
    models::{
        balance::BalanceSnapshot, balance_transaction::BalanceTransactionPage,
        pagination::PaginationParams, provider_json::from_provider_body,
    },
    state::AppState,
};

/// Get the Stripe account balance.
///
/// # Endpoint
///
/// `GET /api/stripe/balance`
///
/// # Response
///
/// - **Success (200 OK)**: [`BalanceSnapshot`] in camelCase
/// - **Error (400)**: Stripe rejected the call, `{"error": "<stripe message>"}`
/// - **Error (500)**: transport failure or undecodable body
pub async fn get_balance(
    State(state): State<AppState>,
) -> Result<Json<BalanceSnapshot>, AppError> {
    let response = state.balance.get().await?;

    let balance: BalanceSnapshot = from_provider_body(&response.content)?;

    Ok(Json(balance))
}

/// List balance transactions, one page per call.
///
/// # Endpoint
///
/// `GET /api/stripe/balance-transactions?limit=10&offset=txn_...`
///
/// # Query Parameters
///
/// - `limit` - page size, passed to Stripe unchecked
/// - `offset` - Stripe `starting_after` cursor, passed unchecked
///
/// # Response
///
/// - **Success (200 OK)**: [`BalanceTransactionPage`] in camelCase
/// - **Error (400)**: Stripe rejected the call, or the query string is malformed
/// - **Error (500)**: transport failure or undecodable body
pub async fn get_balance_transactions(
    State(state): State<AppState>,
    query: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<BalanceTransactionPage>, AppError> {
    let Query(pagination) = query?;

    let response = state
        .balance_transactions
        .list(pagination.into())
        .await?;

    let page: BalanceTransactionPage = from_provider_body(&response.content)?;

    Ok(Json(page))
}
