//! Shared application state.

use std::sync::Arc;

use crate::stripe::{BalanceService, BalanceTransactionService, StripeClient};

/// Dependencies handed to every request handler.
///
/// Built once at startup and cloned per request; the adapters behind the
/// `Arc`s are immutable and safe to share across concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub balance: Arc<dyn BalanceService>,
    pub balance_transactions: Arc<dyn BalanceTransactionService>,
}

impl AppState {
    pub fn new(
        balance: Arc<dyn BalanceService>,
        balance_transactions: Arc<dyn BalanceTransactionService>,
    ) -> Self {
        Self {
            balance,
            balance_transactions,
        }
    }

    /// Serve both endpoints from one Stripe client.
    pub fn from_client(client: StripeClient) -> Self {
        let client = Arc::new(client);
        Self::new(client.clone(), client)
    }
}
