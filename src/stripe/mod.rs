//! Stripe API adapters.
//!
//! Handlers talk to Stripe only through the [`BalanceService`] and
//! [`BalanceTransactionService`] traits. [`StripeClient`] implements both over
//! HTTPS; tests substitute in-memory fakes.

mod client;
mod error;
mod options;

pub use client::{StripeClient, StripeConfig};
pub use error::{ClientBuildError, StripeError};
pub use options::BalanceTransactionListOptions;

use async_trait::async_trait;

/// Raw result of a successful Stripe call.
///
/// The body is kept as text; callers decode it against their own models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripeResponse {
    /// Raw JSON body
    pub content: String,
}

/// Retrieves the current account balance.
#[async_trait]
pub trait BalanceService: Send + Sync {
    async fn get(&self) -> Result<StripeResponse, StripeError>;
}

/// Lists balance transactions one page at a time.
#[async_trait]
pub trait BalanceTransactionService: Send + Sync {
    async fn list(
        &self,
        options: BalanceTransactionListOptions,
    ) -> Result<StripeResponse, StripeError>;
}
