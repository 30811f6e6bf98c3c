//! Response models for the Stripe balance endpoints.
//!
//! These mirror the subset of Stripe's JSON schema the API exposes. They are
//! decoded from Stripe's snake_case bodies and serialized back as camelCase.

/// Account balance snapshot
pub mod balance;
/// Balance transaction list page
pub mod balance_transaction;
/// Inbound paging query
pub mod pagination;
/// Key-normalizing decoder for raw Stripe bodies
pub mod provider_json;
