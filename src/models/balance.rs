//! Balance models.
//!
//! Decoded from Stripe's `GET /v1/balance` body and returned by
//! `GET /api/stripe/balance`.

use serde::{Deserialize, Serialize};

/// Funds held in the Stripe account at the time of the request.
///
/// # JSON Example
///
/// ```json
/// {
///   "object": "balance",
///   "available": [{ "amount": 507567172, "currency": "pln", "sourceTypes": { "card": 507567172 } }],
///   "pending": [{ "amount": 128246, "currency": "pln", "sourceTypes": { "card": 128246 } }],
///   "connectReserved": [{ "amount": 0, "currency": "pln" }],
///   "livemode": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct BalanceSnapshot {
    /// Always `"balance"`
    #[serde(default)]
    pub object: Option<String>,

    /// Funds available to be paid out, one entry per currency
    #[serde(default)]
    pub available: Vec<BalanceDetail>,

    /// Funds not yet available, one entry per currency
    #[serde(default)]
    pub pending: Vec<BalanceDetail>,

    /// Funds reserved for connected accounts
    #[serde(default)]
    pub connect_reserved: Vec<BalanceDetail>,

    pub livemode: bool,
}

/// Amount in a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct BalanceDetail {
    /// Amount in minor units (e.g. cents). May be negative.
    pub amount: i64,

    /// Lowercase ISO 4217 code, e.g. `"pln"`
    pub currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_types: Option<SourceTypes>,
}

/// Breakdown of an amount by payment source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct SourceTypes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fpx: Option<i64>,
}
