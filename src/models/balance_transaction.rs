//! Balance transaction models.
//!
//! Decoded from Stripe's `GET /v1/balance_transactions` body and returned by
//! `GET /api/stripe/balance-transactions`.

use serde::{Deserialize, Serialize};

/// One page of a cursor-paginated balance transaction list.
///
/// `data` keeps Stripe's order (newest first). To fetch the next page, pass
/// the last transaction's `id` as `offset` while `has_more` is true.
///
/// # JSON Example
///
/// ```json
/// {
///   "object": "list",
///   "data": [{ "id": "txn_3NlVHeJX9HHJ5byc14sjLQoH", "amount": 1000, "fee": 116, "net": 884, ... }],
///   "hasMore": false,
///   "url": "/v1/balance_transactions"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct BalanceTransactionPage {
    /// Always `"list"`
    pub object: String,

    #[serde(default)]
    pub data: Vec<BalanceTransaction>,

    pub has_more: bool,

    /// Stripe path the list was served from
    pub url: String,
}

/// A movement of funds into or out of the Stripe balance.
///
/// All money fields are in minor units of `currency`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct BalanceTransaction {
    /// e.g. `txn_3NlVHeJX9HHJ5byc14sjLQoH`
    pub id: String,

    /// Always `"balance_transaction"`
    pub object: String,

    /// Gross amount
    pub amount: i64,

    /// Unix timestamp when the funds become available
    pub available_on: i64,

    /// Unix timestamp of creation
    pub created: i64,

    pub currency: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Conversion rate applied when the charge currency differs from the
    /// balance currency. A ratio, not an amount.
    #[serde(default)]
    pub exchange_rate: Option<f64>,

    /// Total fees
    pub fee: i64,

    #[serde(default)]
    pub fee_details: Vec<FeeDetail>,

    /// `amount - fee`
    pub net: i64,

    #[serde(default)]
    pub reporting_category: Option<String>,

    /// Id of the object that caused this transaction, e.g. a charge
    #[serde(default)]
    pub source: Option<String>,

    /// `available` or `pending`
    pub status: String,

    /// e.g. `charge`, `payment`, `payout`, `refund`
    #[serde(rename = "type")]
    pub kind: String,
}

/// One component of a transaction's fee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all(serialize = "camelCase"))]
pub struct FeeDetail {
    pub amount: i64,

    /// Connect application that earned the fee, if any
    #[serde(default)]
    pub application: Option<String>,

    pub currency: String,

    #[serde(default)]
    pub description: Option<String>,

    /// `application_fee`, `stripe_fee` or `tax`
    #[serde(rename = "type")]
    pub kind: String,
}
