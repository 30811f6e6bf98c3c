use serde::Serialize;

/// Query parameters for `GET /v1/balance_transactions`.
///
/// Values are forwarded as given. Stripe validates the limit range and the
/// cursor; nothing here interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BalanceTransactionListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,

    /// Id of the last transaction on the previous page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_after: Option<String>,
}
