//! Paging query for the balance transaction list.

use serde::Deserialize;

use crate::stripe::BalanceTransactionListOptions;

/// Query string of `GET /api/stripe/balance-transactions`.
///
/// # Example
///
/// `?limit=10&offset=txn_3NlVHeJX9HHJ5byc14sjLQoH`
///
/// `offset` is Stripe's opaque `starting_after` cursor, not a numeric offset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    /// Page size, forwarded unchecked (Stripe accepts 1 to 100)
    #[serde(default)]
    pub limit: Option<i64>,

    /// Id of the last transaction already seen
    #[serde(default)]
    pub offset: Option<String>,
}

impl From<PaginationParams> for BalanceTransactionListOptions {
    fn from(params: PaginationParams) -> Self {
        Self {
            limit: params.limit,
            starting_after: params.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_becomes_starting_after_verbatim() {
        let options = BalanceTransactionListOptions::from(PaginationParams {
            limit: Some(10),
            offset: Some("offset_value".to_string()),
        });

        assert_eq!(
            options,
            BalanceTransactionListOptions {
                limit: Some(10),
                starting_after: Some("offset_value".to_string()),
            }
        );
    }

    #[test]
    fn out_of_range_limit_is_not_corrected() {
        let options = BalanceTransactionListOptions::from(PaginationParams {
            limit: Some(-5),
            offset: None,
        });

        assert_eq!(options.limit, Some(-5));
        assert_eq!(options.starting_after, None);
    }
}
