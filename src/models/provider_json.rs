//! Decoding of raw Stripe bodies with case-insensitive field matching.
//!
//! Stripe sends snake_case keys, but captured or proxied bodies may carry
//! camelCase, PascalCase or all-caps ones. Keys are compared with case and
//! underscores folded away, so `hasMore`, `HASMORE`, `hasmore` and `has_more`
//! all land in the `has_more` field.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Field names of every decoded Stripe object, as the models spell them.
const FIELDS: &[&str] = &[
    "amount",
    "application",
    "available",
    "available_on",
    "bank_account",
    "card",
    "connect_reserved",
    "created",
    "currency",
    "data",
    "description",
    "exchange_rate",
    "fee",
    "fee_details",
    "fpx",
    "has_more",
    "id",
    "livemode",
    "net",
    "object",
    "pending",
    "reporting_category",
    "source",
    "source_types",
    "status",
    "type",
    "url",
];

static FOLDED_FIELDS: LazyLock<HashMap<String, &'static str>> =
    LazyLock::new(|| FIELDS.iter().map(|field| (fold(field), *field)).collect());

/// Decode a raw provider body into `T` after normalizing its object keys.
pub fn from_provider_body<T: DeserializeOwned>(content: &str) -> Result<T, serde_json::Error> {
    let value: Value = serde_json::from_str(content)?;
    serde_json::from_value(normalize_keys(value))
}

fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (canonical_key(&key), normalize_keys(value)))
                .collect::<Map<_, _>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// Known fields map to their model spelling; anything else goes through
/// [`to_snake_case`] and is ignored by the models.
fn canonical_key(key: &str) -> String {
    match FOLDED_FIELDS.get(&fold(key)) {
        Some(field) => field.to_string(),
        None => to_snake_case(key),
    }
}

/// `has_more`, `hasMore` and `HASMORE` all fold to `hasmore`.
fn fold(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// `availableOn` -> `available_on`.
///
/// An underscore is inserted only where a lowercase letter or digit is
/// followed by an uppercase one.
fn to_snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_lower = false;

    for c in key.chars() {
        if c.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{balance::BalanceSnapshot, balance_transaction::BalanceTransactionPage};
    use rstest::rstest;
    use serde::Deserialize;

    #[rstest]
    #[case("has_more", "has_more")]
    #[case("hasMore", "has_more")]
    #[case("HasMore", "has_more")]
    #[case("HASMORE", "has_more")]
    #[case("hasmore", "has_more")]
    #[case("HAS_MORE", "has_more")]
    #[case("AVAILABLEON", "available_on")]
    #[case("availableOn", "available_on")]
    #[case("Livemode", "livemode")]
    #[case("LIVEMODE", "livemode")]
    #[case("Type", "type")]
    fn known_keys_match_case_insensitively(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(canonical_key(input), expected);
    }

    #[rstest]
    #[case("balanceType", "balance_type")]
    #[case("payout", "payout")]
    fn unknown_keys_fall_back_to_snake_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(canonical_key(input), expected);
    }

    #[rstest]
    #[case("HASMORE")]
    #[case("hasmore")]
    #[case("HasMore")]
    #[case("has_more")]
    fn has_more_decodes_in_any_casing(#[case] key: &str) {
        let body = format!(
            r#"{{"object":"list","data":[],"{key}":true,"url":"/v1/balance_transactions"}}"#
        );

        let page: BalanceTransactionPage = from_provider_body(&body).unwrap();

        assert!(page.has_more);
    }

    #[derive(Debug, Deserialize)]
    struct Nested {
        has_more: bool,
        fee_details: Vec<Inner>,
    }

    #[derive(Debug, Deserialize)]
    struct Inner {
        exchange_rate: f64,
    }

    #[test]
    fn nested_objects_inside_arrays_are_normalized() {
        let nested: Nested =
            from_provider_body(r#"{"HasMore": true, "FEEDETAILS": [{"exchangerate": 1.5}]}"#)
                .unwrap();

        assert!(nested.has_more);
        assert_eq!(nested.fee_details[0].exchange_rate, 1.5);
    }

    #[test]
    fn malformed_body_is_an_error() {
        let result = from_provider_body::<Nested>("{not json");

        assert!(result.is_err());
    }

    fn collect_keys(value: &Value, keys: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (key, value) in map {
                    keys.push(to_snake_case(key));
                    collect_keys(value, keys);
                }
            }
            Value::Array(items) => items.iter().for_each(|item| collect_keys(item, keys)),
            _ => {}
        }
    }

    // Every model field must be listed, or a differently cased key for it
    // would silently fail to match.
    #[test]
    fn field_table_covers_every_model_field() {
        let balance: BalanceSnapshot = from_provider_body(
            r#"{
                "object": "balance",
                "available": [{ "amount": 1, "currency": "usd",
                    "source_types": { "card": 1, "bank_account": 2, "fpx": 3 } }],
                "pending": [], "connect_reserved": [], "livemode": false
            }"#,
        )
        .unwrap();
        let page: BalanceTransactionPage = from_provider_body(
            r#"{
                "object": "list",
                "data": [{
                    "id": "txn_1", "object": "balance_transaction", "amount": 100,
                    "available_on": 0, "created": 0, "currency": "usd",
                    "description": "d", "exchange_rate": 1.0, "fee": 3,
                    "fee_details": [{ "amount": 3, "application": "ca_1", "currency": "usd",
                        "description": "d", "type": "stripe_fee" }],
                    "net": 97, "reporting_category": "charge", "source": "ch_1",
                    "status": "available", "type": "charge"
                }],
                "has_more": false, "url": "/v1/balance_transactions"
            }"#,
        )
        .unwrap();

        let mut keys = Vec::new();
        collect_keys(&serde_json::to_value(&balance).unwrap(), &mut keys);
        collect_keys(&serde_json::to_value(&page).unwrap(), &mut keys);

        for key in keys {
            assert!(FIELDS.contains(&key.as_str()), "{key} missing from FIELDS");
        }
    }
}
