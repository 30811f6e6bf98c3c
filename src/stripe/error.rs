use serde::Deserialize;

/// Failure of a Stripe call.
///
/// `Provider` means Stripe answered and rejected the request (bad key,
/// invalid parameters, API errors). Everything else is `Unexpected`.
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    #[error("{message}")]
    Provider {
        message: String,
        /// Stripe's error `type`, e.g. `invalid_request_error`
        kind: Option<String>,
    },

    #[error("{0}")]
    Unexpected(String),
}

impl StripeError {
    /// Build a provider error from a non-2xx response body.
    pub(crate) fn from_error_body(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(ErrorEnvelope {
                error:
                    ErrorObject {
                        message: Some(message),
                        kind,
                    },
            }) => StripeError::Provider { message, kind },
            Ok(ErrorEnvelope { error }) => StripeError::Provider {
                message: format!("stripe returned status {status}"),
                kind: error.kind,
            },
            Err(_) => StripeError::Provider {
                message: format!("stripe returned status {status}"),
                kind: None,
            },
        }
    }
}

/// Failure to build a [`StripeClient`](super::StripeClient) at startup.
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    #[error("invalid Stripe API base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("could not build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<reqwest::Error> for StripeError {
    fn from(err: reqwest::Error) -> Self {
        StripeError::Unexpected(err.to_string())
    }
}

/// `{"error": {"message": "...", "type": "..."}}`
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorObject,
}

#[derive(Debug, Deserialize)]
struct ErrorObject {
    message: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_message_is_kept_verbatim() {
        let body = r#"{"error":{"message":"Invalid API Key provided: sk_test_***","type":"invalid_request_error"}}"#;

        match StripeError::from_error_body(401, body) {
            StripeError::Provider { message, kind } => {
                assert_eq!(message, "Invalid API Key provided: sk_test_***");
                assert_eq!(kind.as_deref(), Some("invalid_request_error"));
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[test]
    fn envelope_without_message_falls_back_to_status() {
        let err = StripeError::from_error_body(500, r#"{"error":{"type":"api_error"}}"#);

        assert!(matches!(err, StripeError::Provider { .. }));
        assert_eq!(err.to_string(), "stripe returned status 500");
    }

    #[test]
    fn non_json_error_body_is_still_a_provider_error() {
        let err = StripeError::from_error_body(502, "<html>Bad Gateway</html>");

        assert!(matches!(err, StripeError::Provider { kind: None, .. }));
        assert_eq!(err.to_string(), "stripe returned status 502");
    }
}
