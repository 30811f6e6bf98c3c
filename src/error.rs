//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::stripe::StripeError;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Provider Errors**: Stripe answered and rejected the call
/// - **Unexpected Errors**: transport faults, timeouts, undecodable bodies
/// - **Validation Errors**: the inbound query string could not be parsed
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Stripe rejected the request (bad key, invalid parameters, API error).
    ///
    /// Returns HTTP 400 Bad Request with Stripe's message verbatim.
    #[error("{0}")]
    Provider(String),

    /// Anything else that went wrong while serving the request.
    ///
    /// Returns HTTP 500 Internal Server Error with the failure message.
    #[error("{0}")]
    Unexpected(String),

    /// Query parameters are malformed, e.g. a non-numeric `limit`.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{0}")]
    InvalidRequest(String),
}

impl From<StripeError> for AppError {
    fn from(err: StripeError) -> Self {
        match err {
            StripeError::Provider { message, .. } => AppError::Provider(message),
            StripeError::Unexpected(message) => AppError::Unexpected(message),
        }
    }
}

/// A Stripe body that does not match the response models.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Unexpected(err.to_string())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "error": "Human-readable error message" }
/// ```
///
/// # Status Code Mapping
///
/// - `Provider` → 400 Bad Request
/// - `InvalidRequest` → 400 Bad Request
/// - `Unexpected` → 500 Internal Server Error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Provider(message) => {
                tracing::warn!(error = %message, "stripe rejected request");
                StatusCode::BAD_REQUEST
            }
            AppError::InvalidRequest(message) => {
                tracing::debug!(error = %message, "invalid request");
                StatusCode::BAD_REQUEST
            }
            AppError::Unexpected(message) => {
                tracing::error!(error = %message, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn provider_error_is_bad_request_with_message() {
        let err = AppError::from(StripeError::Provider {
            message: "No such balance transaction: 'txn_x'".to_string(),
            kind: Some("invalid_request_error".to_string()),
        });

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No such balance transaction: 'txn_x'");
    }

    #[tokio::test]
    async fn unexpected_error_is_internal_server_error_with_message() {
        let err = AppError::from(StripeError::Unexpected("connection reset".to_string()));

        let (status, body) = render(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "connection reset");
    }

    #[tokio::test]
    async fn decode_failure_is_internal_server_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();

        let (status, _) = render(AppError::from(json_err)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
