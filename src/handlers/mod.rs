//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (query string, shared state)
//! 2. Calls a Stripe adapter and decodes its raw body
//! 3. Returns HTTP response (JSON, status code)

/// Liveness endpoint
pub mod health;
/// Stripe balance endpoints
pub mod stripe;
