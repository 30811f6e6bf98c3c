//! Read-only HTTP proxy for Stripe balance data.
//!
//! Exposes the Stripe account balance and its balance transactions as JSON
//! endpoints, reshaping Stripe's bodies into local camelCase models and
//! mapping Stripe failures to HTTP status codes.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod stripe;
