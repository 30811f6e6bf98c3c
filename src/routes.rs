//! Route table.

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{handlers, state::AppState};

/// Build the HTTP router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    let stripe_routes = Router::new()
        .route("/api/stripe/balance", get(handlers::stripe::get_balance))
        .route(
            "/api/stripe/balance-transactions",
            get(handlers::stripe::get_balance_transactions),
        );

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(stripe_routes)
        // Request/response spans for every call
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
