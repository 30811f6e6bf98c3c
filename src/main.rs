//! Stripe Balance Proxy - Main Application Entry Point
//!
//! A read-only REST API that forwards Stripe balance and balance transaction
//! data to API consumers.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Provider**: Stripe REST API over reqwest
//! - **Format**: JSON responses, camelCase field names
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Build the Stripe client once
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port

use stripe_balance_proxy::{config, routes, state::AppState, stripe::StripeClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!(
        api_base = %config.stripe_api_base,
        timeout_secs = config.stripe_timeout_secs,
        "Configuration loaded"
    );

    // One client shared by every request
    let client = StripeClient::new(config.stripe())?;
    tracing::info!("Stripe client created");

    let app = routes::create_router(AppState::from_client(client));

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
