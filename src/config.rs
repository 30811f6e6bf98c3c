//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::stripe::StripeConfig;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `STRIPE_API_KEY` (required): Stripe secret key used for every outbound call
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `STRIPE_API_BASE` (optional): Stripe API base URL, defaults to `https://api.stripe.com`
/// - `STRIPE_TIMEOUT_SECS` (optional): outbound request timeout, defaults to 30
/// - `STRIPE_API_VERSION` (optional): pinned `Stripe-Version` header value
#[derive(Clone, Deserialize)]
pub struct Config {
    pub stripe_api_key: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_stripe_api_base")]
    pub stripe_api_base: String,

    #[serde(default = "default_stripe_timeout_secs")]
    pub stripe_timeout_secs: u64,

    #[serde(default)]
    pub stripe_api_version: Option<String>,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_stripe_api_base() -> String {
    "https://api.stripe.com".to_string()
}

fn default_stripe_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required environment variables are missing (e.g., STRIPE_API_KEY)
    /// - Environment variable values cannot be parsed into expected types
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Field names are automatically converted: stripe_api_key -> STRIPE_API_KEY
        envy::from_env::<Config>()
    }

    /// Settings for the Stripe client adapters.
    pub fn stripe(&self) -> StripeConfig {
        StripeConfig {
            api_key: self.stripe_api_key.clone(),
            api_base: self.stripe_api_base.clone(),
            timeout: Duration::from_secs(self.stripe_timeout_secs),
            api_version: self.stripe_api_version.clone(),
        }
    }
}

// The API key must never reach the logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("stripe_api_key", &"[redacted]")
            .field("server_port", &self.server_port)
            .field("stripe_api_base", &self.stripe_api_base)
            .field("stripe_timeout_secs", &self.stripe_timeout_secs)
            .field("stripe_api_version", &self.stripe_api_version)
            .finish()
    }
}
