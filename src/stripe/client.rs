use std::time::Duration;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use tracing::instrument;
use url::Url;

use super::{
    BalanceService, BalanceTransactionListOptions, BalanceTransactionService, ClientBuildError,
    StripeError, StripeResponse,
};

const BALANCE_PATH: &str = "v1/balance";
const BALANCE_TRANSACTIONS_PATH: &str = "v1/balance_transactions";

/// Settings for [`StripeClient`].
#[derive(Clone)]
pub struct StripeConfig {
    pub api_key: String,
    pub api_base: String,
    pub timeout: Duration,
    /// Sent as `Stripe-Version` when set; otherwise the account default applies
    pub api_version: Option<String>,
}

/// HTTPS client for the Stripe REST API.
///
/// Holds one pooled `reqwest::Client` and the immutable API key, so a single
/// instance is shared by every request handler.
#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    base: Url,
    api_key: String,
    api_version: Option<String>,
}

impl StripeClient {
    pub fn new(config: StripeConfig) -> Result<Self, ClientBuildError> {
        // Url::join replaces the last path segment unless the base ends in '/'
        let mut base = config.api_base;
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base)?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base,
            api_key: config.api_key,
            api_version: config.api_version,
        })
    }

    fn request(&self, path: &str) -> Result<RequestBuilder, StripeError> {
        let url = self
            .base
            .join(path)
            .map_err(|e| StripeError::Unexpected(format!("invalid Stripe URL: {e}")))?;

        let mut request = self.http.get(url).bearer_auth(&self.api_key);
        if let Some(version) = &self.api_version {
            request = request.header("Stripe-Version", version);
        }

        Ok(request)
    }
}

/// Send the request and split the outcome into success, provider rejection,
/// or transport failure.
async fn execute(request: RequestBuilder) -> Result<StripeResponse, StripeError> {
    let response = request.send().await?;
    let status = response.status();
    let content = response.text().await?;

    if !status.is_success() {
        return Err(StripeError::from_error_body(status.as_u16(), &content));
    }

    tracing::debug!(status = status.as_u16(), bytes = content.len(), "stripe call succeeded");

    Ok(StripeResponse { content })
}

#[async_trait]
impl BalanceService for StripeClient {
    #[instrument(name = "stripe.balance.get", skip(self))]
    async fn get(&self) -> Result<StripeResponse, StripeError> {
        execute(self.request(BALANCE_PATH)?).await
    }
}

#[async_trait]
impl BalanceTransactionService for StripeClient {
    #[instrument(name = "stripe.balance_transactions.list", skip(self))]
    async fn list(
        &self,
        options: BalanceTransactionListOptions,
    ) -> Result<StripeResponse, StripeError> {
        let request = self.request(BALANCE_TRANSACTIONS_PATH)?.query(&options);
        execute(request).await
    }
}
