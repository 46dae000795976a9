//! CRM client for token exchange, order creation and product queries.

use portal::prelude::OrderLine;
use reqwest::{Client, Response};
use thiserror::Error;

mod records;
mod secret;

pub use records::{CreateOrderResponse, PricebookEntryRecord, ProductRecord, RelatedRecords};
pub use secret::Secret;

use records::{CreateOrderRequest, QueryResponse, TokenResponse};

/// Configuration for connecting to the CRM instance.
#[derive(Debug, Clone)]
pub struct CrmConfig {
    /// Instance base URL, e.g. `"https://example.my.salesforce.com"`.
    pub instance_url: String,

    /// OAuth token endpoint. Defaults to the instance's token path.
    pub token_url: Option<String>,

    pub client_id: String,

    pub client_secret: Secret,

    /// Account the portal places orders for.
    pub account_id: String,

    /// Path of the order creation endpoint, relative to the instance URL.
    pub order_path: String,

    /// REST API version used for queries, e.g. `"v62.0"`.
    pub api_version: String,
}

impl CrmConfig {
    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.instance_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn token_url(&self) -> String {
        self.token_url
            .clone()
            .unwrap_or_else(|| self.url("services/oauth2/token"))
    }
}

/// HTTP client for the CRM REST API.
#[derive(Debug, Clone)]
pub struct CrmClient {
    config: CrmConfig,
    http: Client,
}

impl CrmClient {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: CrmConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    /// Exchange the configured client credentials for a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn access_token(&self) -> Result<Secret, CrmError> {
        let response = self
            .http
            .post(self.config.token_url())
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.expose()),
            ])
            .send()
            .await?;

        let parsed: TokenResponse = ensure_success(response, "token").await?.json().await?;

        if parsed.access_token.trim().is_empty() {
            return Err(CrmError::UnexpectedResponse(
                "token response carried an empty access token".to_string(),
            ));
        }

        Ok(Secret::new(parsed.access_token))
    }

    /// Create an order for the configured account.
    ///
    /// A body with `success: false` is returned as-is; only transport and
    /// decoding failures are errors.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn create_order(
        &self,
        token: &Secret,
        lines: &[OrderLine],
    ) -> Result<CreateOrderResponse, CrmError> {
        let body = CreateOrderRequest::new(&self.config.account_id, lines);

        let response = self
            .http
            .post(self.config.url(&self.config.order_path))
            .bearer_auth(token.expose())
            .json(&body)
            .send()
            .await?;

        let parsed = ensure_success(response, "order").await?.json().await?;

        Ok(parsed)
    }

    /// Run a product query and return its records.
    ///
    /// # Errors
    ///
    /// Returns an error on HTTP failure or an unexpected response body.
    pub async fn query_products(
        &self,
        token: &Secret,
        query: &str,
    ) -> Result<Vec<ProductRecord>, CrmError> {
        let url = self
            .config
            .url(&format!("services/data/{}/query", self.config.api_version));

        let response = self
            .http
            .get(url)
            .bearer_auth(token.expose())
            .query(&[("q", query)])
            .send()
            .await?;

        let parsed: QueryResponse<ProductRecord> =
            ensure_success(response, "query").await?.json().await?;

        Ok(parsed.records)
    }
}

async fn ensure_success(response: Response, request: &str) -> Result<Response, CrmError> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();

    Err(CrmError::UnexpectedResponse(format!(
        "{request} request failed with status {status}: {text}"
    )))
}

/// Errors that can occur when communicating with the CRM.
#[derive(Debug, Error)]
pub enum CrmError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The CRM returned a non-2xx response or unexpected body.
    #[error("unexpected response from CRM: {0}")]
    UnexpectedResponse(String),
}
