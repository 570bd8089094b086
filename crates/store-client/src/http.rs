//! # HTTP Payment Gateway
//!
//! reqwest implementation of `PaymentGateway` against the payment backend's
//! REST API. All failure detail is captured in `StoreError` for logging;
//! callers surface only the generic user-facing messages.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use store_core::{
    CheckoutRequest, CheckoutSession, PaymentGateway, Product, StoreError, StoreResult,
};
use tracing::{debug, error, info, instrument};

/// HTTP client for the payment backend
pub struct HttpPaymentGateway {
    client: Client,
    api_base: String,
}

impl HttpPaymentGateway {
    /// Create a gateway for the given API base URL
    pub fn new(api_base: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_base: api_base.into(),
        }
    }

    fn products_url(&self) -> String {
        format!("{}/api/payment/products", self.api_base)
    }

    fn checkout_session_url(&self) -> String {
        format!("{}/api/payment/create-checkout-session", self.api_base)
    }
}

#[async_trait]
impl PaymentGateway for HttpPaymentGateway {
    #[instrument(skip(self))]
    async fn fetch_products(&self) -> StoreResult<Vec<Product>> {
        let response = self
            .client
            .get(self.products_url())
            .send()
            .await
            .map_err(|e| StoreError::CatalogFetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            error!("Catalog fetch failed: status={}", status);
            return Err(StoreError::CatalogFetch(format!("HTTP {}", status)));
        }

        let listing: ProductsResponse = response
            .json()
            .await
            .map_err(|e| StoreError::CatalogFetch(format!("decode error: {}", e)))?;

        debug!("Fetched {} products", listing.products.len());

        Ok(listing.products)
    }

    #[instrument(skip(self, request), fields(price_id = %request.price_id))]
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> StoreResult<CheckoutSession> {
        let response = self
            .client
            .post(self.checkout_session_url())
            .json(request)
            .send()
            .await
            .map_err(|e| StoreError::SessionCreation(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| StoreError::SessionCreation(e.to_string()))?;

        if !status.is_success() {
            error!("Session creation failed: status={}, body={}", status, body);
            return Err(StoreError::SessionCreation(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let session: SessionResponse = serde_json::from_str(&body)
            .map_err(|e| StoreError::MalformedResponse(format!("decode error: {}", e)))?;

        let url = match session.url {
            Some(url) if !url.is_empty() => url,
            _ => {
                error!("Session response missing redirect url: body={}", body);
                return Err(StoreError::MalformedResponse(
                    "missing redirect url".to_string(),
                ));
            }
        };

        info!("Created checkout session: url={}", url);

        Ok(CheckoutSession { url })
    }
}

/// Catalog response envelope
#[derive(Debug, Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
}

/// Session-creation response. The backend also returns a session `id`;
/// the client only consumes the redirect location.
#[derive(Debug, Deserialize)]
struct SessionResponse {
    #[serde(default)]
    url: Option<String>,
}
