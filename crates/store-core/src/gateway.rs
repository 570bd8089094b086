//! # Payment Gateway Trait
//!
//! The seam between the storefront and the remote payment backend.
//! The backend is an opaque collaborator: the client only knows the two
//! operations below and their wire shapes.

use crate::error::StoreResult;
use crate::product::Product;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Body of the session-creation request.
///
/// Constructed fresh per submission, never persisted, never reused.
/// The redirect URLs must already be sanitized (`TrustedOrigin`) before
/// a request is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Provider-assigned price identifier to purchase
    pub price_id: String,

    /// Absolute URL the processor redirects to after payment
    pub success_url: String,

    /// Absolute URL the processor redirects to on cancellation
    pub cancel_url: String,
}

impl CheckoutRequest {
    pub fn new(
        price_id: impl Into<String>,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            price_id: price_id.into(),
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
        }
    }
}

/// A created checkout session.
///
/// The backend may return additional fields (session id and the like);
/// only the redirect location matters to the client, which navigates away
/// immediately after receiving it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Hosted-checkout location to navigate the browser to
    pub url: String,
}

/// Operations the payment backend exposes to this client.
///
/// Implementations live outside core (HTTP in `store-client`, mocks in
/// tests); the orchestrator only sees this trait.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Fetch the product catalog.
    ///
    /// Read-only; any failure surfaces as a generic "failed to load"
    /// condition with no retry.
    async fn fetch_products(&self) -> StoreResult<Vec<Product>>;

    /// Create a hosted-checkout session.
    ///
    /// Exactly one call per user action; the caller performs no retry.
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> StoreResult<CheckoutSession>;
}

/// Type alias for a shared gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_shape() {
        let request = CheckoutRequest::new(
            "price_1",
            "https://shop.example/success",
            "https://shop.example/cancel",
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["price_id"], "price_1");
        assert_eq!(json["success_url"], "https://shop.example/success");
        assert_eq!(json["cancel_url"], "https://shop.example/cancel");
    }

    #[test]
    fn test_session_ignores_unknown_fields() {
        let json = r#"{"id": "cs_test_1", "url": "https://checkout.example/cs_test_1"}"#;
        let session: CheckoutSession = serde_json::from_str(json).unwrap();
        assert_eq!(session.url, "https://checkout.example/cs_test_1");
    }
}
