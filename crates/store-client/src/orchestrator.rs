//! # Checkout Orchestrator
//!
//! Drives the per-selection checkout lifecycle: guard against duplicate
//! submission, build the outbound request from sanitized URLs, make exactly
//! one session-creation call, then redirect or surface a generic failure.

use std::sync::{Arc, Mutex, MutexGuard};

use store_core::flow::BeginOutcome;
use store_core::{
    BoxedPaymentGateway, Catalog, CheckoutFlow, CheckoutRequest, Route, StoreResult,
    TrustedOrigin,
};
use tracing::{debug, error, info};

/// Performs the full-page navigation to the hosted checkout.
///
/// The browser implementation lives in the WASM bindings; the CLI prints,
/// and tests record.
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, url: &str);
}

/// Result of one "buy" action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Session created; navigation handed to the `Navigator`
    Redirected,
    /// Attempt failed; `message` is the generic user-facing text
    Failed { message: &'static str },
    /// Another attempt holds the guard; nothing was sent
    Ignored,
}

/// Orchestrates checkout attempts against a payment gateway.
///
/// The flow mutex realizes the single-slot submission guard; it is locked
/// only for state transitions and never held across the network await.
pub struct CheckoutOrchestrator {
    gateway: BoxedPaymentGateway,
    navigator: Arc<dyn Navigator>,
    origin: TrustedOrigin,
    flow: Mutex<CheckoutFlow>,
}

impl CheckoutOrchestrator {
    /// Create an orchestrator
    pub fn new(
        gateway: BoxedPaymentGateway,
        navigator: Arc<dyn Navigator>,
        origin: TrustedOrigin,
    ) -> Self {
        Self {
            gateway,
            navigator,
            origin,
            flow: Mutex::new(CheckoutFlow::new()),
        }
    }

    fn flow(&self) -> MutexGuard<'_, CheckoutFlow> {
        self.flow.lock().expect("checkout flow lock poisoned")
    }

    /// Fetch the product catalog (read-only collaborator; no retry)
    pub async fn load_catalog(&self) -> StoreResult<Catalog> {
        let products = self.gateway.fetch_products().await?;
        Ok(Catalog { products })
    }

    /// Run one checkout attempt for `price_id`.
    ///
    /// A no-op while any attempt is in flight. Otherwise issues exactly one
    /// session-creation call: on success the navigator takes over and the
    /// guard stays held (the page is unloading); on any failure the guard is
    /// released and the generic checkout message becomes the active error.
    pub async fn checkout(&self, price_id: &str) -> CheckoutOutcome {
        if self.flow().begin(price_id) == BeginOutcome::AlreadyInFlight {
            debug!("Ignoring buy action for {}: checkout in flight", price_id);
            return CheckoutOutcome::Ignored;
        }

        let success_url = self
            .origin
            .sanitize_redirect_path(Route::PaymentSuccess.path());
        let cancel_url = self
            .origin
            .sanitize_redirect_path(Route::PaymentCancelled.path());

        let request = CheckoutRequest::new(price_id, success_url, cancel_url);

        match self.gateway.create_checkout_session(&request).await {
            Ok(session) => {
                self.flow().redirect();
                info!("Redirecting to hosted checkout for {}", price_id);
                self.navigator.navigate_to(&session.url);
                CheckoutOutcome::Redirected
            }
            Err(err) => {
                error!("Checkout failed for {}: {}", price_id, err);
                let message = err.user_message();
                self.flow().fail(&err);
                CheckoutOutcome::Failed { message }
            }
        }
    }

    /// The price currently holding the guard, if any
    pub fn in_flight(&self) -> Option<String> {
        self.flow().in_flight().map(str::to_string)
    }

    /// Whether the control for `price_id` should render as loading
    pub fn is_loading(&self, price_id: &str) -> bool {
        self.flow().is_loading(price_id)
    }

    /// The active user-visible error, if any
    pub fn error_message(&self) -> Option<&'static str> {
        self.flow().error_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use store_core::{CheckoutSession, PaymentGateway, Price, Product, StoreError};
    use tokio::sync::Notify;

    #[derive(Default)]
    struct RecordingNavigator {
        last: Mutex<Option<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate_to(&self, url: &str) {
            *self.last.lock().unwrap() = Some(url.to_string());
        }
    }

    impl RecordingNavigator {
        fn last(&self) -> Option<String> {
            self.last.lock().unwrap().clone()
        }
    }

    /// Gateway that parks session creation until released, recording the
    /// request and call count.
    struct PendingGateway {
        entered: Notify,
        release: Notify,
        calls: AtomicUsize,
        last_request: Mutex<Option<CheckoutRequest>>,
    }

    impl PendingGateway {
        fn new() -> Self {
            Self {
                entered: Notify::new(),
                release: Notify::new(),
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl PaymentGateway for PendingGateway {
        async fn fetch_products(&self) -> StoreResult<Vec<Product>> {
            Ok(vec![Product::with_price(
                "prod_1",
                "Widget",
                Price::new("price_1", "usd", 19.99),
            )])
        }

        async fn create_checkout_session(
            &self,
            request: &CheckoutRequest,
        ) -> StoreResult<CheckoutSession> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            self.entered.notify_one();
            self.release.notified().await;
            Ok(CheckoutSession {
                url: "https://checkout.example/cs_test_1".to_string(),
            })
        }
    }

    /// Gateway that fails the first N calls, then succeeds.
    struct FlakyGateway {
        failures: AtomicUsize,
        calls: AtomicUsize,
    }

    impl FlakyGateway {
        fn failing_first(n: usize) -> Self {
            Self {
                failures: AtomicUsize::new(n),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PaymentGateway for FlakyGateway {
        async fn fetch_products(&self) -> StoreResult<Vec<Product>> {
            Ok(Vec::new())
        }

        async fn create_checkout_session(
            &self,
            _request: &CheckoutRequest,
        ) -> StoreResult<CheckoutSession> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failures.load(Ordering::SeqCst) > 0 {
                self.failures.fetch_sub(1, Ordering::SeqCst);
                return Err(StoreError::SessionCreation("HTTP 500".into()));
            }
            Ok(CheckoutSession {
                url: "https://checkout.example/cs_test_2".to_string(),
            })
        }
    }

    fn origin() -> TrustedOrigin {
        TrustedOrigin::new("http://localhost:5173").unwrap()
    }

    fn orchestrator_with(
        gateway: Arc<dyn PaymentGateway>,
    ) -> (Arc<CheckoutOrchestrator>, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let orchestrator = Arc::new(CheckoutOrchestrator::new(
            gateway,
            navigator.clone(),
            origin(),
        ));
        (orchestrator, navigator)
    }

    #[tokio::test]
    async fn test_single_in_flight_submission() {
        let gateway = Arc::new(PendingGateway::new());
        let (orchestrator, navigator) = orchestrator_with(gateway.clone());

        let first = {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.checkout("price_1").await })
        };

        // Wait for the first request to reach the gateway
        gateway.entered.notified().await;
        assert_eq!(orchestrator.in_flight().as_deref(), Some("price_1"));

        // Second buy action for a different price is a no-op
        let second = orchestrator.checkout("price_2").await;
        assert_eq!(second, CheckoutOutcome::Ignored);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);

        gateway.release.notify_one();
        assert_eq!(first.await.unwrap(), CheckoutOutcome::Redirected);
        assert_eq!(
            navigator.last().as_deref(),
            Some("https://checkout.example/cs_test_1")
        );

        // Redirecting keeps the guard: the page is unloading
        assert_eq!(orchestrator.in_flight().as_deref(), Some("price_1"));
        assert_eq!(
            orchestrator.checkout("price_2").await,
            CheckoutOutcome::Ignored
        );
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_request_uses_sanitized_urls() {
        let gateway = Arc::new(PendingGateway::new());
        let (orchestrator, _navigator) = orchestrator_with(gateway.clone());

        let task = {
            let orchestrator = orchestrator.clone();
            tokio::spawn(async move { orchestrator.checkout("price_1").await })
        };

        gateway.entered.notified().await;
        gateway.release.notify_one();
        task.await.unwrap();

        let request = gateway.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.price_id, "price_1");
        assert_eq!(request.success_url, "http://localhost:5173/success");
        assert_eq!(request.cancel_url, "http://localhost:5173/cancel");
    }

    #[tokio::test]
    async fn test_guard_released_and_error_cleared_on_retry() {
        let gateway = Arc::new(FlakyGateway::failing_first(1));
        let (orchestrator, navigator) = orchestrator_with(gateway.clone());

        let outcome = orchestrator.checkout("price_1").await;
        assert_eq!(
            outcome,
            CheckoutOutcome::Failed {
                message: store_core::error::CHECKOUT_FAILURE_MESSAGE
            }
        );
        // Guard empty, error active, control clickable again
        assert_eq!(orchestrator.in_flight(), None);
        assert!(orchestrator.error_message().is_some());
        assert!(!orchestrator.is_loading("price_1"));

        // Retry for any price issues a fresh request and clears the error
        let outcome = orchestrator.checkout("price_1").await;
        assert_eq!(outcome, CheckoutOutcome::Redirected);
        assert_eq!(orchestrator.error_message(), None);
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
        assert_eq!(
            navigator.last().as_deref(),
            Some("https://checkout.example/cs_test_2")
        );
    }

    #[tokio::test]
    async fn test_load_catalog_renders_scenario() {
        let gateway = Arc::new(PendingGateway::new());
        let (orchestrator, _navigator) = orchestrator_with(gateway);

        let catalog = orchestrator.load_catalog().await.unwrap();
        assert_eq!(catalog.len(), 1);

        let product = catalog.get("prod_1").unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.prices[0].display(), "USD 19.99");
        // Idle flow: the buy control is enabled
        assert!(!orchestrator.is_loading("price_1"));
        assert_eq!(orchestrator.error_message(), None);
    }
}
