//! # store-core
//!
//! Core types and logic for the storefront checkout client.
//!
//! This crate provides:
//! - `Product`, `Price`, and `Catalog` for the product listing
//! - `TrustedOrigin` for safe redirect-URL construction
//! - `CheckoutFlow` for the per-attempt submission state machine
//! - `PaymentGateway` trait for talking to the payment backend
//! - `Route` for the fixed in-app pages and their outcome copy
//! - `StoreError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use store_core::{CheckoutFlow, CheckoutRequest, Route, TrustedOrigin};
//!
//! let origin = TrustedOrigin::new("https://shop.example")?;
//!
//! // Build redirect URLs the payment processor will call back to
//! let success_url = origin.sanitize_redirect_path(Route::PaymentSuccess.path());
//! let cancel_url = origin.sanitize_redirect_path(Route::PaymentCancelled.path());
//!
//! let request = CheckoutRequest::new("price_123", success_url, cancel_url);
//!
//! // Hand `request` to a `PaymentGateway` implementation and redirect the
//! // browser to the returned session URL.
//! ```

pub mod error;
pub mod flow;
pub mod gateway;
pub mod product;
pub mod redirect;
pub mod route;

// Re-exports for convenience
pub use error::{StoreError, StoreResult};
pub use flow::{BeginOutcome, CheckoutFlow, FlowState};
pub use gateway::{BoxedPaymentGateway, CheckoutRequest, CheckoutSession, PaymentGateway};
pub use product::{Catalog, Price, Product};
pub use redirect::TrustedOrigin;
pub use route::Route;
