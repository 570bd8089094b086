//! # store-client
//!
//! Runnable client layer for the storefront:
//! - `ClientConfig` — environment configuration, read once at startup
//! - `HttpPaymentGateway` — reqwest implementation of `PaymentGateway`
//! - `CheckoutOrchestrator` — the per-selection checkout lifecycle
//! - `Navigator` — seam for the full-page redirect
//!
//! ## Flow
//!
//! ```rust,ignore
//! use store_client::{CheckoutOrchestrator, ClientConfig, HttpPaymentGateway};
//! use std::sync::Arc;
//!
//! let config = ClientConfig::from_env();
//! let origin = config.trusted_origin("http://localhost:5173")?;
//! let gateway = Arc::new(HttpPaymentGateway::new(&config.api_base));
//!
//! let orchestrator = CheckoutOrchestrator::new(gateway, navigator, origin);
//!
//! let products = orchestrator.load_catalog().await?;
//! orchestrator.checkout("price_123").await;
//! ```

pub mod config;
pub mod http;
pub mod orchestrator;

pub use config::ClientConfig;
pub use http::HttpPaymentGateway;
pub use orchestrator::{CheckoutOrchestrator, CheckoutOutcome, Navigator};
