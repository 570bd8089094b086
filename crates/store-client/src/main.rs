//! # Storefront CLI
//!
//! Smoke-test client for a deployed payment backend: lists the product
//! catalog and optionally creates a checkout session, printing the hosted
//! checkout URL instead of navigating.
//!
//! ## Usage
//!
//! ```bash
//! export API_BASE_URL=http://localhost:8000
//! export PAGE_ORIGIN=http://localhost:5173
//!
//! # List products
//! storefront
//!
//! # Create a session for a price and print the redirect URL
//! CHECKOUT_PRICE_ID=price_123 storefront
//! ```

use std::sync::Arc;

use store_client::{CheckoutOrchestrator, CheckoutOutcome, ClientConfig, HttpPaymentGateway, Navigator};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Prints the hosted-checkout URL instead of navigating
struct PrintingNavigator;

impl Navigator for PrintingNavigator {
    fn navigate_to(&self, url: &str) {
        println!("\nHosted checkout URL:\n  {}", url);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config = ClientConfig::from_env();
    let page_origin =
        std::env::var("PAGE_ORIGIN").unwrap_or_else(|_| "http://localhost:5173".to_string());

    info!("Environment: {}", config.environment);
    info!("API base: {}", config.api_base);

    let origin = config.trusted_origin(&page_origin)?;
    info!("Trusted redirect origin: {}", origin.as_origin_str());

    let gateway = Arc::new(HttpPaymentGateway::new(&config.api_base));
    let orchestrator =
        CheckoutOrchestrator::new(gateway, Arc::new(PrintingNavigator), origin);

    let catalog = orchestrator.load_catalog().await?;

    println!("Products ({}):", catalog.len());
    for product in &catalog.products {
        println!("  {} — {}", product.id, product.name);
        if let Some(desc) = &product.description {
            println!("    {}", desc);
        }
        for price in &product.prices {
            let kind = if price.recurring { "subscription" } else { "one-time" };
            println!("    {}  {}  ({})", price.id, price.display(), kind);
        }
    }

    if let Ok(price_id) = std::env::var("CHECKOUT_PRICE_ID") {
        info!("Creating checkout session for {}", price_id);
        match orchestrator.checkout(&price_id).await {
            CheckoutOutcome::Redirected => {}
            CheckoutOutcome::Failed { message } => println!("\n{}", message),
            CheckoutOutcome::Ignored => {}
        }
    }

    Ok(())
}
