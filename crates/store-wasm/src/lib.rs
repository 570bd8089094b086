//! # store-wasm
//!
//! WebAssembly bindings for the storefront checkout client.
//!
//! This crate provides browser-side functions for:
//! - Building sanitized success/cancel redirect URLs from the page origin
//! - Performing the full-page navigation to the hosted checkout
//! - Formatting prices and rendering payment outcome copy
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { RedirectSanitizer, redirect_to_checkout } from 'storefront-wasm';
//!
//! await init();
//!
//! const sanitizer = RedirectSanitizer.for_page('https://shop.example', IS_PROD);
//! const body = {
//!   price_id: priceId,
//!   success_url: sanitizer.sanitize('/success'),
//!   cancel_url: sanitizer.sanitize('/cancel'),
//! };
//! // POST body to the backend, then:
//! redirect_to_checkout(session.url);
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use store_core::{Catalog, Price, Route, TrustedOrigin};
use wasm_bindgen::prelude::*;

/// Initialize the WASM module (called automatically)
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Sanitizer bound to the trusted origin for this page session
#[wasm_bindgen]
pub struct RedirectSanitizer {
    origin: TrustedOrigin,
}

#[wasm_bindgen]
impl RedirectSanitizer {
    /// Create a sanitizer from explicit origins.
    #[wasm_bindgen(constructor)]
    pub fn new(
        production_origin: &str,
        is_production: bool,
        page_origin: &str,
    ) -> Result<RedirectSanitizer, JsValue> {
        let origin = TrustedOrigin::for_environment(production_origin, is_production, page_origin)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { origin })
    }

    /// Create a sanitizer using the browser's own `location.origin` as the
    /// non-production base.
    pub fn for_page(
        production_origin: &str,
        is_production: bool,
    ) -> Result<RedirectSanitizer, JsValue> {
        let page_origin = page_origin()?;
        Self::new(production_origin, is_production, &page_origin)
    }

    /// The trusted origin (e.g., "https://shop.example")
    #[wasm_bindgen(getter)]
    pub fn origin(&self) -> String {
        self.origin.as_origin_str()
    }

    /// Resolve an in-app path into a safe absolute URL on the trusted origin
    pub fn sanitize(&self, path: &str) -> String {
        self.origin.sanitize_redirect_path(path)
    }

    /// Sanitized success redirect URL
    pub fn success_url(&self) -> String {
        self.sanitize(Route::PaymentSuccess.path())
    }

    /// Sanitized cancel redirect URL
    pub fn cancel_url(&self) -> String {
        self.sanitize(Route::PaymentCancelled.path())
    }
}

/// The origin the page was loaded from
pub fn page_origin() -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.location().origin()
}

/// Navigate the browser to the hosted checkout URL (full page load)
#[wasm_bindgen]
pub fn redirect_to_checkout(url: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.location().set_href(url)
}

/// Format a price for display (e.g., "USD 19.99")
#[wasm_bindgen]
pub fn format_price(currency: &str, unit_amount: f64) -> String {
    Price::new("", currency, unit_amount).display()
}

/// Headline for the page at `path` ("/success", "/cancel", ...)
#[wasm_bindgen]
pub fn outcome_headline(path: &str) -> String {
    Route::from_path(path).headline().to_string()
}

/// Detail line for the page at `path`
#[wasm_bindgen]
pub fn outcome_detail(path: &str) -> String {
    Route::from_path(path).detail().to_string()
}

/// Parse and validate a catalog response body, returning normalized JSON.
///
/// Rejects malformed bodies so the caller can show the generic
/// "failed to load" message instead of rendering garbage.
#[wasm_bindgen]
pub fn parse_catalog(json: &str) -> Result<String, JsValue> {
    let catalog: Catalog =
        serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&catalog).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Validate a price ID before submitting a checkout
#[wasm_bindgen]
pub fn validate_price_id(price_id: &str) -> bool {
    !price_id.is_empty()
        && price_id.len() <= 100
        && price_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Log to browser console
#[wasm_bindgen]
pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
