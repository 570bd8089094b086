//! # Error Types
//!
//! Typed error handling for the storefront client.
//! All fallible operations return `Result<T, StoreError>`.

use thiserror::Error;

/// Core error type for the storefront client
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration errors (bad origin, missing values)
    #[error("Invalid origin: {0}")]
    InvalidOrigin(String),

    /// Product catalog could not be loaded
    #[error("Catalog fetch failed: {0}")]
    CatalogFetch(String),

    /// Checkout session creation failed (transport or non-success status)
    #[error("Session creation failed: {0}")]
    SessionCreation(String),

    /// Backend responded with success status but an unusable body
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Generic catalog failure message shown to the user
pub const CATALOG_FAILURE_MESSAGE: &str = "Failed to load products. Please try again later.";

/// Generic checkout failure message shown to the user
pub const CHECKOUT_FAILURE_MESSAGE: &str = "Failed to initiate checkout. Please try again later.";

impl StoreError {
    /// The user-facing message for this error.
    ///
    /// Every error collapses to one of two generic strings. Raw detail
    /// (status codes, server text, decode errors) stays inside the error
    /// for logging and must never reach the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            StoreError::CatalogFetch(_) => CATALOG_FAILURE_MESSAGE,
            StoreError::InvalidOrigin(_)
            | StoreError::SessionCreation(_)
            | StoreError::MalformedResponse(_) => CHECKOUT_FAILURE_MESSAGE,
        }
    }

    /// Returns true if this error came from the catalog read
    pub fn is_catalog_failure(&self) -> bool {
        matches!(self, StoreError::CatalogFetch(_))
    }
}

/// Result type alias for storefront operations
pub type StoreResult<T> = Result<T, StoreError>;
