//! # Routes
//!
//! The fixed in-application routes and the outcome copy rendered when the
//! payment processor redirects back. The paths are never user-configurable
//! and are always passed through the sanitizer before leaving the client.

/// In-application pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Product listing and buy controls
    Storefront,
    /// Landing page after a completed payment
    PaymentSuccess,
    /// Landing page after the customer cancels
    PaymentCancelled,
}

impl Route {
    /// The in-app path for this route
    pub fn path(&self) -> &'static str {
        match self {
            Route::Storefront => "/",
            Route::PaymentSuccess => "/success",
            Route::PaymentCancelled => "/cancel",
        }
    }

    /// Resolve a path to a route; unknown paths land on the storefront
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "/success" | "success" => Route::PaymentSuccess,
            "/cancel" | "cancel" => Route::PaymentCancelled,
            _ => Route::Storefront,
        }
    }

    /// Headline shown on this page
    pub fn headline(&self) -> &'static str {
        match self {
            Route::Storefront => "Products",
            Route::PaymentSuccess => "Payment Successful!",
            Route::PaymentCancelled => "Payment Cancelled",
        }
    }

    /// One-line detail shown under the headline
    pub fn detail(&self) -> &'static str {
        match self {
            Route::Storefront => "Select a product to start checkout.",
            Route::PaymentSuccess => {
                "Thank you for your purchase. Your payment has been processed successfully."
            }
            Route::PaymentCancelled => {
                "Your payment process was cancelled. No charges were made to your account."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_fixed() {
        assert_eq!(Route::PaymentSuccess.path(), "/success");
        assert_eq!(Route::PaymentCancelled.path(), "/cancel");
        assert_eq!(Route::Storefront.path(), "/");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/success"), Route::PaymentSuccess);
        assert_eq!(Route::from_path("/cancel/"), Route::PaymentCancelled);
        assert_eq!(Route::from_path("/"), Route::Storefront);
        assert_eq!(Route::from_path("/unknown"), Route::Storefront);
    }

    #[test]
    fn test_outcome_copy() {
        assert_eq!(Route::PaymentSuccess.headline(), "Payment Successful!");
        assert!(Route::PaymentCancelled.detail().contains("No charges"));
    }
}
