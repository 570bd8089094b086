//! # Client Configuration
//!
//! Environment configuration for the storefront client.
//! Read once at startup; there is no runtime reconfiguration.

use store_core::{StoreResult, TrustedOrigin};

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the payment backend API
    pub api_base: String,
    /// Fixed origin used for redirect URLs in production builds
    pub production_origin: String,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl ClientConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_base: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            production_origin: std::env::var("PRODUCTION_ORIGIN")
                .unwrap_or_else(|_| "https://shop.example".to_string()),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Resolve the trusted origin for redirect URLs.
    ///
    /// `page_origin` is the origin the page was loaded from; production
    /// builds ignore it in favor of the fixed production origin.
    pub fn trusted_origin(&self, page_origin: &str) -> StoreResult<TrustedOrigin> {
        TrustedOrigin::for_environment(&self.production_origin, self.is_production(), page_origin)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(environment: &str) -> ClientConfig {
        ClientConfig {
            api_base: "http://localhost:8000".to_string(),
            production_origin: "https://shop.example".to_string(),
            environment: environment.to_string(),
        }
    }

    #[test]
    fn test_is_production() {
        assert!(config("production").is_production());
        assert!(!config("development").is_production());
        assert!(!config("staging").is_production());
    }

    #[test]
    fn test_trusted_origin_selection() {
        let prod = config("production")
            .trusted_origin("http://localhost:5173")
            .unwrap();
        assert_eq!(prod.as_origin_str(), "https://shop.example");

        let dev = config("development")
            .trusted_origin("http://localhost:5173")
            .unwrap();
        assert_eq!(dev.as_origin_str(), "http://localhost:5173");
    }
}
