//! # Product Types
//!
//! Product and price types for the storefront.
//! The catalog is fetched from the payment backend and rendered as-is;
//! identifiers and amounts are provider-assigned and opaque to the client.

use serde::{Deserialize, Serialize};

/// A purchasable price attached to a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Provider-assigned price identifier (e.g., "price_1abc...")
    pub id: String,

    /// ISO 4217 currency code, lowercase on the wire (e.g., "usd")
    pub currency: String,

    /// Decimal unit amount (e.g., 19.99)
    pub unit_amount: f64,

    /// Whether this price bills on a recurring schedule
    #[serde(default)]
    pub recurring: bool,
}

impl Price {
    /// Create a new price
    pub fn new(id: impl Into<String>, currency: impl Into<String>, unit_amount: f64) -> Self {
        Self {
            id: id.into(),
            currency: currency.into(),
            unit_amount,
            recurring: false,
        }
    }

    /// Builder: mark as recurring
    pub fn recurring(mut self) -> Self {
        self.recurring = true;
        self
    }

    /// Format for display (e.g., "USD 19.99")
    pub fn display(&self) -> String {
        format!("{} {:.2}", self.currency.to_uppercase(), self.unit_amount)
    }
}

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Provider-assigned product identifier (e.g., "prod_1abc...")
    pub id: String,

    /// Display name
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,

    /// Image URL
    #[serde(default)]
    pub image: Option<String>,

    /// Prices for this product, in display order
    #[serde(default)]
    pub prices: Vec<Price>,
}

impl Product {
    /// Create a product with a single price
    pub fn with_price(id: impl Into<String>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            image: None,
            prices: vec![price],
        }
    }

    /// Builder: set description
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Builder: set image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }
}

/// The product catalog as returned by one fetch.
///
/// Replaced wholesale on refetch; never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// Find a product by ID
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Find the product owning a price ID
    pub fn product_for_price(&self, price_id: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|p| p.prices.iter().any(|pr| pr.id == price_id))
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
