//! Product model.

use chrono::{DateTime, Utc};

use juniper_threads_core::{Price, ProductId};

/// A product in the catalog.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Product {
    /// System-assigned, monotonic identifier.
    pub id: ProductId,
    pub name: String,
    #[sqlx(rename = "price_cents")]
    pub price: Price,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a product (id and timestamp are assigned on insert).
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Price,
    pub image_url: Option<String>,
    pub description: Option<String>,
}
