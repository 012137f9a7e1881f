//! JSON product API.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use juniper_threads_core::{Price, ProductId};

use crate::error::AppError;
use crate::models::Product;
use crate::state::AppState;

/// Product payload for the JSON API.
///
/// Prices serialize as exact decimal strings (e.g. `"19.99"`).
#[derive(Debug, Serialize)]
pub struct ApiProduct {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

impl From<Product> for ApiProduct {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            image_url: product.image_url,
            description: product.description,
        }
    }
}

/// List all products.
///
/// GET /api/products
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ApiProduct>>, AppError> {
    let products = state.products().list().await?;
    Ok(Json(products.into_iter().map(ApiProduct::from).collect()))
}

/// Get a single product.
///
/// GET /api/products/{id}
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiProduct>, AppError> {
    let product = state
        .products()
        .get(ProductId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(Json(ApiProduct::from(product)))
}
