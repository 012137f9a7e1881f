//! Admin dashboard: product management.
//!
//! Every route here sits behind [`RequireAdmin`]. The dashboard page carries
//! both the product table and the add-product form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use juniper_threads_core::{Price, ProductId};

use crate::error::AppError;
use crate::filters;
use crate::middleware::RequireAdmin;
use crate::models::{CurrentAdmin, NewProduct, Product};
use crate::routes::cart::load_cart;
use crate::state::AppState;

/// Dashboard template: product table plus the add-product form.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub admin: CurrentAdmin,
    pub products: Vec<Product>,
    pub error: Option<String>,
    pub cart_count: i64,
}

/// Display the dashboard.
///
/// GET /dashboard (also serves GET /add-product; the form is on this page)
#[instrument(skip_all)]
pub async fn index(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    session: Session,
) -> Result<DashboardTemplate, AppError> {
    let products = state.products().list().await?;

    Ok(DashboardTemplate {
        admin,
        products,
        error: None,
        cart_count: load_cart(&session).await.item_count(),
    })
}

/// Add product form data.
#[derive(Debug, Deserialize)]
pub struct AddProductForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// Create a product.
///
/// POST /add-product
///
/// A bad submission re-renders the dashboard with an error banner instead
/// of an error status.
#[instrument(skip_all)]
pub async fn add_product(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddProductForm>,
) -> Result<Response, AppError> {
    let cart_count = load_cart(&session).await.item_count();

    let name = form.name.trim();
    if name.is_empty() {
        return banner(&state, admin, cart_count, "name is required".to_string()).await;
    }

    let price = match Price::parse(&form.price) {
        Ok(price) => price,
        Err(err) => return banner(&state, admin, cart_count, err.to_string()).await,
    };

    let new = NewProduct {
        name: name.to_string(),
        price,
        image_url: form.image_url.filter(|url| !url.trim().is_empty()),
        description: form.description.filter(|text| !text.trim().is_empty()),
    };

    match state.products().create(&new).await {
        Ok(product) => {
            tracing::info!(product_id = %product.id, name = %product.name, "product created");
            Ok(Redirect::to("/dashboard").into_response())
        }
        Err(err) => banner(&state, admin, cart_count, err.to_string()).await,
    }
}

/// Re-render the dashboard with an error banner.
async fn banner(
    state: &AppState,
    admin: CurrentAdmin,
    cart_count: i64,
    message: String,
) -> Result<Response, AppError> {
    let products = state.products().list().await?;

    Ok(DashboardTemplate {
        admin,
        products,
        error: Some(format!("Error adding product: {message}")),
        cart_count,
    }
    .into_response())
}

/// Delete a product.
///
/// POST /delete-product/{id}
///
/// A failed delete (unknown id included) is logged and ignored; the admin
/// lands back on the dashboard either way.
#[instrument(skip_all, fields(product_id = id))]
pub async fn delete_product(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Redirect {
    if let Err(err) = state.products().delete(ProductId::new(id)).await {
        tracing::debug!(error = %err, "product delete ignored");
    }

    Redirect::to("/dashboard")
}

/// Legacy alias for the dashboard.
///
/// GET /admin
#[instrument(skip_all)]
pub async fn admin_redirect(RequireAdmin(_admin): RequireAdmin) -> Redirect {
    Redirect::to("/dashboard")
}
