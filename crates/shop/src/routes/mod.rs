//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (product grid + cart badge)
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (database)
//!
//! # Cart
//! POST /add-to-cart            - Add a product (JSON or form body, JSON reply)
//! GET  /cart                   - Cart page
//! POST /cart/update            - Set/remove a line, redirect to /cart
//! POST /cart/clear             - Drop the cart, redirect to /cart
//!
//! # Checkout
//! GET  /checkout               - Checkout form, or redirect when empty
//! POST /checkout/process       - Mock processing; clears the cart
//!
//! # Admin
//! GET  /login                  - Login page
//! POST /login                  - Credential check
//! GET  /logout                 - Flush session, redirect to /login
//! GET  /dashboard              - Product management (gated)
//! GET  /add-product            - Creation form (gated; same page)
//! POST /add-product            - Create product (gated)
//! POST /delete-product/{id}    - Delete product (gated, failures swallowed)
//! GET  /admin                  - Legacy alias, redirect to /dashboard
//!
//! # JSON API
//! GET  /api/products           - All products
//! GET  /api/products/{id}      - Single product or 404
//! ```

pub mod api;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod dashboard;
pub mod home;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{
    Router,
    routing::{get, post},
};

use crate::error::AppError;
use crate::state::AppState;

/// Create all routes for the shop.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::index))
        // Cart
        .route("/add-to-cart", post(cart::add))
        .route("/cart", get(cart::show))
        .route("/cart/update", post(cart::update))
        .route("/cart/clear", post(cart::clear))
        // Checkout
        .route("/checkout", get(checkout::show))
        .route("/checkout/process", post(checkout::process))
        // Admin
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/dashboard", get(dashboard::index))
        .route(
            "/add-product",
            get(dashboard::index).post(dashboard::add_product),
        )
        .route("/delete-product/{id}", post(dashboard::delete_product))
        .route("/admin", get(dashboard::admin_redirect))
        // JSON API
        .route("/api/products", get(api::list))
        .route("/api/products/{id}", get(api::show))
        .fallback(not_found)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Fallback for unknown paths.
async fn not_found() -> AppError {
    AppError::NotFound("no such route".to_string())
}
