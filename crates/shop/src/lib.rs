//! Juniper Threads shop library.
//!
//! The storefront and the admin panel in one binary: they must share a
//! session, since admin logout discards the visitor's cart too.
//!
//! # Architecture
//!
//! - Axum web framework with Askama server-side rendering
//! - Session-scoped cart via tower-sessions (SQLite-backed store)
//! - SQLite product store via sqlx, migrations embedded
//! - All shared resources live in [`state::AppState`], built at startup

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;

use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete application: routes, session layer, request tracing.
///
/// # Errors
///
/// Returns an error if the session store migration fails.
pub async fn app(state: AppState) -> Result<Router, sqlx::Error> {
    let session_layer = middleware::create_session_layer(state.pool(), state.config()).await?;

    Ok(Router::new()
        .route("/health", get(routes::health))
        .route("/health/ready", get(routes::readiness))
        .merge(routes::routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(session_layer),
        )
        .with_state(state))
}
