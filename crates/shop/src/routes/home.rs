//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::models::Product;
use crate::routes::cart::load_cart;
use crate::state::AppState;

/// Home page template: the product grid plus the cart badge.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub products: Vec<Product>,
    pub cart_count: i64,
}

/// Display the home page.
///
/// GET /
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
) -> Result<HomeTemplate, AppError> {
    let products = state.products().list().await?;
    let cart_count = load_cart(&session).await.item_count();

    Ok(HomeTemplate {
        products,
        cart_count,
    })
}
