//! Checkout route handlers.
//!
//! Checkout is a mock: it captures the buyer fields, clears the cart, and
//! renders a confirmation. No order record is persisted and no payment is
//! taken.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::routes::cart::{CartLine, load_cart, remove_cart, snapshot};
use crate::state::AppState;

/// Checkout form template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub items: Vec<CartLine>,
    pub total: Decimal,
    pub cart_count: i64,
}

/// Buyer-supplied order fields, captured as opaque strings.
///
/// Missing fields default to empty; there is no shape validation.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

/// Confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout_success.html")]
pub struct CheckoutSuccessTemplate {
    pub order: OrderForm,
    pub cart_count: i64,
}

/// Render the checkout form, or bounce back to the cart when nothing in it
/// is purchasable (cart empty, or every line's product was deleted).
///
/// GET /checkout
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Response, AppError> {
    let cart = load_cart(&session).await;
    let repo = state.products();
    let view = snapshot(&repo, &cart).await?;

    if view.is_empty() {
        return Ok(Redirect::to("/cart").into_response());
    }

    Ok(CheckoutTemplate {
        items: view.lines,
        total: view.total,
        cart_count: cart.item_count(),
    }
    .into_response())
}

/// Mock order processing: clear the cart and confirm with the submitted
/// fields. The cart is cleared regardless of what was submitted.
///
/// POST /checkout/process
#[instrument(skip(session, form))]
pub async fn process(
    session: Session,
    Form(form): Form<OrderForm>,
) -> Result<CheckoutSuccessTemplate, AppError> {
    remove_cart(&session).await?;

    Ok(CheckoutSuccessTemplate {
        order: form,
        cart_count: 0,
    })
}
