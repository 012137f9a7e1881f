//! Cart route handlers and session cart helpers.
//!
//! The cart itself is a quantity map stored in the session (see
//! [`crate::models::Cart`]). Rendering joins it against the product store,
//! so prices are always current and lines for deleted products vanish from
//! the view.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Json,
    extract::{FromRequest, Request, State},
    http::header,
    response::Redirect,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use juniper_threads_core::ProductId;

use crate::db::{ProductRepository, RepositoryError};
use crate::error::AppError;
use crate::filters;
use crate::models::{Cart, Product, session_keys};
use crate::state::AppState;

// ============================================================================
// Session helpers
// ============================================================================

/// Load the cart from the session, or an empty cart if none is stored.
pub async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(session_keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Store the cart in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn save_cart(
    session: &Session,
    cart: &Cart,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::CART, cart).await
}

/// Remove the cart mapping from the session entirely.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn remove_cart(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.remove::<Cart>(session_keys::CART).await?;
    Ok(())
}

// ============================================================================
// Cart snapshot
// ============================================================================

/// One cart line resolved against the product store.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub product: Product,
    pub quantity: i64,
    pub line_total: Decimal,
}

/// The cart joined against the current product store.
#[derive(Debug, Clone)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
    pub total: Decimal,
}

impl CartSnapshot {
    /// True when no stored line resolved to a product.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Resolve each stored line against the product store.
///
/// Lines whose product no longer exists are dropped from the view; the
/// stored cart is left untouched, so the badge count can exceed the visible
/// lines after a product deletion.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if a lookup fails.
pub async fn snapshot(
    repo: &ProductRepository<'_>,
    cart: &Cart,
) -> Result<CartSnapshot, RepositoryError> {
    let mut lines = Vec::with_capacity(cart.len());
    let mut total = Decimal::new(0, 2);

    for (&id, &quantity) in cart.iter() {
        if let Some(product) = repo.get(id).await? {
            let line_total = product.price.times(quantity);
            total += line_total;
            lines.push(CartLine {
                product,
                quantity,
                line_total,
            });
        }
    }

    Ok(CartSnapshot { lines, total })
}

// ============================================================================
// Add-to-cart payload
// ============================================================================

/// A field that JSON clients may send as a number or a string; form encoding
/// always sends strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Int(i64),
    Text(String),
}

impl FieldValue {
    fn parse_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            Self::Int(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

/// Raw add-to-cart fields from a JSON body.
#[derive(Debug, Default, Deserialize)]
struct RawAddToCart {
    product_id: Option<FieldValue>,
    quantity: Option<FieldValue>,
}

/// Raw add-to-cart fields from an URL-encoded form.
#[derive(Debug, Default, Deserialize)]
struct RawAddToCartForm {
    product_id: Option<String>,
    quantity: Option<String>,
}

impl From<RawAddToCartForm> for RawAddToCart {
    fn from(form: RawAddToCartForm) -> Self {
        Self {
            product_id: form.product_id.map(FieldValue::Text),
            quantity: form.quantity.map(FieldValue::Text),
        }
    }
}

/// Validated add-to-cart request.
///
/// Parsed from a JSON body when the content type is JSON, otherwise from an
/// URL-encoded form, in that order of precedence. The product id must parse
/// as a positive integer; the quantity defaults to 1 and is otherwise
/// accepted as provided.
#[derive(Debug)]
pub struct AddToCart {
    pub product_id: ProductId,
    pub quantity: i64,
}

fn is_json_request(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

impl<S> FromRequest<S> for AddToCart
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // An unreadable body is treated the same as one with no fields.
        let raw = if is_json_request(&req) {
            Json::<RawAddToCart>::from_request(req, state)
                .await
                .map(|Json(raw)| raw)
                .unwrap_or_default()
        } else {
            Form::<RawAddToCartForm>::from_request(req, state)
                .await
                .map(|Form(raw)| RawAddToCart::from(raw))
                .unwrap_or_default()
        };

        let product_id = raw
            .product_id
            .filter(|value| !value.is_blank())
            .ok_or_else(|| AppError::BadRequest("product_id required".to_string()))?;
        let product_id = product_id
            .parse_i64()
            .filter(|id| *id > 0)
            .map(ProductId::new)
            .ok_or_else(|| AppError::BadRequest("invalid product_id".to_string()))?;

        let quantity = match raw.quantity {
            Some(value) => value
                .parse_i64()
                .ok_or_else(|| AppError::BadRequest("invalid quantity".to_string()))?,
            None => 1,
        };

        Ok(Self {
            product_id,
            quantity,
        })
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// JSON response for add-to-cart.
#[derive(Debug, Serialize)]
pub struct CartCountResponse {
    pub cart_count: i64,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub items: Vec<CartLine>,
    pub total: Decimal,
    pub cart_count: i64,
}

/// Add a product to the cart.
///
/// POST /add-to-cart
///
/// Returns the updated total item count. The product is not required to
/// exist; unresolvable lines are simply dropped when the cart is rendered.
#[instrument(skip(session))]
pub async fn add(
    session: Session,
    payload: AddToCart,
) -> Result<Json<CartCountResponse>, AppError> {
    let mut cart = load_cart(&session).await;
    let cart_count = cart.add(payload.product_id, payload.quantity);
    save_cart(&session, &cart).await?;

    Ok(Json(CartCountResponse { cart_count }))
}

/// Display the cart page.
///
/// GET /cart
#[instrument(skip(state, session))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
) -> Result<CartTemplate, AppError> {
    let cart = load_cart(&session).await;
    let repo = state.products();
    let view = snapshot(&repo, &cart).await?;

    Ok(CartTemplate {
        items: view.lines,
        total: view.total,
        cart_count: cart.item_count(),
    })
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub quantity: i64,
}

/// Set a line's quantity; zero or below removes the line.
///
/// POST /cart/update
#[instrument(skip(session))]
pub async fn update(
    session: Session,
    Form(form): Form<UpdateCartForm>,
) -> Result<Redirect, AppError> {
    // An id that does not parse can never match a stored line; treat it the
    // same as an absent one.
    if let Ok(id) = form.product_id.trim().parse::<i64>() {
        let mut cart = load_cart(&session).await;
        cart.set_quantity(ProductId::new(id), form.quantity);
        save_cart(&session, &cart).await?;
    }

    Ok(Redirect::to("/cart"))
}

/// Drop the whole cart.
///
/// POST /cart/clear
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Result<Redirect, AppError> {
    remove_cart(&session).await?;
    Ok(Redirect::to("/cart"))
}
