//! Admin login and logout.
//!
//! A deliberate placeholder trust boundary: one configured credential pair,
//! compared in plain text. No hashing, no rate limiting, no session rotation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::AppError;
use crate::filters;
use crate::middleware::set_current_admin;
use crate::models::CurrentAdmin;
use crate::routes::cart::load_cart;
use crate::state::AppState;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub cart_count: i64,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Render the login page.
///
/// GET /login
#[instrument(skip(session))]
pub async fn login_page(session: Session) -> LoginTemplate {
    LoginTemplate {
        error: None,
        cart_count: load_cart(&session).await.item_count(),
    }
}

/// Check credentials; on success store the admin marker in the session.
///
/// POST /login
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    if state.config().admin.verify(&form.username, &form.password) {
        set_current_admin(
            &session,
            &CurrentAdmin {
                username: form.username,
            },
        )
        .await?;
        return Ok(Redirect::to("/dashboard").into_response());
    }

    tracing::warn!("failed admin login attempt");
    Ok(LoginTemplate {
        error: Some("Invalid username or password!".to_string()),
        cart_count: load_cart(&session).await.item_count(),
    }
    .into_response())
}

/// Logout discards the whole session, cart included.
///
/// GET /logout
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    session.flush().await?;
    Ok(Redirect::to("/login"))
}
