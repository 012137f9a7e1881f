//! Session-related types.
//!
//! Everything the shop keeps per visitor lives in the session: the cart
//! quantity map and, for the admin panel, the login marker.

use serde::{Deserialize, Serialize};

/// Session-stored admin identity.
///
/// Its presence in the session is what opens the admin gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    pub username: String,
}

/// Session keys.
pub mod keys {
    /// Key for the shopping cart quantity map.
    pub const CART: &str = "cart";

    /// Key for the logged-in admin marker.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
