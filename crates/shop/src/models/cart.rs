//! The session cart: a product-id → quantity map with pure transitions.
//!
//! The cart holds no prices; those are resolved against the product store
//! when the cart is rendered, so a price change between add and checkout is
//! reflected immediately.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use juniper_threads_core::ProductId;

/// Per-session shopping cart.
///
/// Invariant: stored quantities are always positive. Any transition that
/// would leave a line at zero or below removes the line instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: BTreeMap<ProductId, i64>,
}

impl Cart {
    /// Add `quantity` units of a product, on top of any existing line.
    ///
    /// Negative quantities subtract; a line that falls to zero or below is
    /// removed. Returns the updated total item count.
    pub fn add(&mut self, id: ProductId, quantity: i64) -> i64 {
        let line = {
            let line = self.items.entry(id).or_insert(0);
            *line += quantity;
            *line
        };
        if line <= 0 {
            self.items.remove(&id);
        }
        self.item_count()
    }

    /// Overwrite the quantity of an existing line.
    ///
    /// A quantity of zero or below removes the line. If the product is not
    /// in the cart this is a silent no-op; it never inserts a new line.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        if !self.items.contains_key(&id) {
            return;
        }
        if quantity > 0 {
            self.items.insert(id, quantity);
        } else {
            self.items.remove(&id);
        }
    }

    /// Total item count: the sum of all quantities (the cart badge).
    #[must_use]
    pub fn item_count(&self) -> i64 {
        self.items.values().sum()
    }

    /// Quantity stored for a product, if it is in the cart.
    #[must_use]
    pub fn quantity(&self, id: ProductId) -> Option<i64> {
        self.items.get(&id).copied()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over (product id, quantity) lines in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, &i64)> {
        self.items.iter()
    }
}
