//! Session-scoped shopping cart.
//!
//! The cart is an explicitly owned store handle: clones share one line
//! list, and every mutation goes through a method on the handle. Totals
//! are derived from the lines on every read, never stored as fields.
//! Nothing is persisted; the cart dies with the owning session.

mod summary;

pub use summary::{OrderSummary, PromoCode, PromoError};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use stridewell_core::{Price, ProductId};

use crate::catalog::Product;

/// One product/quantity pair in the cart.
///
/// The product is a snapshot taken when the line was created; catalog
/// records never change, so it stays accurate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    /// The product in this line.
    pub product: Product,
    /// Number of units; always positive (zero-quantity lines are removed).
    pub quantity: u32,
}

impl CartLine {
    /// Unit price after any product discount.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        self.product.sale_price()
    }

    /// Line total: discounted unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price().times(self.quantity)
    }
}

/// Shared cart store for one session.
///
/// Cheaply cloneable; clones operate on the same line list. Mutations are
/// synchronous with no suspension point inside, so no two of them can
/// interleave mid-update.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    inner: Arc<Mutex<Vec<CartLine>>>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the line list.
    ///
    /// A poisoned lock is recovered: no cart method can leave the list in
    /// a torn state, so the data behind a panic is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<CartLine>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add units of a product to the cart.
    ///
    /// Merges into an existing line for the same product id, otherwise
    /// appends a new line. Adding zero units is a no-op. Stock limits are
    /// not enforced here; that is the caller's concern.
    pub fn add(&self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        let mut lines = self.lock();
        if let Some(line) = lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            lines.push(CartLine {
                product: product.clone(),
                quantity,
            });
        }
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero removes the line, exactly like [`Self::remove`].
    /// Unknown ids are a no-op.
    pub fn update_quantity(&self, id: &ProductId, quantity: u32) {
        let mut lines = self.lock();
        if quantity == 0 {
            lines.retain(|l| l.product.id != *id);
            return;
        }
        if let Some(line) = lines.iter_mut().find(|l| l.product.id == *id) {
            line.quantity = quantity;
        }
    }

    /// Remove a line if present; absent ids are a no-op, not an error.
    pub fn remove(&self, id: &ProductId) {
        self.lock().retain(|l| l.product.id != *id);
    }

    /// Remove all lines.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Snapshot of the current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.lock().clone()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lock()
            .iter()
            .fold(0, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Sum of line totals (discounted unit price times quantity).
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lock().iter().map(CartLine::line_total).sum()
    }

    /// Cost breakdown for the current contents, optionally with a promo
    /// code applied.
    ///
    /// # Errors
    ///
    /// Returns a [`PromoError`] when the code is not applicable to this
    /// order.
    pub fn summary(&self, promo: Option<PromoCode>) -> Result<OrderSummary, PromoError> {
        OrderSummary::for_subtotal(self.subtotal(), promo)
    }
}
