//! # Cart State
//!
//! The shopping cart for the local storage scope, independent of who is
//! logged in.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  UI Action                Command                 Cart Change           │
//! │  ─────────                ───────                 ───────────           │
//! │                                                                         │
//! │  Add to Cart ────────────► add_to_cart() ───────► Added (qty + 1)      │
//! │                                                                         │
//! │  Change Quantity ────────► update_cart_item() ──► QuantityUpdated      │
//! │                                                   (qty < 1 → Removed)  │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ──► Removed / Unchanged  │
//! │                                                                         │
//! │  Click Clear ────────────► clear_cart() ────────► Cleared              │
//! │                                                                         │
//! │  Every mutation rewrites `cartItems`. A failed write is logged and     │
//! │  the in-memory cart stays authoritative.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store is owned by the application context and mutated through
//! `&mut self`, so calls apply strictly in order.

use tracing::{debug, info, warn};

use market_core::{Cart, CartChange, CartItem, CartPolicy, CartTotals, CoreResult, Money};
use market_store::{CartRepository, KeyValueStore};

/// Persistent cart.
#[derive(Debug)]
pub struct CartStore<S> {
    repo: CartRepository<S>,
    cart: Cart,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Restores the cart from `store`.
    ///
    /// An unreadable blob is removed. Invalid lines are dropped and duplicate
    /// ids merged; when that changes anything the cleaned cart is written back.
    pub fn init(store: S, policy: CartPolicy) -> Self {
        let mut repo = CartRepository::new(store);

        let items = match repo.load() {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Discarding unreadable cart");
                if let Err(e) = repo.discard() {
                    warn!(error = %e, "Failed to remove unreadable cart");
                }
                Vec::new()
            }
        };

        let (cart, discarded) = Cart::from_restored(items, policy);

        let mut store = CartStore { repo, cart };
        if discarded > 0 {
            warn!(discarded, "Dropped or merged invalid cart lines on restore");
            store.persist();
        }

        info!(
            lines = store.cart.line_count(),
            items = store.cart.total_items(),
            "Cart restored"
        );
        store
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of `item`. The quantity on the input is ignored.
    pub fn add_to_cart(&mut self, item: CartItem) -> CoreResult<CartChange> {
        let change = self.cart.add(item)?;
        debug!(?change, "add_to_cart");
        self.persist();
        Ok(change)
    }

    /// Sets the quantity of line `id`. Anything below 1 removes the line.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> CoreResult<CartChange> {
        let change = self.cart.update_quantity(id, quantity)?;
        debug!(?change, "update_quantity");
        self.persist_if_changed(&change);
        Ok(change)
    }

    pub fn remove_from_cart(&mut self, id: &str) -> CartChange {
        let change = self.cart.remove(id);
        debug!(?change, "remove_from_cart");
        self.persist_if_changed(&change);
        change
    }

    pub fn clear_cart(&mut self) -> CartChange {
        let change = self.cart.clear();
        debug!(?change, "clear_cart");
        self.persist();
        change
    }

    fn persist_if_changed(&mut self, change: &CartChange) {
        if change.is_mutation() {
            self.persist();
        }
    }

    fn persist(&mut self) {
        if let Err(e) = self.repo.save(self.cart.items()) {
            warn!(error = %e, "Failed to persist cart");
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn total_price(&self) -> Money {
        self.cart.total_price()
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&self.cart)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn policy(&self) -> CartPolicy {
        self.cart.policy()
    }

    pub fn storage(&self) -> &S {
        self.repo.store()
    }
}
