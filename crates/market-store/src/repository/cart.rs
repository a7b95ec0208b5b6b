//! # Cart Repository
//!
//! Reads and writes the `cartItems` array in the local scope.

use market_core::CartItem;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::kv::{KeyValueStore, CART_ITEMS_KEY};

/// Typed access to the persisted cart lines.
#[derive(Debug)]
pub struct CartRepository<S> {
    store: S,
}

impl<S: KeyValueStore> CartRepository<S> {
    pub fn new(store: S) -> Self {
        CartRepository { store }
    }

    /// Loads the persisted lines in their stored order.
    ///
    /// Returns `Ok(None)` when nothing was stored and
    /// `Err(StoreError::Corrupt)` when the blob is not an array of lines.
    pub fn load(&self) -> StoreResult<Option<Vec<CartItem>>> {
        let Some(raw) = self.store.get(CART_ITEMS_KEY)? else {
            return Ok(None);
        };

        let items: Vec<CartItem> =
            serde_json::from_str(&raw).map_err(|e| StoreError::corrupt(CART_ITEMS_KEY, e))?;

        Ok(Some(items))
    }

    /// Replaces the stored array with `items`.
    pub fn save(&mut self, items: &[CartItem]) -> StoreResult<()> {
        let raw = serde_json::to_string(items)?;
        self.store.set(CART_ITEMS_KEY, &raw)?;

        debug!(lines = items.len(), "Cart saved");
        Ok(())
    }

    /// Deletes the stored array.
    pub fn discard(&mut self) -> StoreResult<()> {
        self.store.remove(CART_ITEMS_KEY)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use market_core::Money;

    #[test]
    fn test_save_then_load_preserves_order() {
        let mut repo = CartRepository::new(MemoryStore::new());
        let mut mug = CartItem::new("p2", "Mug", Money::from_cents(899));
        mug.quantity = 3;
        let items = vec![
            CartItem::new("p1", "Lamp", Money::from_cents(2450)).with_cloudinary_id("lamps/1"),
            mug,
        ];

        repo.save(&items).unwrap();

        assert_eq!(repo.load().unwrap(), Some(items));
    }

    #[test]
    fn test_reads_browser_layout() {
        let blob = r#"[{"id":"1","name":"iPhone 15 Pro","description":"","price":999.99,"quantity":2,"image":"/uploads/a.png"}]"#;
        let repo = CartRepository::new(MemoryStore::with_entries([(CART_ITEMS_KEY, blob)]));

        let items = repo.load().unwrap().unwrap();
        assert_eq!(items[0].price, Money::from_cents(99999));
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].image.as_deref(), Some("/uploads/a.png"));
    }

    #[test]
    fn test_missing_and_corrupt() {
        let repo = CartRepository::new(MemoryStore::new());
        assert_eq!(repo.load().unwrap(), None);

        let repo = CartRepository::new(MemoryStore::with_entries([(CART_ITEMS_KEY, "{oops")]));
        assert!(matches!(repo.load(), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_discard() {
        let mut repo = CartRepository::new(MemoryStore::new());
        repo.save(&[]).unwrap();
        repo.discard().unwrap();
        assert_eq!(repo.load().unwrap(), None);
    }
}
