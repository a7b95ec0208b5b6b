//! # Cart Reducer
//!
//! The shopping cart as a pure state machine. Storage and notices live in
//! the storefront app; this module only decides what a mutation does.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Operations                                  │
//! │                                                                         │
//! │  Operation                 Effect                        CartChange     │
//! │  ─────────                 ──────                        ──────────     │
//! │  add(item)         known id  ► quantity += 1             Added          │
//! │                    new id    ► push, quantity = 1        Added          │
//! │                    invalid   ► no-op                     Err(..)        │
//! │                                                                         │
//! │  update_quantity   n < 1     ► same as remove(id)        Removed        │
//! │                    n > max   ► no-op                     Err(..)        │
//! │                    unknown   ► no-op                     Unchanged      │
//! │                    otherwise ► quantity = n              QuantityUpdated│
//! │                                                                         │
//! │  remove(id)        present   ► line deleted              Removed        │
//! │                    absent    ► no-op                     Unchanged      │
//! │                                                                         │
//! │  clear()                     ► every line deleted        Cleared        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id, in insertion order
//! - Every line has `quantity >= 1`
//! - `total_price() == Σ price × quantity`, `total_items() == Σ quantity`

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::validation::{validate_price, validate_product_id, ValidationResult};
use crate::{MAX_ITEM_QUANTITY, QUANTITY_CEILING};

// =============================================================================
// Cart Item
// =============================================================================

/// One product line in the cart.
///
/// The JSON layout is what the browser kept under `cartItems`, so existing
/// blobs restore unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product id. Unique within a cart.
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Unit price, frozen when the product was added.
    #[ts(type = "number")]
    pub price: Money,

    pub quantity: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloudinary_public_id: Option<String>,
}

impl CartItem {
    /// Creates a single-unit line with no description or image.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        CartItem {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            quantity: 1,
            image: None,
            cloudinary_public_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_cloudinary_id(mut self, public_id: impl Into<String>) -> Self {
        self.cloudinary_public_id = Some(public_id.into());
        self
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }

    /// Checks the fields `add` requires: an id, a name and a positive price.
    /// Name length is not limited here.
    pub fn validate_for_add(&self) -> ValidationResult<()> {
        validate_product_id(&self.id)?;
        if self.name.trim().is_empty() {
            return Err(ValidationError::required("name"));
        }
        validate_price(self.price)
    }

    /// Whether a restored line can live in a cart as-is.
    fn is_restorable(&self) -> bool {
        !self.id.trim().is_empty() && self.quantity >= 1 && !self.price.is_negative()
    }
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        CartItem {
            id: product.id.clone(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            quantity: 1,
            image: product.image.clone(),
            cloudinary_public_id: product.cloudinary_public_id.clone(),
        }
    }
}

// =============================================================================
// Cart Policy
// =============================================================================

/// Limits applied by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartPolicy {
    max_item_quantity: u32,
}

impl CartPolicy {
    /// Creates a policy with a per-line quantity bound in `1..=999`.
    pub fn new(max_item_quantity: u32) -> ValidationResult<Self> {
        if max_item_quantity == 0 || max_item_quantity > QUANTITY_CEILING {
            return Err(ValidationError::OutOfRange {
                field: "max_item_quantity".to_string(),
                min: 1,
                max: i64::from(QUANTITY_CEILING),
            });
        }
        Ok(CartPolicy { max_item_quantity })
    }

    #[inline]
    pub fn max_item_quantity(&self) -> u32 {
        self.max_item_quantity
    }
}

impl Default for CartPolicy {
    fn default() -> Self {
        CartPolicy {
            max_item_quantity: MAX_ITEM_QUANTITY,
        }
    }
}

// =============================================================================
// Cart Change
// =============================================================================

/// What a mutation did. Callers turn this into a notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CartChange {
    /// A unit was added; `quantity` is the line's new quantity.
    Added { id: String, name: String, quantity: u32 },
    QuantityUpdated { id: String, name: String, quantity: u32 },
    Removed { id: String, name: String },
    /// Every line was removed.
    Cleared { lines: usize },
    /// The target line does not exist.
    Unchanged,
}

impl CartChange {
    /// Whether the cart contents changed.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, CartChange::Unchanged)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Ordered product lines plus the policy that bounds them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<CartItem>,
    policy: CartPolicy,
}

impl Cart {
    /// Creates an empty cart with the default policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cart with a custom policy.
    pub fn with_policy(policy: CartPolicy) -> Self {
        Cart {
            items: Vec::new(),
            policy,
        }
    }

    /// Rebuilds a cart from restored lines.
    ///
    /// Lines with a blank id, a zero quantity or a negative price are dropped.
    /// Repeated ids are merged into the first occurrence with quantities
    /// summed. Returns the cart and the number of lines that did not survive
    /// as-is.
    pub fn from_restored(items: Vec<CartItem>, policy: CartPolicy) -> (Self, usize) {
        let mut cart = Cart::with_policy(policy);
        let mut discarded = 0;

        for item in items {
            if !item.is_restorable() {
                discarded += 1;
                continue;
            }
            match cart.position(&item.id) {
                Some(index) => {
                    let line = &mut cart.items[index];
                    line.quantity = line.quantity.saturating_add(item.quantity);
                    discarded += 1;
                }
                None => cart.items.push(item),
            }
        }

        (cart, discarded)
    }

    /// Adds one unit of `item`.
    ///
    /// Any quantity carried by `item` is ignored. The per-line bound is only
    /// enforced by [`Cart::update_quantity`], so repeated adds keep counting.
    pub fn add(&mut self, item: CartItem) -> CoreResult<CartChange> {
        item.validate_for_add()?;

        if let Some(index) = self.position(&item.id) {
            let line = &mut self.items[index];
            line.quantity = line.quantity.saturating_add(1);
            return Ok(CartChange::Added {
                id: line.id.clone(),
                name: line.name.clone(),
                quantity: line.quantity,
            });
        }

        let change = CartChange::Added {
            id: item.id.clone(),
            name: item.name.clone(),
            quantity: 1,
        };
        self.items.push(CartItem { quantity: 1, ..item });
        Ok(change)
    }

    /// Sets the quantity of the line for `id`.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> CoreResult<CartChange> {
        if quantity < 1 {
            return Ok(self.remove(id));
        }

        let max = self.policy.max_item_quantity;
        if quantity > i64::from(max) {
            return Err(CoreError::QuantityTooLarge {
                requested: quantity,
                max,
            });
        }

        let Some(index) = self.position(id) else {
            return Ok(CartChange::Unchanged);
        };

        let line = &mut self.items[index];
        // Bounded by `max` above, which fits in u32.
        line.quantity = u32::try_from(quantity).unwrap_or(max);
        Ok(CartChange::QuantityUpdated {
            id: line.id.clone(),
            name: line.name.clone(),
            quantity: line.quantity,
        })
    }

    /// Deletes the line for `id` if present.
    pub fn remove(&mut self, id: &str) -> CartChange {
        match self.position(id) {
            Some(index) => {
                let line = self.items.remove(index);
                CartChange::Removed {
                    id: line.id,
                    name: line.name,
                }
            }
            None => CartChange::Unchanged,
        }
    }

    /// Deletes every line.
    pub fn clear(&mut self) -> CartChange {
        let lines = self.items.len();
        self.items.clear();
        CartChange::Cleared { lines }
    }

    /// Σ price × quantity.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Σ quantity.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Number of distinct product lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn policy(&self) -> CartPolicy {
        self.policy
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_items: u64,
    #[ts(type = "number")]
    pub total_price: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_items: cart.total_items(),
            total_price: cart.total_price(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> CartItem {
        CartItem::new("p1", "Widget", Money::from_cents(1000))
    }

    fn gadget() -> CartItem {
        CartItem::new("p2", "Gadget", Money::from_cents(250))
    }

    #[test]
    fn test_add_twice_accumulates() {
        let mut cart = Cart::new();

        cart.add(widget()).unwrap();
        let change = cart.add(widget()).unwrap();

        assert_eq!(
            change,
            CartChange::Added {
                id: "p1".into(),
                name: "Widget".into(),
                quantity: 2
            }
        );
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.items()[0].price, Money::from_cents(1000));
        assert_eq!(cart.total_price(), Money::from_cents(2000));
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_add_quantity_equals_call_count() {
        let mut cart = Cart::new();
        for _ in 0..150 {
            cart.add(widget()).unwrap();
        }
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get("p1").map(|i| i.quantity), Some(150));
    }

    #[test]
    fn test_add_ignores_input_quantity() {
        let mut cart = Cart::new();
        let mut item = widget();
        item.quantity = 7;

        cart.add(item).unwrap();

        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_add_rejects_invalid_items() {
        let mut cart = Cart::new();

        let no_id = CartItem::new("", "Widget", Money::from_cents(1000));
        let no_name = CartItem::new("p1", " ", Money::from_cents(1000));
        let free = CartItem::new("p1", "Widget", Money::zero());

        assert!(matches!(cart.add(no_id), Err(CoreError::Validation(_))));
        assert!(matches!(cart.add(no_name), Err(CoreError::Validation(_))));
        assert!(matches!(cart.add(free), Err(CoreError::Validation(_))));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_accepts_long_names() {
        let mut cart = Cart::new();
        let long = CartItem::new("p1", "N".repeat(201), Money::from_cents(1000));

        let change = cart.add(long).unwrap();

        assert!(matches!(change, CartChange::Added { quantity: 1, .. }));
        assert_eq!(cart.items()[0].name.chars().count(), 201);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut cart = Cart::new();
        cart.add(gadget()).unwrap();
        cart.add(widget()).unwrap();
        cart.add(gadget()).unwrap();

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["p2", "p1"]);
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add(widget()).unwrap();

        let change = cart.update_quantity("p1", 5).unwrap();

        assert!(matches!(change, CartChange::QuantityUpdated { quantity: 5, .. }));
        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price(), Money::from_cents(5000));
    }

    #[test]
    fn test_update_below_one_behaves_like_remove() {
        let mut updated = Cart::new();
        let mut removed = Cart::new();
        for cart in [&mut updated, &mut removed] {
            cart.add(widget()).unwrap();
            cart.add(gadget()).unwrap();
        }

        let a = updated.update_quantity("p1", 0).unwrap();
        let b = removed.remove("p1");
        assert_eq!(a, b);
        assert_eq!(updated, removed);

        let c = updated.update_quantity("p2", -3).unwrap();
        assert!(matches!(c, CartChange::Removed { .. }));
        assert!(updated.is_empty());
    }

    #[test]
    fn test_update_above_bound_is_rejected() {
        let mut cart = Cart::new();
        cart.add(widget()).unwrap();
        cart.update_quantity("p1", 4).unwrap();

        let err = cart.update_quantity("p1", 101).unwrap_err();

        assert_eq!(
            err,
            CoreError::QuantityTooLarge {
                requested: 101,
                max: 100
            }
        );
        assert_eq!(cart.get("p1").map(|i| i.quantity), Some(4));
        assert!(cart.update_quantity("p1", 100).is_ok());
    }

    #[test]
    fn test_custom_policy_bound() {
        let mut cart = Cart::with_policy(CartPolicy::new(10).unwrap());
        cart.add(widget()).unwrap();

        assert!(cart.update_quantity("p1", 10).is_ok());
        assert!(cart.update_quantity("p1", 11).is_err());
        assert!(CartPolicy::new(0).is_err());
        assert!(CartPolicy::new(1000).is_err());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(widget()).unwrap();
        let before = cart.clone();

        assert_eq!(cart.update_quantity("nope", 3).unwrap(), CartChange::Unchanged);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_missing_id_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add(widget()).unwrap();
        let before = cart.clone();

        let change = cart.remove("missing");

        assert!(!change.is_mutation());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(widget()).unwrap();
        cart.add(gadget()).unwrap();

        assert_eq!(cart.clear(), CartChange::Cleared { lines: 2 });
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::zero());
    }

    #[test]
    fn test_totals_match_sums() {
        let mut cart = Cart::new();
        cart.add(widget()).unwrap();
        cart.add(gadget()).unwrap();
        cart.update_quantity("p2", 3).unwrap();

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_items, 4);
        assert_eq!(totals.total_price, Money::from_cents(1000 + 3 * 250));
    }

    #[test]
    fn test_from_restored_drops_and_merges() {
        let mut zero_qty = gadget();
        zero_qty.quantity = 0;
        let mut blank_id = widget();
        blank_id.id = String::new();
        let mut duplicate = widget();
        duplicate.quantity = 2;

        let (cart, discarded) = Cart::from_restored(
            vec![widget(), zero_qty, blank_id, duplicate],
            CartPolicy::default(),
        );

        assert_eq!(discarded, 3);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get("p1").map(|i| i.quantity), Some(3));
    }

    #[test]
    fn test_cart_item_json_layout() {
        let item = widget().with_description("A widget").with_image("/img/w.png");
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "p1",
                "name": "Widget",
                "description": "A widget",
                "price": 10.0,
                "quantity": 1,
                "image": "/img/w.png"
            })
        );
    }

    #[test]
    fn test_item_from_product() {
        let product: Product = serde_json::from_str(
            r#"{"id":"9","name":"Book","description":"Novel","price":12.99,"status":"approved","cloudinaryPublicId":"books/9"}"#,
        )
        .unwrap();

        let item = CartItem::from(&product);

        assert_eq!(item.price, Money::from_cents(1299));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.cloudinary_public_id.as_deref(), Some("books/9"));
    }
}
