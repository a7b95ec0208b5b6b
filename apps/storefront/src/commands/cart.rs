//! # Cart Commands
//!
//! Cart manipulation for the storefront UI.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│  Cleared │                        │
//! │  │  Cart    │     │          │     │          │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │       ▲                │                 │                              │
//! │       │           add_to_cart            │                              │
//! │       │           update_cart_item       │                              │
//! │       │           remove_from_cart       │                              │
//! │       │                │                 │                              │
//! │       │                ▼                 │                              │
//! │       └──────────── clear_cart ◄─────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns the whole cart so the UI never tracks totals itself.

use serde::Serialize;
use tracing::debug;
use ts_rs::TS;

use market_core::{CartChange, CartItem, CartTotals, CoreError};
use market_store::KeyValueStore;

use crate::error::{ApiError, ApiResult};
use crate::notice::Notice;
use crate::state::CartStore;

/// Cart response including items, totals and an optional notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
    pub notice: Option<Notice>,
}

impl CartResponse {
    fn from_store<S: KeyValueStore>(cart: &CartStore<S>, change: Option<&CartChange>) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: cart.totals(),
            notice: change.and_then(Notice::for_cart_change),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart<S: KeyValueStore>(cart: &CartStore<S>) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from_store(cart, None)
}

/// Adds one unit of a product to the cart.
///
/// ## Errors
/// - `VALIDATION_ERROR` ("Invalid product data.") when the item lacks an id,
///   a name or a positive price
pub fn add_to_cart<S: KeyValueStore>(
    cart: &mut CartStore<S>,
    item: CartItem,
) -> ApiResult<CartResponse> {
    debug!(id = %item.id, name = %item.name, "add_to_cart command");

    let change = cart.add_to_cart(item).map_err(|e| match e {
        CoreError::Validation(_) => ApiError::from(e).with_notice(Notice::invalid_product()),
        other => ApiError::from(other),
    })?;

    Ok(CartResponse::from_store(cart, Some(&change)))
}

/// Sets the quantity of a line. Quantities below 1 remove the line.
///
/// ## Errors
/// - `QUANTITY_LIMIT` ("Maximum quantity is N.") above the configured bound
pub fn update_cart_item<S: KeyValueStore>(
    cart: &mut CartStore<S>,
    id: &str,
    quantity: i64,
) -> ApiResult<CartResponse> {
    debug!(id = %id, quantity, "update_cart_item command");

    let change = cart.update_quantity(id, quantity)?;
    Ok(CartResponse::from_store(cart, Some(&change)))
}

/// Removes a line. Removing an absent id returns the cart unchanged.
pub fn remove_from_cart<S: KeyValueStore>(cart: &mut CartStore<S>, id: &str) -> CartResponse {
    debug!(id = %id, "remove_from_cart command");

    let change = cart.remove_from_cart(id);
    CartResponse::from_store(cart, Some(&change))
}

/// Empties the cart.
pub fn clear_cart<S: KeyValueStore>(cart: &mut CartStore<S>) -> CartResponse {
    debug!("clear_cart command");

    let change = cart.clear_cart();
    CartResponse::from_store(cart, Some(&change))
}
