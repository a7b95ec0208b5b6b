//! # market-core: Pure Logic for the Marketplace Storefront
//!
//! This crate holds every rule of the storefront that can be expressed
//! without touching storage or the network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Marketplace Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Browser UI (out of scope)                    │   │
//! │  │    Home ──► Cart ──► Vendor Dashboard ──► Admin Dashboard       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            apps/storefront (SessionStore, CartStore)            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ market-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐  │   │
//! │  │  │  types  │ │  money  │ │  cart   │ │ access  │ │ catalog  │  │   │
//! │  │  │Identity │ │  Money  │ │  Cart   │ │authorize│ │ filters  │  │   │
//! │  │  │ Product │ │         │ │CartItem │ │nav_links│ │ summary  │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 market-store (persistence)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Identity, Role, Product, ProductSubmission)
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart reducer (add/update/remove/clear, totals)
//! - [`access`] - Role gating for protected views and navigation
//! - [`catalog`] - Product filtering, demo catalog, vendor summaries
//! - [`validation`] - Input validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use market_core::cart::{Cart, CartItem};
//! use market_core::money::Money;
//!
//! let mut cart = Cart::new();
//! let widget = CartItem::new("p1", "Widget", Money::from_cents(1000));
//!
//! cart.add(widget.clone()).unwrap();
//! cart.add(widget).unwrap();
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.total_price(), Money::from_cents(2000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod access;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use access::{
    authorize, authorize_view, nav_links, product_actions, Access, Denial, NavLink, ProductActions,
    ProtectedView,
};
pub use cart::{Cart, CartChange, CartItem, CartPolicy, CartTotals};
pub use catalog::{CatalogFilter, VendorSummary, ALL_CATEGORIES, CATEGORIES};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default upper bound on the quantity of a single cart line.
///
/// ## Business Reason
/// Catches fat-finger updates (typing 1000 instead of 10).
/// The storefront config can lower or raise it up to [`QUANTITY_CEILING`].
pub const MAX_ITEM_QUANTITY: u32 = 100;

/// Hard ceiling for any configured quantity bound.
pub const QUANTITY_CEILING: u32 = 999;
