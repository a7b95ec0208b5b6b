//! # market-store: Persistence for the Marketplace Storefront
//!
//! This crate stores session and cart state in key-value scopes that mirror
//! browser session and local storage.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Data Flow                                │
//! │                                                                         │
//! │  CartStore::add_to_cart(item)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   market-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ KeyValueStore │    │  Repositories │    │   Backends   │  │   │
//! │  │   │   (kv.rs)     │    │  session.rs   │    │  memory.rs   │  │   │
//! │  │   │ get/set/      │◄───│  cart.rs      │    │  file.rs     │  │   │
//! │  │   │ remove/clear  │    │               │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  <data_dir>/session.json   <data_dir>/local.json                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - Storage trait, scopes and key names
//! - [`memory`] - In-process backend
//! - [`file`] - JSON file backend
//! - [`repository`] - Session and cart repositories
//! - [`error`] - Storage error types
//!
//! ## Usage
//!
//! ```rust
//! use market_core::{CartItem, Money};
//! use market_store::{CartRepository, MemoryStore};
//!
//! let mut carts = CartRepository::new(MemoryStore::new());
//! carts.save(&[CartItem::new("p1", "Widget", Money::from_cents(1000))]).unwrap();
//!
//! let restored = carts.load().unwrap().unwrap();
//! assert_eq!(restored[0].id, "p1");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod kv;
pub mod memory;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use kv::{KeyValueStore, Scope, CART_ITEMS_KEY, TOKEN_KEY, USER_KEY};
pub use memory::MemoryStore;

// Repository re-exports for convenience
pub use repository::cart::CartRepository;
pub use repository::session::{SessionRepository, StoredSession};
