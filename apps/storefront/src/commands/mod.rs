//! # Storefront Commands
//!
//! Entry points the UI calls. Each command takes only the services it needs.
//!
//! ## Command Organization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Command Modules                                   │
//! │                                                                         │
//! │  cart.rs              session.rs            catalog.rs                  │
//! │  ├── get_cart         ├── login             ├── load_catalog            │
//! │  ├── add_to_cart      ├── logout            ├── browse                  │
//! │  ├── update_cart_item ├── current_session   └── product_cards           │
//! │  ├── remove_from_cart └── check_access                                  │
//! │  └── clear_cart                                                         │
//! │                                                                         │
//! │  vendor.rs            admin.rs                                          │
//! │  ├── vendor_dashboard ├── pending_products                              │
//! │  └── submit_product   ├── approve_product                               │
//! │                       └── reject_product                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Handling
//! Fallible commands return `Result<T, ApiError>`; the error carries the
//! notice to show.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod session;
pub mod vendor;
