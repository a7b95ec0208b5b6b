//! # State Module
//!
//! Long-lived storefront state: who is logged in and what is in the cart.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐            ┌──────────────────────┐           │
//! │  │    SessionStore      │            │     CartStore        │           │
//! │  │                      │            │                      │           │
//! │  │  token, identity     │            │  Cart (lines+policy) │           │
//! │  └──────────┬───────────┘            └──────────┬───────────┘           │
//! │             │ SessionRepository                 │ CartRepository        │
//! │             ▼                                   ▼                       │
//! │  ┌──────────────────────┐            ┌──────────────────────┐           │
//! │  │  session scope       │            │  local scope         │           │
//! │  │  token / user        │            │  cartItems           │           │
//! │  └──────────────────────┘            └──────────────────────┘           │
//! │                                                                         │
//! │  The two stores are independent: logging out leaves the cart alone.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both stores have a single owner and take `&mut self` for mutations.

mod cart;
mod session;

pub use cart::CartStore;
pub use session::SessionStore;
