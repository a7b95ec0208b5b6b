//! # Repository Module
//!
//! Typed repositories over a [`KeyValueStore`](crate::KeyValueStore).
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SessionStore / CartStore                                              │
//! │       │                                                                 │
//! │       │  repo.load() / repo.save(..)                                   │
//! │       ▼                                                                 │
//! │  SessionRepository            CartRepository                           │
//! │  ├── load()                   ├── load()                               │
//! │  ├── save(token, identity)    ├── save(items)                          │
//! │  └── clear()                  └── discard()                            │
//! │       │                             │                                   │
//! │       │  JSON strings               │                                   │
//! │       ▼                             ▼                                   │
//! │  KeyValueStore (session)      KeyValueStore (local)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keys and JSON encoding live here and nowhere else.

pub mod cart;
pub mod session;
