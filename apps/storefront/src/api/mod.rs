//! # Product Backend
//!
//! REST access to the product and approval endpoints.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET    /api/products/approved        public      → [Product]          │
//! │  GET    /api/products/pending         Bearer      → [Product]          │
//! │  POST   /api/products/add             Bearer      → Product            │
//! │  PUT    /api/products/approve/{id}    Bearer      → 2xx                │
//! │  DELETE /api/products/{id}            Bearer      → 2xx (reject)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands depend on [`ProductSource`] rather than on [`ApiClient`] so they
//! can be driven by fakes in tests.

mod client;
mod error;

pub use client::ApiClient;
pub use error::{ClientError, ClientResult};

use async_trait::async_trait;
use market_core::{Product, ProductSubmission};

/// Backend operations used by the catalog, vendor and admin commands.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Public catalog.
    async fn approved_products(&self) -> ClientResult<Vec<Product>>;

    async fn pending_products(&self, token: &str) -> ClientResult<Vec<Product>>;

    /// Submits a product for approval and returns the stored record.
    async fn add_product(
        &self,
        token: &str,
        submission: &ProductSubmission,
    ) -> ClientResult<Product>;

    async fn approve_product(&self, token: &str, id: &str) -> ClientResult<()>;

    /// Rejection deletes the product on the backend.
    async fn reject_product(&self, token: &str, id: &str) -> ClientResult<()>;
}
