//! # Catalog Commands
//!
//! Home page product listing.
//!
//! ## Catalog Load
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load_catalog()                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET /api/products/approved                                            │
//! │       │                                                                 │
//! │       ├── OK ──────────────────────► source: live                      │
//! │       │                                                                 │
//! │       └── failed, demo_fallback ───► demo_products()                   │
//! │                                      source: demo                      │
//! │                                      notice: "Using Demo Data"         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, warn};
use ts_rs::TS;

use market_core::catalog::demo_products;
use market_core::{product_actions, CatalogFilter, Product, ProductActions};
use market_store::KeyValueStore;

use crate::api::ProductSource;
use crate::error::{ApiError, ApiResult};
use crate::media::ImageResolver;
use crate::notice::Notice;
use crate::state::SessionStore;

/// Where the listed products came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CatalogSource {
    Live,
    Demo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub products: Vec<Product>,
    pub source: CatalogSource,
    pub notice: Option<Notice>,
}

/// A product as one card on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub product: Product,
    pub image_url: Option<String>,
    pub actions: ProductActions,
}

/// Fetches the approved catalog.
///
/// ## Errors
/// Backend failures are only returned when `demo_fallback` is off.
pub async fn load_catalog(
    source: &dyn ProductSource,
    demo_fallback: bool,
) -> ApiResult<CatalogResponse> {
    debug!(demo_fallback, "load_catalog command");

    match source.approved_products().await {
        Ok(products) => {
            debug!(count = products.len(), "Catalog loaded");
            Ok(CatalogResponse {
                products,
                source: CatalogSource::Live,
                notice: None,
            })
        }
        Err(e) if demo_fallback => {
            warn!(error = %e, "Catalog fetch failed, showing demo products");
            Ok(CatalogResponse {
                products: demo_products(),
                source: CatalogSource::Demo,
                notice: Some(Notice::demo_data()),
            })
        }
        Err(e) => Err(ApiError::from(e)),
    }
}

/// Filters `products` by search term and category. Any search length is accepted.
pub fn browse(products: &[Product], search: &str, category: Option<&str>) -> Vec<Product> {
    let search = search.trim();
    debug!(search = %search, ?category, "browse command");

    let mut filter = CatalogFilter::default().search(search);
    if let Some(category) = category {
        filter = filter.category(category);
    }

    filter.apply(products).into_iter().cloned().collect()
}

/// Decorates products with their image URL and the actions open to the caller.
pub fn product_cards<S: KeyValueStore>(
    session: &SessionStore<S>,
    images: &ImageResolver,
    products: &[Product],
) -> Vec<ProductCard> {
    products
        .iter()
        .map(|product| ProductCard {
            image_url: images.for_product(product),
            actions: product_actions(session.identity(), product),
            product: product.clone(),
        })
        .collect()
}
