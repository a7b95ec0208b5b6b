//! # Catalog
//!
//! Filtering and summaries over product lists fetched from the backend,
//! plus the sample catalog shown when the backend is unreachable.
//!
//! ```text
//!   fetched products ──► CatalogFilter { search, category } ──► visible list
//!   vendor products  ──► VendorSummary { counts, total value }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductStatus};

/// Category choices offered by the browse filter.
pub const CATEGORIES: [&str; 5] = ["Electronics", "Clothing", "Books", "Home & Garden", "Sports"];

/// Category value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

// =============================================================================
// Filter
// =============================================================================

/// Browse filter as sent by the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilter {
    /// Case-insensitive substring of name or description.
    #[serde(default)]
    pub search: Option<String>,
    /// Exact category, or `"all"`.
    #[serde(default)]
    pub category: Option<String>,
}

impl CatalogFilter {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Whether `product` passes both criteria.
    pub fn matches(&self, product: &Product) -> bool {
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                product.name.to_lowercase().contains(&term)
                    || product.description.to_lowercase().contains(&term)
            }
        };

        let category_ok = match self.category.as_deref() {
            None | Some(ALL_CATEGORIES) => true,
            Some(category) => product.category.as_deref() == Some(category),
        };

        search_ok && category_ok
    }

    /// Products passing the filter, in their original order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}

// =============================================================================
// Status Partition
// =============================================================================

/// Products grouped by moderation state.
#[derive(Debug, Default)]
pub struct StatusPartition<'a> {
    pub approved: Vec<&'a Product>,
    pub pending: Vec<&'a Product>,
    pub rejected: Vec<&'a Product>,
}

pub fn partition_by_status(products: &[Product]) -> StatusPartition<'_> {
    let mut partition = StatusPartition::default();
    for product in products {
        match product.status {
            ProductStatus::Approved => partition.approved.push(product),
            ProductStatus::Pending => partition.pending.push(product),
            ProductStatus::Rejected => partition.rejected.push(product),
        }
    }
    partition
}

// =============================================================================
// Vendor Summary
// =============================================================================

/// Headline numbers for the vendor dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct VendorSummary {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
    /// Σ price of approved products.
    #[ts(type = "number")]
    pub total_value: Money,
}

impl VendorSummary {
    pub fn from_products(products: &[Product]) -> Self {
        let partition = partition_by_status(products);
        VendorSummary {
            total: products.len(),
            approved: partition.approved.len(),
            pending: partition.pending.len(),
            rejected: partition.rejected.len(),
            total_value: partition.approved.iter().map(|p| p.price).sum(),
        }
    }
}

// =============================================================================
// Demo Catalog
// =============================================================================

/// Sample approved products shown when the backend cannot be reached.
pub fn demo_products() -> Vec<Product> {
    const DEMO: [(&str, &str, &str, i64, &str); 6] = [
        (
            "iPhone 15 Pro",
            "Latest iPhone with titanium design and advanced camera system",
            "Electronics",
            99999,
            "vendor1",
        ),
        (
            "MacBook Air M2",
            "Lightweight laptop with M2 chip and all-day battery life",
            "Electronics",
            119999,
            "vendor2",
        ),
        (
            "Nike Air Max 270",
            "Comfortable running shoes with Max Air unit",
            "Clothing",
            14999,
            "vendor3",
        ),
        (
            "Samsung Galaxy S24",
            "Flagship Android phone with AI features",
            "Electronics",
            89999,
            "vendor4",
        ),
        (
            "Adidas Ultraboost 22",
            "Premium running shoes with boost technology",
            "Sports",
            18999,
            "vendor5",
        ),
        (
            "The Great Gatsby",
            "Classic American novel by F. Scott Fitzgerald",
            "Books",
            1299,
            "vendor6",
        ),
    ];

    DEMO.iter()
        .enumerate()
        .map(|(i, (name, description, category, cents, vendor))| Product {
            id: (i + 1).to_string(),
            name: (*name).to_string(),
            description: (*description).to_string(),
            price: Money::from_cents(*cents),
            status: ProductStatus::Approved,
            image: None,
            category: Some((*category).to_string()),
            vendor_id: Some((*vendor).to_string()),
            cloudinary_public_id: None,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
