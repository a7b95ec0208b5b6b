//! # Notices
//!
//! Transient user-visible messages produced by commands. Rendering them
//! (toasts, banners) is the UI's job.

use market_core::CartChange;
use serde::Serialize;
use ts_rs::TS;

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        variant: NoticeVariant,
    ) -> Self {
        Notice {
            title: title.into(),
            description: description.into(),
            variant,
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NoticeVariant::Default)
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, NoticeVariant::Destructive)
    }

    /// Generic failure notice.
    pub fn error(description: impl Into<String>) -> Self {
        Self::destructive("Error", description)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Notice for a cart mutation. Quantity edits and no-ops are silent.
    pub fn for_cart_change(change: &CartChange) -> Option<Self> {
        match change {
            CartChange::Added { name, .. } => Some(Self::info(
                "Added to Cart",
                format!("{name} has been added to your cart."),
            )),
            CartChange::Removed { name, .. } => Some(Self::destructive(
                "Removed from Cart",
                format!("{name} has been removed from your cart."),
            )),
            CartChange::Cleared { .. } => Some(Self::destructive(
                "Cart Cleared",
                "All items have been removed from your cart.",
            )),
            CartChange::QuantityUpdated { .. } | CartChange::Unchanged => None,
        }
    }

    pub fn quantity_limit(max: u32) -> Self {
        Self::destructive("Quantity Limit", format!("Maximum quantity is {max}."))
    }

    pub fn invalid_product() -> Self {
        Self::error("Invalid product data.")
    }

    // =========================================================================
    // Catalog and moderation
    // =========================================================================

    pub fn demo_data() -> Self {
        Self::info(
            "Using Demo Data",
            "Could not connect to server. Showing sample products.",
        )
    }

    pub fn missing_information() -> Self {
        Self::destructive("Missing Information", "Please fill in all required fields.")
    }

    pub fn invalid_price() -> Self {
        Self::destructive("Invalid Price", "Price must be greater than 0.")
    }

    pub fn product_submitted() -> Self {
        Self::info("Product Added", "Your product has been submitted for approval.")
    }

    pub fn product_approved() -> Self {
        Self::info(
            "Product Approved",
            "The product has been approved and is now live.",
        )
    }

    pub fn product_rejected() -> Self {
        Self::info(
            "Product Rejected",
            "The product has been rejected and removed.",
        )
    }
}
