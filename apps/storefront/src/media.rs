//! # Image Sources
//!
//! Picks the URL a product or cart line should display.
//!
//! ```text
//! cloudinary_public_id + cloud ──► https://res.cloudinary.com/{cloud}/image/upload/{transform}{id}
//! image = "https://..."        ──► as is
//! image = "/uploads/a.png"     ──► {api_base}/uploads/a.png
//! nothing                      ──► None (UI shows a placeholder)
//! ```

use market_core::{CartItem, Product};

use crate::config::StorefrontConfig;

/// Transform for product cards.
pub const CARD_TRANSFORM: &str = "w_500,h_500,c_fill,q_auto,f_auto/";

/// Transform for cart thumbnails.
pub const THUMBNAIL_TRANSFORM: &str = "w_100,h_100,c_fill,q_auto,f_auto/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    api_base: String,
    cloud_name: Option<String>,
}

impl ImageResolver {
    pub fn new(api_base: impl Into<String>, cloud_name: Option<String>) -> Self {
        let api_base: String = api_base.into();
        ImageResolver {
            api_base: api_base.trim_end_matches('/').to_string(),
            cloud_name: cloud_name.filter(|c| !c.trim().is_empty()),
        }
    }

    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(&config.api_base_url, config.cloudinary_cloud_name.clone())
    }

    /// Resolves an image URL. A hosted id wins over `image` when a cloud is
    /// configured.
    pub fn resolve(
        &self,
        image: Option<&str>,
        public_id: Option<&str>,
        transform: &str,
    ) -> Option<String> {
        let public_id = public_id.map(str::trim).filter(|id| !id.is_empty());
        if let (Some(cloud), Some(id)) = (&self.cloud_name, public_id) {
            return Some(format!(
                "https://res.cloudinary.com/{cloud}/image/upload/{transform}{id}"
            ));
        }

        let image = image.map(str::trim).filter(|i| !i.is_empty())?;
        if image.starts_with("http://") || image.starts_with("https://") {
            return Some(image.to_string());
        }

        Some(format!(
            "{}/{}",
            self.api_base,
            image.trim_start_matches('/')
        ))
    }

    pub fn for_product(&self, product: &Product) -> Option<String> {
        self.resolve(
            product.image.as_deref(),
            product.cloudinary_public_id.as_deref(),
            CARD_TRANSFORM,
        )
    }

    pub fn for_cart_item(&self, item: &CartItem) -> Option<String> {
        self.resolve(
            item.image.as_deref(),
            item.cloudinary_public_id.as_deref(),
            THUMBNAIL_TRANSFORM,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_core::Money;

    #[test]
    fn test_hosted_id_uses_cloud() {
        let images = ImageResolver::new("http://localhost:5000", Some("demo-shop".into()));
        let item = CartItem::new("p1", "Lamp", Money::from_cents(2450))
            .with_image("/uploads/lamp.png")
            .with_cloudinary_id("lamps/brass");

        assert_eq!(
            images.for_cart_item(&item).as_deref(),
            Some("https://res.cloudinary.com/demo-shop/image/upload/w_100,h_100,c_fill,q_auto,f_auto/lamps/brass")
        );
    }

    #[test]
    fn test_hosted_id_skipped_without_cloud() {
        let images = ImageResolver::new("http://localhost:5000/", None);
        let item = CartItem::new("p1", "Lamp", Money::from_cents(2450))
            .with_image("/uploads/lamp.png")
            .with_cloudinary_id("lamps/brass");

        assert_eq!(
            images.for_cart_item(&item).as_deref(),
            Some("http://localhost:5000/uploads/lamp.png")
        );
    }

    #[test]
    fn test_absolute_and_missing_images() {
        let images = ImageResolver::new("http://localhost:5000", None);
        assert_eq!(
            images
                .resolve(Some("https://cdn.example.com/a.jpg"), None, CARD_TRANSFORM)
                .as_deref(),
            Some("https://cdn.example.com/a.jpg")
        );
        assert_eq!(images.resolve(None, None, CARD_TRANSFORM), None);
        assert_eq!(images.resolve(Some("  "), None, CARD_TRANSFORM), None);
    }

    #[test]
    fn test_demo_products_use_placeholder() {
        let images = ImageResolver::from_config(&StorefrontConfig::default());
        for product in market_core::catalog::demo_products() {
            assert_eq!(images.for_product(&product), None);
        }
    }
}
