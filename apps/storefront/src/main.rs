//! # Storefront Entry Point
//!
//! Boots the storefront services and logs what was restored.
//!
//! ## Startup Sequence
//! 1. Load configuration (`storefront.toml`, then `MARKET_*` env vars)
//! 2. Initialize tracing
//! 3. Restore session and cart from the data directory
//! 4. Load the catalog (demo data if the backend is down)
//!
//! The first argument, if present, is an explicit config file path.

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use market_storefront::config::StorefrontConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    market_storefront::init_tracing();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = StorefrontConfig::load(config_path).context("Failed to load configuration")?;

    let report = market_storefront::run(config)
        .await
        .context("Storefront startup failed")?;

    info!(
        authenticated = report.authenticated,
        role = ?report.role,
        cart_lines = report.cart_lines,
        cart_items = report.cart_items,
        cart_total = %report.cart_total,
        catalog = ?report.catalog_source,
        products = report.products,
        "Storefront ready"
    );

    Ok(())
}
