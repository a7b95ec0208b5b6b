//! # Marketplace Storefront Library
//!
//! Session, cart and catalog services for the marketplace storefront.
//!
//! ## Module Organization
//! ```text
//! market_storefront/
//! ├── lib.rs          ◄─── You are here (tracing, Storefront context, startup)
//! ├── config.rs       ◄─── StorefrontConfig (file + env)
//! ├── state/
//! │   ├── session.rs  ◄─── SessionStore (token + identity)
//! │   └── cart.rs     ◄─── CartStore (persistent cart)
//! ├── api/            ◄─── ProductSource trait + reqwest ApiClient
//! ├── commands/       ◄─── cart, session, catalog, vendor, admin
//! ├── media.rs        ◄─── Image URL resolution
//! ├── notice.rs       ◄─── User-facing messages
//! └── error.rs        ◄─── ApiError returned by commands
//! ```
//!
//! ## Service Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Storefront                                      │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐    │
//! │  │  SessionStore    │ │    CartStore     │ │     ApiClient        │    │
//! │  │  <FileStore>     │ │   <FileStore>    │ │                      │    │
//! │  │  session.json    │ │   local.json     │ │  /api/products/...   │    │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘    │
//! │                                                                         │
//! │  Commands borrow exactly the services they need.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod media;
pub mod notice;
pub mod state;

use serde::Serialize;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use market_core::{Money, Role};
use market_store::{FileStore, Scope};

use api::{ApiClient, ClientError};
use commands::catalog::{load_catalog, CatalogSource};
use config::{ConfigError, StorefrontConfig};
use error::ApiError;
use media::ImageResolver;
use state::{CartStore, SessionStore};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=market_storefront=trace` - Trace the app crate only
/// - Default: INFO, DEBUG for the `market_*` crates and the binary
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,market=debug,storefront=debug"));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

// =============================================================================
// Storefront Context
// =============================================================================

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(#[from] ClientError),

    #[error("Catalog unavailable: {0}")]
    Catalog(#[from] ApiError),
}

/// All services for one storefront session.
#[derive(Debug)]
pub struct Storefront {
    pub config: StorefrontConfig,
    pub session: SessionStore<FileStore>,
    pub cart: CartStore<FileStore>,
    pub api: ApiClient,
    pub images: ImageResolver,
}

impl Storefront {
    /// Restores session and cart from `config.data_dir` and builds the client.
    pub fn open(config: StorefrontConfig) -> Result<Self, StartupError> {
        config.validate()?;

        let api = ApiClient::new(config.base_url()?, config.request_timeout())?;
        let images = ImageResolver::from_config(&config);

        let session = SessionStore::init(FileStore::open_scope(&config.data_dir, Scope::Session));
        let cart = CartStore::init(
            FileStore::open_scope(&config.data_dir, Scope::Local),
            config.cart_policy(),
        );

        info!(data_dir = %config.data_dir.display(), api = %api.base_url(), "Storefront opened");

        Ok(Storefront {
            config,
            session,
            cart,
            api,
            images,
        })
    }
}

/// What startup found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartupReport {
    pub authenticated: bool,
    pub role: Option<Role>,
    pub cart_lines: usize,
    pub cart_items: u64,
    pub cart_total: Money,
    pub catalog_source: CatalogSource,
    pub products: usize,
}

/// Boots the storefront: restore state, then load the catalog.
///
/// ## Startup Sequence
/// ```text
/// 1. Validate configuration
/// 2. Restore session (session.json) and cart (local.json)
/// 3. Fetch approved products, falling back to demo data if allowed
/// ```
pub async fn run(config: StorefrontConfig) -> Result<StartupReport, StartupError> {
    info!("Starting storefront");

    let storefront = Storefront::open(config)?;
    let catalog = load_catalog(&storefront.api, storefront.config.demo_fallback).await?;

    if let Some(notice) = &catalog.notice {
        info!(title = %notice.title, "{}", notice.description);
    }

    Ok(StartupReport {
        authenticated: storefront.session.is_authenticated(),
        role: storefront.session.role(),
        cart_lines: storefront.cart.items().len(),
        cart_items: storefront.cart.total_items(),
        cart_total: storefront.cart.total_price(),
        catalog_source: catalog.source,
        products: catalog.products.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_core::{CartItem, Identity};

    fn config_in(dir: &std::path::Path) -> StorefrontConfig {
        StorefrontConfig {
            data_dir: dir.to_path_buf(),
            ..StorefrontConfig::default()
        }
    }

    #[test]
    fn test_open_restores_previous_state() {
        let dir = tempfile::tempdir().unwrap();

        let mut first = Storefront::open(config_in(dir.path())).unwrap();
        first
            .session
            .login("tok-1", Identity::new("u1", "shopper@shop.io", Role::User));
        first
            .cart
            .add_to_cart(CartItem::new("p1", "Widget", Money::from_cents(1000)))
            .unwrap();
        drop(first);

        let second = Storefront::open(config_in(dir.path())).unwrap();
        assert!(second.session.is_authenticated());
        assert_eq!(second.cart.total_items(), 1);
    }

    #[test]
    fn test_logout_keeps_cart() {
        let dir = tempfile::tempdir().unwrap();

        let mut storefront = Storefront::open(config_in(dir.path())).unwrap();
        storefront
            .session
            .login("tok-1", Identity::new("u1", "shopper@shop.io", Role::User));
        storefront
            .cart
            .add_to_cart(CartItem::new("p1", "Widget", Money::from_cents(1000)))
            .unwrap();
        storefront.session.logout();
        drop(storefront);

        let reopened = Storefront::open(config_in(dir.path())).unwrap();
        assert!(!reopened.session.is_authenticated());
        assert_eq!(reopened.cart.total_items(), 1);
    }

    #[test]
    fn test_open_rejects_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            max_item_quantity: 0,
            ..config_in(dir.path())
        };

        assert!(matches!(
            Storefront::open(config),
            Err(StartupError::Config(ConfigError::Invalid(_)))
        ));
    }

    #[tokio::test]
    async fn test_run_falls_back_to_demo_when_offline() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            // Reserved port, nothing listens here.
            api_base_url: "http://127.0.0.1:9".into(),
            request_timeout_secs: 1,
            ..config_in(dir.path())
        };

        let report = run(config).await.unwrap();
        assert_eq!(report.catalog_source, CatalogSource::Demo);
        assert_eq!(report.products, 6);
        assert!(!report.authenticated);
        assert_eq!(report.cart_items, 0);
    }
}
