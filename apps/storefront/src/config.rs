//! # Storefront Configuration
//!
//! Runtime settings for the storefront: backend address, storage location,
//! cart bound and image hosting.
//!
//! ## Configuration Sources (in priority order)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Loading                                │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     MARKET_API_BASE_URL=https://shop.example.com                       │
//! │     MARKET_MAX_ITEM_QUANTITY=50                                        │
//! │                                                                         │
//! │  2. Config File                                                        │
//! │     ~/.config/storefront/storefront.toml                               │
//! │                                                                         │
//! │  3. Defaults (lowest priority)                                         │
//! │     api_base_url = "http://localhost:5000"                             │
//! │     max_item_quantity = 100                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Config File
//! ```toml
//! api_base_url = "https://shop.example.com"
//! data_dir = "/var/lib/storefront"
//! max_item_quantity = 100
//! request_timeout_secs = 10
//! demo_fallback = true
//! cloudinary_cloud_name = "demo-shop"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

use market_core::CartPolicy;

const CONFIG_FILE_NAME: &str = "storefront.toml";

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("No config path available")]
    NoConfigPath,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Storefront Config
// =============================================================================

/// Storefront settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Origin of the product/approval backend. Also the base for relative
    /// image paths.
    pub api_base_url: String,

    /// Directory holding `session.json` and `local.json`.
    pub data_dir: PathBuf,

    /// Upper bound for a single cart line quantity.
    pub max_item_quantity: u32,

    pub request_timeout_secs: u64,

    /// Show the bundled demo catalog when the backend is unreachable.
    pub demo_fallback: bool,

    /// Cloudinary cloud used to build hosted image URLs.
    pub cloudinary_cloud_name: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            api_base_url: "http://localhost:5000".to_string(),
            data_dir: default_data_dir(),
            max_item_quantity: CartPolicy::default().max_item_quantity(),
            request_timeout_secs: 10,
            demo_fallback: true,
            cloudinary_cloud_name: None,
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "marketplace", "storefront")
}

fn default_data_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

impl StorefrontConfig {
    // =========================================================================
    // Loading / Saving
    // =========================================================================

    /// Loads configuration from file and environment.
    ///
    /// ## Loading Order
    /// 1. Start with defaults
    /// 2. Override with config file if it exists
    /// 3. Override with environment variables
    /// 4. Validate final configuration
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration, falling back to defaults on any error.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or(ConfigError::NoConfigPath)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Overrides / Validation
    // =========================================================================

    /// Applies `MARKET_*` overrides read through `lookup`.
    ///
    /// Values that fail to parse are logged and ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("MARKET_API_BASE_URL") {
            debug!(url = %url, "Overriding API base URL from environment");
            self.api_base_url = url;
        }

        if let Some(dir) = lookup("MARKET_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup("MARKET_MAX_ITEM_QUANTITY") {
            match raw.parse::<u32>() {
                Ok(max) => self.max_item_quantity = max,
                Err(_) => warn!(value = %raw, "Ignoring invalid MARKET_MAX_ITEM_QUANTITY"),
            }
        }

        if let Some(raw) = lookup("MARKET_REQUEST_TIMEOUT_SECS") {
            match raw.parse::<u64>() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => warn!(value = %raw, "Ignoring invalid MARKET_REQUEST_TIMEOUT_SECS"),
            }
        }

        if let Some(raw) = lookup("MARKET_DEMO_FALLBACK") {
            match raw.to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.demo_fallback = true,
                "0" | "false" | "no" | "off" => self.demo_fallback = false,
                _ => warn!(value = %raw, "Ignoring invalid MARKET_DEMO_FALLBACK"),
            }
        }

        if let Some(cloud) = lookup("MARKET_CLOUDINARY_CLOUD") {
            let cloud = cloud.trim();
            self.cloudinary_cloud_name = (!cloud.is_empty()).then(|| cloud.to_string());
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        self.base_url()?;

        CartPolicy::new(self.max_item_quantity)
            .map_err(|e| ConfigError::Invalid(format!("max_item_quantity: {e}")))?;

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Parsed backend origin. Only `http` and `https` are accepted.
    pub fn base_url(&self) -> ConfigResult<Url> {
        let url = Url::parse(&self.api_base_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("{}: {e}", self.api_base_url)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidUrl(format!(
                "scheme must be http or https, got: {other}"
            ))),
        }
    }

    /// Cart policy derived from `max_item_quantity`, defaulting when out of range.
    pub fn cart_policy(&self) -> CartPolicy {
        CartPolicy::new(self.max_item_quantity).unwrap_or_default()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
