//! # Client configuration: `portal.toml`
//!
//! Defines the TOML file the web binary embeds at build time
//! (filename: [`PortalConfig::filename`] = `"portal.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = ""                  # empty = same origin as the page
//!
//! [dashboard]
//! refresh_interval_secs = 30     # 0 to disable periodic refresh
//!
//! [redirect]
//! after_register_ms = 2000
//! after_add_product_ms = 1500
//!
//! [uploads]
//! url_prefix = "/static/uploads/"
//! default_image = "/static/img/default-product.png"
//! ```
//!
//! Every section derives `Default`, so a missing or empty file is equivalent
//! to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `portal.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub redirect: RedirectConfig,
    #[serde(default)]
    pub uploads: UploadsConfig,
}

/// Where the portal API lives.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Absolute origin of the API server. Empty string means the page origin.
    #[serde(default)]
    pub base_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Stats refresh interval in seconds. 0 disables periodic refresh.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u32,
}

fn default_refresh_interval() -> u32 {
    30
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
        }
    }
}

/// Delays between a success notice and the follow-up navigation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RedirectConfig {
    #[serde(default = "default_after_register")]
    pub after_register_ms: u32,
    #[serde(default = "default_after_add_product")]
    pub after_add_product_ms: u32,
}

fn default_after_register() -> u32 {
    2000
}

fn default_after_add_product() -> u32 {
    1500
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            after_register_ms: default_after_register(),
            after_add_product_ms: default_after_add_product(),
        }
    }
}

/// Where product images are served from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadsConfig {
    #[serde(default = "default_url_prefix")]
    pub url_prefix: String,
    #[serde(default = "default_image")]
    pub default_image: String,
}

fn default_url_prefix() -> String {
    "/static/uploads/".to_string()
}

fn default_image() -> String {
    "/static/img/default-product.png".to_string()
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            url_prefix: default_url_prefix(),
            default_image: default_image(),
        }
    }
}

impl PortalConfig {
    /// Builder method to point the client at an explicit API origin.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portal.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parse, falling back to defaults on malformed input.
    pub fn from_toml_or_default(s: &str) -> Self {
        match Self::from_toml(s) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Invalid {}, using defaults: {}", Self::filename(), e);
                Self::default()
            }
        }
    }

    /// Public URL of an uploaded product image, or the placeholder image.
    pub fn image_url(&self, image_path: Option<&str>) -> String {
        match image_path.map(str::trim) {
            Some(path) if !path.is_empty() => format!("{}{}", self.uploads.url_prefix, path),
            _ => self.uploads.default_image.clone(),
        }
    }
}
