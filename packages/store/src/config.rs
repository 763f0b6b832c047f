//! # Application configuration: `safespot.toml`
//!
//! Defines the TOML configuration the web frontend embeds at build time
//! (filename: [`SafeSpotConfig::filename`] = `"safespot.toml"`). It tells the
//! clients where the remote API lives and tells the dashboard how to frame the
//! map when the device location is or is not known.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://safespot-backend.onrender.com"
//!
//! [map]
//! fallback_latitude = 20.5937
//! fallback_longitude = 78.9629
//! located_zoom = 13
//! fallback_zoom = 5
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`SafeSpotConfig`] | Top-level config, TOML parsing and the canonical filename. |
//! | [`ApiConfig`] | Origin of the remote API, also used to resolve image paths. |
//! | [`MapConfig`] | Fallback map center, the two zoom levels, and the tile source. |
//!
//! Every section derives `Default` with production values, so a missing or
//! partial file is equivalent to the default configuration.

use serde::Deserialize;

/// Top-level configuration stored in `safespot.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SafeSpotConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub map: MapConfig,
}

/// Remote API configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Origin of the remote API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://safespot-backend.onrender.com".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Map framing configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MapConfig {
    /// Center used when the device location is unknown.
    #[serde(default = "default_fallback_latitude")]
    pub fallback_latitude: f64,
    #[serde(default = "default_fallback_longitude")]
    pub fallback_longitude: f64,
    /// Zoom used when centered on the device (neighborhood level).
    #[serde(default = "default_located_zoom")]
    pub located_zoom: u8,
    /// Zoom used on the fallback center (country level).
    #[serde(default = "default_fallback_zoom")]
    pub fallback_zoom: u8,
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
    #[serde(default = "default_attribution")]
    pub attribution: String,
}

fn default_fallback_latitude() -> f64 {
    20.5937
}

fn default_fallback_longitude() -> f64 {
    78.9629
}

fn default_located_zoom() -> u8 {
    13
}

fn default_fallback_zoom() -> u8 {
    5
}

fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_attribution() -> String {
    r#"&copy; <a href="https://www.openstreetmap.org/">OpenStreetMap</a> contributors"#.to_string()
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            fallback_latitude: default_fallback_latitude(),
            fallback_longitude: default_fallback_longitude(),
            located_zoom: default_located_zoom(),
            fallback_zoom: default_fallback_zoom(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
        }
    }
}

impl SafeSpotConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "safespot.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }
}
