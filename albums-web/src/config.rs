//! Listing configuration embedded at build time

use albums_core::ListingConfig;
use tracing::warn;

const CONFIG_YAML: &str = include_str!("../albums.yaml");

pub fn listing_config() -> ListingConfig {
    ListingConfig::from_yaml_str(CONFIG_YAML).unwrap_or_else(|e| {
        warn!("Invalid albums.yaml, using defaults: {}", e);
        ListingConfig::default()
    })
}
