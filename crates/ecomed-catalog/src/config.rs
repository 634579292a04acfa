//! Store Settings
//!
//! Loaded from JSON; every field falls back to its default when absent.

use serde::{Deserialize, Serialize};

use crate::error::CatalogResult;

/// Image used when a new item has no image URL
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200";

/// Image used by the demo items seeded at first render
pub const SEED_IMAGE: &str = "https://media.gettyimages.com/id/185061828/photo/vitamin.jpg?s=612x612&w=0&k=20&c=BOilPcMJXNsdHnLdglh_GDtCV9jHbcZfOdG4l1k7g94=";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Number of demo items in a fresh catalog
    pub seed_count: u32,
    pub seed_image: String,
    pub placeholder_image: String,
    pub currency_symbol: String,
    /// `log` level name ("error" .. "trace", or "off")
    pub log_level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_count: 12,
            seed_image: SEED_IMAGE.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            currency_symbol: "₹".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
