//! `seo` section configuration.

use serde::{Deserialize, Serialize};

/// SEO defaults applied to pages without their own metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoConfig {
    /// Brand string, used in meta descriptions and the RSS channel.
    pub brand: String,

    /// Fallback Open Graph image path.
    pub og_default_image: String,

    /// Twitter handle for card attribution.
    pub twitter_handle: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            brand: "K2Site Demo".to_string(),
            og_default_image: "/og-default.jpg".to_string(),
            twitter_handle: "@k2site".to_string(),
        }
    }
}
