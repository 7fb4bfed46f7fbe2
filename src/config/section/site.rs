//! `site` section configuration.
//!
//! # Example
//!
//! ```yaml
//! site:
//!   name: "My Site"
//!   domain: "https://example.com"
//!   language: "zh-CN"
//!   author:
//!     name: "Editor"
//!     url: "/about"
//!   themeColor: "#0ea5e9"
//! ```

use serde::{Deserialize, Serialize};

/// Site metadata (name, domain, language, author, theme color).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site display name, used as the RSS channel title.
    pub name: String,

    /// Absolute site origin, e.g. `https://example.com`. No trailing slash.
    pub domain: String,

    /// BCP 47 language tag.
    pub language: String,

    /// Site author, referenced by RSS items and Article JSON-LD.
    pub author: AuthorConfig,

    /// Theme color for the site shell.
    pub theme_color: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "K2Site Demo".to_string(),
            domain: "https://example.com".to_string(),
            language: "zh-CN".to_string(),
            author: AuthorConfig::default(),
            theme_color: "#0ea5e9".to_string(),
        }
    }
}

/// Site author identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    pub url: String,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: "K2Site Generator".to_string(),
            url: "/about".to_string(),
        }
    }
}
