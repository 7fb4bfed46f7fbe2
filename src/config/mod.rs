//! Site configuration management for `k2.config.yaml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # site (name, domain, language, author)
//! │   ├── seo        # seo (brand, og image, twitter)
//! │   ├── monetization # monetization (adsense, consent)
//! │   ├── content    # content (minWords, TOC, FAQ, images)
//! │   └── build      # build (deploy target)
//! ├── store.rs       # Memoized global config handle
//! └── mod.rs         # K2Config (this file)
//! ```
//!
//! # Merge semantics
//!
//! Every field has a default. A partially-specified user config merges
//! field-by-field over the defaults through serde: each section struct
//! carries `#[serde(default)]`, so unspecified fields (including nested
//! sub-objects like `site.author` or `monetization.adsense.slots`) fall
//! back to their defaults.
//!
//! Loading never fails: a missing or malformed config file logs a warning
//! and yields the default configuration.

pub mod section;
mod store;

pub use section::{
    AdSenseConfig, AdSlotsConfig, AuthorConfig, BuildConfig, BuildTarget, ConsentConfig,
    ConsentMode, ContentConfig, ImageSource, ImagesConfig, MonetizationConfig, SeoConfig,
    SiteConfig, is_valid_adsense_client_id,
};
pub use store::{clear_cache, get, load};

use crate::log;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Default config file name, resolved relative to the working directory.
pub const CONFIG_FILE: &str = "k2.config.yaml";

/// Root configuration structure representing `k2.config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct K2Config {
    /// Site metadata (name, domain, language, author)
    pub site: SiteConfig,

    /// SEO defaults (brand, OG image, twitter handle)
    pub seo: SeoConfig,

    /// Monetization (AdSense, consent)
    pub monetization: MonetizationConfig,

    /// Content composition settings
    pub content: ContentConfig,

    /// Build settings
    pub build: BuildConfig,
}

/// Configuration-related errors.
///
/// These never escape [`K2Config::load_or_default`]; they are logged and
/// recovered by falling back to defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl K2Config {
    /// Parse configuration from a YAML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from `path`, falling back to defaults.
    ///
    /// - `None` resolves to `./k2.config.yaml`.
    /// - A missing file logs a warning and returns defaults.
    /// - A parse failure logs the error and returns defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let default_path = PathBuf::from(CONFIG_FILE);
        let path = path.unwrap_or(&default_path);

        if !path.exists() {
            log!("warning"; "config file {} not found, using defaults", path.display());
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => config,
            Err(err) => {
                log!("error"; "failed to read config: {err}");
                log!("warning"; "using default configuration");
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Site domain without a trailing slash.
    pub fn domain(&self) -> &str {
        self.site.domain.trim_end_matches('/')
    }
}
