//! `monetization` section configuration (AdSense + consent).
//!
//! # Example
//!
//! ```yaml
//! monetization:
//!   adsense:
//!     enabled: true
//!     clientId: "ca-pub-0000000000000000"
//!     slots:
//!       article_top: "1234567890"
//!   consent:
//!     mode: "cmp"
//!     cmpProvider: "quantcast"
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Monetization settings: AdSense integration and consent handling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonetizationConfig {
    pub adsense: AdSenseConfig,
    pub consent: ConsentConfig,
}

/// AdSense integration settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdSenseConfig {
    /// When enabled, robots.txt gains a Mediapartners-Google allow block.
    pub enabled: bool,

    /// Publisher client id (`ca-pub-` + 16 digits).
    pub client_id: String,

    /// Named ad slot ids.
    pub slots: AdSlotsConfig,
}

/// The three named ad placements the page templates know about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdSlotsConfig {
    pub article_top: String,
    pub article_middle: String,
    pub sidebar_sticky: String,
}

/// Consent banner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConsentConfig {
    pub mode: ConsentMode,

    /// CMP vendor name, only meaningful when `mode` is `cmp`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmp_provider: Option<String>,
}

impl Default for ConsentConfig {
    fn default() -> Self {
        Self {
            mode: ConsentMode::Basic,
            cmp_provider: None,
        }
    }
}

/// Consent handling mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentMode {
    /// Simple self-hosted banner (default).
    #[default]
    Basic,
    /// Third-party consent management platform.
    Cmp,
    /// No consent banner.
    Off,
}

/// Validate an AdSense client id.
///
/// Accepts exactly `ca-pub-` followed by 16 digits. A simple shape check,
/// not an account lookup.
pub fn is_valid_adsense_client_id(client_id: &str) -> bool {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^ca-pub-\d{16}$").unwrap());
    RE.is_match(client_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let m = MonetizationConfig::default();
        assert!(!m.adsense.enabled);
        assert!(m.adsense.client_id.is_empty());
        assert_eq!(m.consent.mode, ConsentMode::Basic);
        assert!(m.consent.cmp_provider.is_none());
    }

    #[test]
    fn test_partial_slots_merge() {
        let m: MonetizationConfig = serde_yaml::from_str(
            "adsense:\n  enabled: true\n  slots:\n    article_top: \"111\"",
        )
        .unwrap();
        assert!(m.adsense.enabled);
        assert_eq!(m.adsense.slots.article_top, "111");
        assert_eq!(m.adsense.slots.article_middle, "");
    }

    #[test]
    fn test_consent_mode_parsing() {
        for (input, expected) in [
            ("basic", ConsentMode::Basic),
            ("cmp", ConsentMode::Cmp),
            ("off", ConsentMode::Off),
        ] {
            let consent: ConsentConfig =
                serde_yaml::from_str(&format!("mode: {input}")).unwrap();
            assert_eq!(consent.mode, expected, "mode failed for {input}");
        }
    }

    #[test]
    fn test_adsense_client_id_validation() {
        assert!(is_valid_adsense_client_id("ca-pub-1234567890123456"));
        assert!(!is_valid_adsense_client_id("ca-pub-123"));
        assert!(!is_valid_adsense_client_id("pub-1234567890123456"));
        assert!(!is_valid_adsense_client_id("ca-pub-123456789012345x"));
        assert!(!is_valid_adsense_client_id(""));
    }
}
