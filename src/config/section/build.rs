//! `build` section configuration.

use serde::{Deserialize, Serialize};

/// Build and deployment target settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Hosting platform the deploy command targets.
    pub target: BuildTarget,
}

/// Supported deploy platforms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildTarget {
    Vercel,
    #[default]
    Cloudflare,
}

impl BuildTarget {
    /// Parse a CLI-provided target name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "vercel" => Some(Self::Vercel),
            "cloudflare" => Some(Self::Cloudflare),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vercel => "vercel",
            Self::Cloudflare => "cloudflare",
        }
    }
}
