//! robots.txt generation.
//!
//! Allows everything except the non-content routes, points crawlers at
//! the sitemap, and opens the site to the AdSense crawler when ads are
//! enabled.

use super::{PUBLIC_DIR, write_artifact};
use crate::{config::K2Config, log};
use anyhow::Result;
use std::path::Path;

/// Routes that never belong in a search index.
const DISALLOWED: [&str; 4] = ["/drafts/", "/api/", "/_astro/", "/admin/"];

pub struct RobotsGenerator<'a> {
    config: &'a K2Config,
}

impl<'a> RobotsGenerator<'a> {
    pub fn new(config: &'a K2Config) -> Self {
        Self { config }
    }

    pub fn generate(&self) -> String {
        let mut lines = vec!["User-agent: *".to_string(), "Allow: /".to_string(), String::new()];

        for route in DISALLOWED {
            lines.push(format!("Disallow: {route}"));
        }

        lines.push(String::new());
        lines.push(format!("Sitemap: {}/sitemap.xml", self.config.domain()));

        if self.config.monetization.adsense.enabled {
            lines.push(String::new());
            lines.push("# AdSense crawling allowed".to_string());
            lines.push("User-agent: Mediapartners-Google".to_string());
            lines.push("Allow: /".to_string());
        }

        lines.join("\n")
    }

    /// Generate and write robots.txt, defaulting to `public/robots.txt`.
    pub fn save(&self, output: Option<&Path>) -> Result<()> {
        let default_path = Path::new(PUBLIC_DIR).join("robots.txt");
        let path = output.unwrap_or(&default_path);

        write_artifact(path, &self.generate())?;
        log!("robots"; "{}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_policy() {
        let config = K2Config::default();
        let robots = RobotsGenerator::new(&config).generate();

        assert!(robots.starts_with("User-agent: *\nAllow: /"));
        assert!(robots.contains("Disallow: /drafts/"));
        assert!(robots.contains("Disallow: /api/"));
        assert!(robots.contains("Disallow: /_astro/"));
        assert!(robots.contains("Disallow: /admin/"));
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
    }

    #[test]
    fn test_adsense_block_only_when_enabled() {
        let mut config = K2Config::default();
        assert!(!RobotsGenerator::new(&config).generate().contains("Mediapartners-Google"));

        config.monetization.adsense.enabled = true;
        let robots = RobotsGenerator::new(&config).generate();
        assert!(robots.contains("User-agent: Mediapartners-Google"));
        assert!(robots.ends_with("Allow: /"));
    }

    #[test]
    fn test_sitemap_url_has_no_double_slash() {
        let config = K2Config::from_str("site:\n  domain: https://ex.com/\n").unwrap();
        let robots = RobotsGenerator::new(&config).generate();
        assert!(robots.contains("Sitemap: https://ex.com/sitemap.xml"));
    }
}
