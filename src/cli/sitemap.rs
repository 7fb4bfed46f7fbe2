//! SEO artifact command.
//!
//! Writes sitemap.xml, robots.txt and rss.xml into `public/`. Also used
//! by the build command so the artifacts are always fresh before the
//! site builder runs.

use crate::{
    config::K2Config,
    generator::{robots::RobotsGenerator, rss::RssGenerator, sitemap::SitemapGenerator},
    log,
};
use anyhow::Result;

/// Generate all three SEO artifacts with their default output paths.
pub fn generate_seo_files(config: &K2Config) -> Result<()> {
    SitemapGenerator::new(config).save(None)?;
    RobotsGenerator::new(config).save(None)?;
    RssGenerator::new(config).save(None)?;
    Ok(())
}

pub fn run(config: &K2Config) -> Result<()> {
    generate_seo_files(config)?;
    log!("sitemap"; "all SEO files generated under public/");
    Ok(())
}
