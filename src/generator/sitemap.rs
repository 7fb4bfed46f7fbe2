//! Sitemap generation.
//!
//! Generates a sitemap.xml listing the homepage, every post, and the
//! fixed static pages, each with a changefreq and priority hint.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>daily</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use super::{PUBLIC_DIR, escape_xml, write_artifact};
use crate::{
    config::K2Config,
    corpus::{self, POSTS_DIR},
    log,
    utils::date,
};
use anyhow::Result;
use std::fmt::Write;
use std::path::{Path, PathBuf};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Static pages every scaffolded site carries, with their crawl hints.
const STATIC_PAGES: [(&str, &str, f64); 4] = [
    ("about", "monthly", 0.6),
    ("privacy", "yearly", 0.3),
    ("terms", "yearly", 0.3),
    ("contact", "monthly", 0.4),
];

pub struct SitemapGenerator<'a> {
    config: &'a K2Config,
    posts_dir: PathBuf,
}

struct UrlEntry {
    loc: String,
    lastmod: String,
    changefreq: &'static str,
    priority: f64,
}

impl<'a> SitemapGenerator<'a> {
    pub fn new(config: &'a K2Config) -> Self {
        Self::with_posts_dir(config, PathBuf::from(POSTS_DIR))
    }

    pub fn with_posts_dir(config: &'a K2Config, posts_dir: PathBuf) -> Self {
        Self { config, posts_dir }
    }

    /// Render the full sitemap document.
    pub fn generate(&self) -> String {
        into_xml(&self.entries())
    }

    /// Generate and write the sitemap, defaulting to `public/sitemap.xml`.
    pub fn save(&self, output: Option<&Path>) -> Result<()> {
        let default_path = Path::new(PUBLIC_DIR).join("sitemap.xml");
        let path = output.unwrap_or(&default_path);

        write_artifact(path, &self.generate())?;
        log!("sitemap"; "{}", path.display());
        Ok(())
    }

    /// Homepage first, then posts newest-first, then the static pages.
    fn entries(&self) -> Vec<UrlEntry> {
        let domain = self.config.domain();
        let today = date::today_iso();

        let mut entries = vec![UrlEntry {
            loc: format!("{domain}/"),
            lastmod: today.clone(),
            changefreq: "daily",
            priority: 1.0,
        }];

        let mut posts: Vec<UrlEntry> = corpus::read_posts(&self.posts_dir)
            .iter()
            .map(|post| UrlEntry {
                loc: format!("{domain}/{}", post.slug),
                lastmod: post.lastmod().to_string(),
                changefreq: "monthly",
                priority: 0.8,
            })
            .collect();
        posts.sort_by(|a, b| b.lastmod.cmp(&a.lastmod));
        entries.extend(posts);

        for (page, changefreq, priority) in STATIC_PAGES {
            entries.push(UrlEntry {
                loc: format!("{domain}/{page}"),
                lastmod: today.clone(),
                changefreq,
                priority,
            });
        }

        entries
    }
}

fn into_xml(entries: &[UrlEntry]) -> String {
    let mut xml = String::with_capacity(4096);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in entries {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&entry.loc));
        xml.push_str("</loc>\n    <lastmod>");
        xml.push_str(&entry.lastmod);
        xml.push_str("</lastmod>\n    <changefreq>");
        xml.push_str(entry.changefreq);
        xml.push_str("</changefreq>\n");
        let _ = writeln!(xml, "    <priority>{:.1}</priority>", entry.priority);
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, slug: &str, date: &str, updated: Option<&str>) {
        let updated_line = updated.map(|u| format!("updated: \"{u}\"\n")).unwrap_or_default();
        let content = format!(
            "---\nslug: {slug}\ndate: \"{date}\"\n{updated_line}title: {slug}\ndescription: d\ncategory: c\n---\n\nBody.\n"
        );
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_homepage_is_first_with_full_priority() {
        let temp = TempDir::new().unwrap();
        let config = K2Config::default();
        let xml = SitemapGenerator::with_posts_dir(&config, temp.path().to_path_buf()).generate();

        let first_url = xml.find("<loc>").unwrap();
        assert!(xml[first_url..].starts_with("<loc>https://example.com/</loc>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.contains("<changefreq>daily</changefreq>"));
    }

    #[test]
    fn test_posts_sorted_by_lastmod_descending() {
        let temp = TempDir::new().unwrap();
        write_post(temp.path(), "old.md", "old-post", "2024-01-01", None);
        write_post(temp.path(), "new.md", "new-post", "2024-06-01", None);

        let config = K2Config::default();
        let xml = SitemapGenerator::with_posts_dir(&config, temp.path().to_path_buf()).generate();

        let new_pos = xml.find("new-post").unwrap();
        let old_pos = xml.find("old-post").unwrap();
        assert!(new_pos < old_pos);
    }

    #[test]
    fn test_updated_wins_over_date() {
        let temp = TempDir::new().unwrap();
        write_post(temp.path(), "a.md", "a-post", "2024-01-01", Some("2024-09-01"));

        let config = K2Config::default();
        let xml = SitemapGenerator::with_posts_dir(&config, temp.path().to_path_buf()).generate();

        assert!(xml.contains("<lastmod>2024-09-01</lastmod>"));
    }

    #[test]
    fn test_static_pages_present() {
        let temp = TempDir::new().unwrap();
        let config = K2Config::default();
        let xml = SitemapGenerator::with_posts_dir(&config, temp.path().to_path_buf()).generate();

        assert!(xml.contains("<loc>https://example.com/about</loc>"));
        assert!(xml.contains("<loc>https://example.com/privacy</loc>"));
        assert!(xml.contains("<loc>https://example.com/terms</loc>"));
        assert!(xml.contains("<loc>https://example.com/contact</loc>"));
        // homepage + 4 static pages, no posts
        assert_eq!(xml.matches("<url>").count(), 5);
    }

    #[test]
    fn test_priority_formatting() {
        let temp = TempDir::new().unwrap();
        let config = K2Config::default();
        let xml = SitemapGenerator::with_posts_dir(&config, temp.path().to_path_buf()).generate();

        assert!(xml.contains("<priority>0.3</priority>"));
        assert!(xml.contains("<priority>0.4</priority>"));
        assert!(!xml.contains("<priority>0.30"));
    }

    #[test]
    fn test_save_writes_file() {
        let temp = TempDir::new().unwrap();
        let config = K2Config::default();
        let out = temp.path().join("public/sitemap.xml");

        SitemapGenerator::with_posts_dir(&config, temp.path().join("posts"))
            .save(Some(&out))
            .unwrap();

        let xml = fs::read_to_string(&out).unwrap();
        assert!(xml.starts_with("<?xml"));
    }
}
