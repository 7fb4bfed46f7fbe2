//! SEO artifact generators.
//!
//! Generates auxiliary files from the post corpus and site config:
//!
//! - **Sitemap**: search engine indexing (`sitemap.xml`)
//! - **Robots**: crawler policy (`robots.txt`)
//! - **RSS**: RSS 2.0 feed of the newest posts (`rss.xml`)
//!
//! All three read the same frontmatter corpus and write into `public/`,
//! where the site builder copies them into the final output verbatim.

pub mod robots;
pub mod rss;
pub mod sitemap;

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::{fs, path::Path};

/// Directory the generated artifacts land in, relative to the project root.
pub const PUBLIC_DIR: &str = "public";

/// Write a generated artifact, creating parent directories as needed.
pub(crate) fn write_artifact(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write '{}'", path.display()))
}

/// Escape special XML characters.
pub(crate) fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_escape_xml_combined() {
        assert_eq!(
            escape_xml("<a href=\"test\">link & 'text'</a>"),
            "&lt;a href=&quot;test&quot;&gt;link &amp; &apos;text&apos;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_write_artifact_creates_parents() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("public/sitemap.xml");
        write_artifact(&path, "<urlset/>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<urlset/>");
    }
}
