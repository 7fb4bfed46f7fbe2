//! Post frontmatter parsing and serialization.
//!
//! Frontmatter is a YAML block fenced by `---` lines at the head of a
//! Markdown file:
//!
//! ```text
//! ---
//! slug: hello-world
//! date: "2024-01-01"
//! title: "Hello World"
//! ...
//! ---
//!
//! Body content.
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Frontmatter record for one content file.
///
/// Created by the composer or by hand-editing a file; read-only to the
/// generators. `slug` doubles as the URL path segment, so it must stay
/// within `[a-z0-9-]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFrontmatter {
    pub slug: String,

    /// Publish date, ISO `YYYY-MM-DD`.
    pub date: String,

    /// Last-updated date; sitemap lastmod prefers this over `date`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,

    pub title: String,
    pub description: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    pub category: String,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Estimated reading time in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub references: Option<Vec<Reference>>,
}

/// A cited source attached to a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub title: String,
    pub url: String,
}

impl PostFrontmatter {
    /// Effective lastmod for sitemap purposes: `updated` wins over `date`.
    pub fn lastmod(&self) -> &str {
        self.updated.as_deref().unwrap_or(&self.date)
    }
}

/// Split a Markdown source into its frontmatter record and body.
///
/// Returns `Ok(None)` when the file has no frontmatter fence at all;
/// a fenced but unparsable block is an error (the corpus reader turns
/// it into a warn-and-skip).
pub fn extract_frontmatter(source: &str) -> Result<Option<(PostFrontmatter, &str)>> {
    let Some(rest) = source.strip_prefix("---") else {
        return Ok(None);
    };
    let rest = match rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix("\n")) {
        Some(rest) => rest,
        None => return Ok(None), // "---something" is a horizontal rule, not a fence
    };

    let Some(end) = rest.find("\n---") else {
        return Ok(None);
    };
    let yaml = &rest[..end + 1];
    let body = rest[end + 4..].trim_start_matches(['\r', '\n']);

    let frontmatter: PostFrontmatter =
        serde_yaml::from_str(yaml).context("invalid YAML frontmatter")?;
    Ok(Some((frontmatter, body)))
}

/// Write a Markdown file with serialized frontmatter, creating parent
/// directories as needed.
pub fn write_markdown_file(
    path: &Path,
    frontmatter: &PostFrontmatter,
    content: &str,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    let yaml = serde_yaml::to_string(frontmatter).context("failed to serialize frontmatter")?;
    let file_content = format!("---\n{yaml}---\n\n{content}");

    fs::write(path, file_content)
        .with_context(|| format!("Failed to write '{}'", path.display()))
}
