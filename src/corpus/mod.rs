//! Content corpus reading.
//!
//! Scans a posts directory for `.md`/`.mdx` files and parses each file's
//! YAML frontmatter into a [`PostFrontmatter`] record. The corpus feeds
//! every downstream generator (sitemap, RSS, duplicate checking).
//!
//! # Error policy
//!
//! - Missing directory: empty corpus, not an error.
//! - Malformed frontmatter in one file: warn and skip, keep scanning.

pub mod dedup;
mod frontmatter;

pub use frontmatter::{PostFrontmatter, Reference, extract_frontmatter, write_markdown_file};

use crate::log;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Conventional posts directory, relative to the project root.
pub const POSTS_DIR: &str = "content/posts";

/// Read all post frontmatter records from `dir`.
///
/// Files are visited in name order so output artifacts are deterministic.
pub fn read_posts(dir: &Path) -> Vec<PostFrontmatter> {
    let mut posts = Vec::new();

    let Ok(entries) = fs::read_dir(dir) else {
        // Missing directory yields an empty corpus
        return posts;
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_markdown(path))
        .collect();
    files.sort();

    for path in files {
        match read_post(&path) {
            Ok(fm) => posts.push(fm),
            Err(err) => {
                log!("warning"; "skipping {}: {err}", path.display());
            }
        }
    }

    posts
}

/// Titles of all parseable posts in `dir`, for duplicate checking.
pub fn existing_titles(dir: &Path) -> Vec<String> {
    read_posts(dir).into_iter().map(|post| post.title).collect()
}

/// Parse one post file's frontmatter.
fn read_post(path: &Path) -> anyhow::Result<PostFrontmatter> {
    let source = fs::read_to_string(path)?;
    match extract_frontmatter(&source)? {
        Some((frontmatter, _body)) => Ok(frontmatter),
        None => anyhow::bail!("no frontmatter block"),
    }
}

/// Markdown content file check. Extensions are matched case-sensitively.
fn is_markdown(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("md" | "mdx")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_post(dir: &Path, name: &str, frontmatter: &str) {
        let content = format!("---\n{frontmatter}---\n\nBody text.\n");
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_missing_directory_is_empty() {
        assert!(read_posts(Path::new("/nonexistent/posts")).is_empty());
    }

    #[test]
    fn test_reads_md_and_mdx() {
        let temp = TempDir::new().unwrap();
        write_post(
            temp.path(),
            "a.md",
            "slug: a\ndate: \"2024-01-01\"\ntitle: A\ndescription: first\ncategory: c\n",
        );
        write_post(
            temp.path(),
            "b.mdx",
            "slug: b\ndate: \"2024-02-01\"\ntitle: B\ndescription: second\ncategory: c\n",
        );
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();

        let posts = read_posts(temp.path());
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "a");
        assert_eq!(posts[1].slug, "b");
    }

    #[test]
    fn test_malformed_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        write_post(
            temp.path(),
            "good.md",
            "slug: good\ndate: \"2024-01-01\"\ntitle: Good\ndescription: ok\ncategory: c\n",
        );
        fs::write(temp.path().join("bad.md"), "---\nslug: [broken\n---\n").unwrap();
        fs::write(temp.path().join("empty.md"), "no frontmatter here").unwrap();

        let posts = read_posts(temp.path());
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "good");
    }

    #[test]
    fn test_uppercase_extension_ignored() {
        let temp = TempDir::new().unwrap();
        write_post(
            temp.path(),
            "post.MD",
            "slug: a\ndate: \"2024-01-01\"\ntitle: A\ndescription: d\ncategory: c\n",
        );
        assert!(read_posts(temp.path()).is_empty());
    }

    #[test]
    fn test_existing_titles() {
        let temp = TempDir::new().unwrap();
        write_post(
            temp.path(),
            "a.md",
            "slug: a\ndate: \"2024-01-01\"\ntitle: Hello World\ndescription: d\ncategory: c\n",
        );
        assert_eq!(existing_titles(temp.path()), vec!["Hello World"]);
    }
}
