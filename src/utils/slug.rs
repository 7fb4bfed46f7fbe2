//! URL slug generation.
//!
//! Transliterates Unicode to ASCII (CJK titles become pinyin-style words),
//! lowercases, and collapses everything outside `[a-z0-9]` into single
//! hyphens. The result is safe to use as a URL path segment.

use deunicode::deunicode;

/// Slugify a title into a URL-safe path segment.
///
/// ```ignore
/// assert_eq!(slugify("Hello,  World!"), "hello-world");
/// assert_eq!(slugify("React教程"), "react-jiao-cheng");
/// ```
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut prev_hyphen = true; // Suppress leading hyphens

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }

    // Trailing separator from punctuation at the end
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Build an `.mdx` file name from a slug, with an optional dedup index.
pub fn file_name(slug: &str, index: Option<usize>) -> String {
    match index {
        Some(i) => format!("{slug}-{i}.mdx"),
        None => format!("{slug}.mdx"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_ascii() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Rust 2024 Edition"), "rust-2024-edition");
    }

    #[test]
    fn test_slugify_punctuation_collapsed() {
        assert_eq!(slugify("a -- b!!c"), "a-b-c");
        assert_eq!(slugify("  spaces  "), "spaces");
    }

    #[test]
    fn test_slugify_cjk_transliterated() {
        let slug = slugify("React教程");
        assert!(slug.starts_with("react"));
        assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        assert!(!slug.contains("--"));
    }

    #[test]
    fn test_slugify_url_safe() {
        for input in ["掌握Docker：实用技巧和方法", "C++ / WASM?", "émigré café"] {
            let slug = slugify(input);
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "unsafe slug for {input}: {slug}"
            );
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("my-post", None), "my-post.mdx");
        assert_eq!(file_name("my-post", Some(2)), "my-post-2.mdx");
    }
}
