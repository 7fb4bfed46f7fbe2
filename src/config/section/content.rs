//! `content` section configuration.

use serde::{Deserialize, Serialize};

/// Article composition settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentConfig {
    /// Target word count per article; readingTime derives from it.
    pub min_words: u32,

    /// Insert a table-of-contents block after the introduction.
    #[serde(rename = "addTOC")]
    pub add_toc: bool,

    /// Append an FAQ block with templated answers.
    #[serde(rename = "addFAQ")]
    pub add_faq: bool,

    /// Illustration sourcing for generated posts.
    pub images: ImagesConfig,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            min_words: 1200,
            add_toc: true,
            add_faq: true,
            images: ImagesConfig::default(),
        }
    }
}

/// Per-post image settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImagesConfig {
    pub source: ImageSource,
    pub num_per_post: u32,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            source: ImageSource::Unsplash,
            num_per_post: 2,
        }
    }
}

/// Where post illustrations come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    #[default]
    Unsplash,
    Local,
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let content = ContentConfig::default();
        assert_eq!(content.min_words, 1200);
        assert!(content.add_toc);
        assert!(content.add_faq);
        assert_eq!(content.images.source, ImageSource::Unsplash);
        assert_eq!(content.images.num_per_post, 2);
    }

    #[test]
    fn test_yaml_field_names() {
        let content: ContentConfig =
            serde_yaml::from_str("minWords: 800\naddTOC: false\nimages:\n  source: none").unwrap();
        assert_eq!(content.min_words, 800);
        assert!(!content.add_toc);
        assert!(content.add_faq); // untouched default
        assert_eq!(content.images.source, ImageSource::None);
        assert_eq!(content.images.num_per_post, 2);
    }
}
