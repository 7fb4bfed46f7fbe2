//! Per-page SEO metadata.
//!
//! Builds the title/description/OpenGraph/Twitter data a page template
//! needs, either from a post's frontmatter (article pages) or from a
//! plain title and description (static pages).

use crate::{config::K2Config, corpus::PostFrontmatter};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    Website,
    Article,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    Summary,
    SummaryLargeImage,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoData {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_type: OgType,
    pub twitter_card: TwitterCard,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl SeoData {
    /// SEO data for an article page.
    pub fn for_post(config: &K2Config, frontmatter: &PostFrontmatter) -> Self {
        Self {
            title: page_title(&frontmatter.title, &config.site.name),
            description: frontmatter.description.clone(),
            canonical: frontmatter.canonical.clone(),
            og_title: frontmatter.title.clone(),
            og_description: frontmatter.description.clone(),
            og_image: frontmatter
                .image
                .clone()
                .unwrap_or_else(|| config.seo.og_default_image.clone()),
            og_type: OgType::Article,
            twitter_card: TwitterCard::SummaryLargeImage,
            author: Some(config.site.author.name.clone()),
            published_time: Some(frontmatter.date.clone()),
            modified_time: frontmatter.updated.clone(),
            section: Some(frontmatter.category.clone()),
            tags: Some(frontmatter.tags.clone()),
        }
    }

    /// SEO data for a static page. Both arguments are optional; the site
    /// name and a stock description fill the gaps.
    pub fn for_page(
        config: &K2Config,
        page_title: Option<&str>,
        page_description: Option<&str>,
    ) -> Self {
        let site_name = &config.site.name;
        let description = page_description
            .map(str::to_string)
            .unwrap_or_else(|| format!("{site_name} - 高质量内容聚合站点"));

        Self {
            title: page_title
                .map(|title| format!("{title} | {site_name}"))
                .unwrap_or_else(|| site_name.clone()),
            description: description.clone(),
            canonical: Some(config.site.domain.clone()),
            og_title: page_title.unwrap_or(site_name).to_string(),
            og_description: description,
            og_image: config.seo.og_default_image.clone(),
            og_type: OgType::Website,
            twitter_card: TwitterCard::SummaryLargeImage,
            author: None,
            published_time: None,
            modified_time: None,
            section: None,
            tags: None,
        }
    }
}

/// `"{title} | {site}"`, unless the title already names the site.
pub fn page_title(title: &str, site_name: &str) -> String {
    if title.contains(site_name) {
        return title.to_string();
    }
    format!("{title} | {site_name}")
}

/// Absolute canonical URL for a path.
pub fn canonical_url(path: &str, domain: &str) -> String {
    let domain = domain.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{domain}{path}")
    } else {
        format!("{domain}/{path}")
    }
}

/// Truncate to at most `max_length` characters, breaking at the last
/// space when one exists and appending an ellipsis.
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_length.saturating_sub(3)).collect();
    match truncated.rfind(' ') {
        Some(pos) if pos > 0 => format!("{}...", &truncated[..pos]),
        _ => format!("{truncated}..."),
    }
}
