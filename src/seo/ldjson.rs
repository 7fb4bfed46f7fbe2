//! schema.org JSON-LD structured data.
//!
//! Four schema types: WebSite (with optional SearchAction), BreadcrumbList,
//! Article, and FAQPage. Each serializes to the exact shape search engines
//! expect, `@context`/`@type` keys included.

use crate::{config::K2Config, corpus::PostFrontmatter};
use anyhow::Result;
use serde::Serialize;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Serialize any schema into a compact JSON-LD string.
pub fn to_json_ld<T: Serialize>(schema: &T) -> Result<String> {
    Ok(serde_json::to_string(schema)?)
}

#[derive(Debug, Clone, Serialize)]
pub struct WebSiteSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    schema_type: &'static str,
    url: String,
    name: String,
    #[serde(rename = "potentialAction", skip_serializing_if = "Option::is_none")]
    potential_action: Option<SearchAction>,
}

#[derive(Debug, Clone, Serialize)]
struct SearchAction {
    #[serde(rename = "@type")]
    schema_type: &'static str,
    target: String,
    #[serde(rename = "query-input")]
    query_input: &'static str,
}

impl WebSiteSchema {
    pub fn new(config: &K2Config, include_search: bool) -> Self {
        let domain = config.domain();

        Self {
            context: SCHEMA_CONTEXT,
            schema_type: "WebSite",
            url: domain.to_string(),
            name: config.site.name.clone(),
            potential_action: include_search.then(|| SearchAction {
                schema_type: "SearchAction",
                target: format!("{domain}/search?q={{search_term_string}}"),
                query_input: "required name=search_term_string",
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BreadcrumbSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    schema_type: &'static str,
    #[serde(rename = "itemListElement")]
    item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, Serialize)]
struct ListItem {
    #[serde(rename = "@type")]
    schema_type: &'static str,
    position: usize,
    name: String,
    item: String,
}

impl BreadcrumbSchema {
    /// Build a breadcrumb trail from `(name, url)` pairs. Relative URLs
    /// are made absolute against the site domain.
    pub fn new(config: &K2Config, breadcrumbs: &[(&str, &str)]) -> Self {
        let domain = config.domain();

        let item_list_element = breadcrumbs
            .iter()
            .enumerate()
            .map(|(index, (name, url))| ListItem {
                schema_type: "ListItem",
                position: index + 1,
                name: (*name).to_string(),
                item: if url.starts_with("http") {
                    (*url).to_string()
                } else {
                    format!("{domain}{url}")
                },
            })
            .collect();

        Self {
            context: SCHEMA_CONTEXT,
            schema_type: "BreadcrumbList",
            item_list_element,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    schema_type: &'static str,
    headline: String,
    #[serde(rename = "datePublished")]
    date_published: String,
    #[serde(rename = "dateModified", skip_serializing_if = "Option::is_none")]
    date_modified: Option<String>,
    author: Person,
    publisher: Organization,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<Vec<String>>,
    #[serde(rename = "mainEntityOfPage")]
    main_entity_of_page: String,
    description: String,
    keywords: Vec<String>,
    #[serde(rename = "articleSection")]
    article_section: String,
}

#[derive(Debug, Clone, Serialize)]
struct Person {
    #[serde(rename = "@type")]
    schema_type: &'static str,
    name: String,
}

#[derive(Debug, Clone, Serialize)]
struct Organization {
    #[serde(rename = "@type")]
    schema_type: &'static str,
    name: String,
}

impl ArticleSchema {
    pub fn new(config: &K2Config, frontmatter: &PostFrontmatter) -> Self {
        let main_entity_of_page = frontmatter
            .canonical
            .clone()
            .unwrap_or_else(|| format!("{}/{}", config.domain(), frontmatter.slug));

        Self {
            context: SCHEMA_CONTEXT,
            schema_type: "Article",
            headline: frontmatter.title.clone(),
            date_published: frontmatter.date.clone(),
            date_modified: frontmatter.updated.clone(),
            author: Person {
                schema_type: "Person",
                name: config.site.author.name.clone(),
            },
            publisher: Organization {
                schema_type: "Organization",
                name: config.site.name.clone(),
            },
            image: frontmatter.image.clone().map(|image| vec![image]),
            main_entity_of_page,
            description: frontmatter.description.clone(),
            keywords: frontmatter.keywords.clone(),
            article_section: frontmatter.category.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqSchema {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    schema_type: &'static str,
    #[serde(rename = "mainEntity")]
    main_entity: Vec<Question>,
}

#[derive(Debug, Clone, Serialize)]
struct Question {
    #[serde(rename = "@type")]
    schema_type: &'static str,
    name: String,
    #[serde(rename = "acceptedAnswer")]
    accepted_answer: Answer,
}

#[derive(Debug, Clone, Serialize)]
struct Answer {
    #[serde(rename = "@type")]
    schema_type: &'static str,
    text: String,
}

impl FaqSchema {
    /// Build a FAQPage schema from `(question, answer)` pairs.
    pub fn new(faqs: &[(&str, &str)]) -> Self {
        let main_entity = faqs
            .iter()
            .map(|(question, answer)| Question {
                schema_type: "Question",
                name: (*question).to_string(),
                accepted_answer: Answer {
                    schema_type: "Answer",
                    text: (*answer).to_string(),
                },
            })
            .collect();

        Self {
            context: SCHEMA_CONTEXT,
            schema_type: "FAQPage",
            main_entity,
        }
    }
}
