//! Templated article composition.
//!
//! # Module Structure
//!
//! ```text
//! composer/
//! ├── intent.rs    # Search-intent classification
//! ├── outline.rs   # Title/section/FAQ templates
//! ├── document.rs  # Markdown body assembly
//! └── mod.rs       # ArticleComposer (this file)
//! ```
//!
//! Articles are built in two steps: an outline (title, meta description,
//! sections, related entities, FAQ questions) and then the full document
//! (frontmatter + Markdown body). Title selection is the single random
//! choice; everything downstream of the outline is deterministic, and
//! the RNG is seedable for tests.

mod document;
mod intent;
pub mod outline;

pub use intent::SearchIntent;
pub use outline::{ContentOutline, OutlineSection};

use crate::{
    config::K2Config,
    corpus::PostFrontmatter,
    utils::{date, slug::slugify},
};

/// One keyword to compose an article for.
#[derive(Debug, Clone)]
pub struct KeywordInput {
    pub keyword: String,
    pub search_intent: SearchIntent,
    pub target_audience: Option<String>,
    pub category: Option<String>,
}

impl KeywordInput {
    /// Build an input from a raw keyword, classifying its intent.
    pub fn new(keyword: impl Into<String>, category: Option<String>) -> Self {
        let keyword = keyword.into();
        Self {
            search_intent: SearchIntent::detect(&keyword),
            keyword,
            target_audience: None,
            category,
        }
    }
}

/// A composed article, ready to write to disk.
#[derive(Debug, Clone)]
pub struct GeneratedArticle {
    pub frontmatter: PostFrontmatter,
    pub content: String,
}

/// Builds outlines and documents from keyword inputs.
///
/// Construct with [`ArticleComposer::new`] for varied production titles
/// or [`ArticleComposer::with_seed`] for reproducible output.
#[derive(Debug)]
pub struct ArticleComposer {
    rng: fastrand::Rng,
}

impl Default for ArticleComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleComposer {
    pub fn new() -> Self {
        Self { rng: fastrand::Rng::new() }
    }

    /// A composer whose title choices are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed) }
    }

    /// Produce the article skeleton for a keyword.
    ///
    /// The title template is picked uniformly at random; all other parts
    /// are fixed functions of the keyword and intent.
    pub fn compose_outline(&mut self, input: &KeywordInput) -> ContentOutline {
        let keyword = &input.keyword;
        let template = self.rng.usize(0..outline::TITLE_TEMPLATE_COUNT);

        ContentOutline {
            title: outline::title(keyword, template),
            meta_description: outline::meta_description(keyword, input.search_intent),
            sections: outline::sections(keyword),
            related_entities: outline::related_entities(keyword),
            faq_questions: outline::faq_questions(keyword),
        }
    }

    /// Expand an outline into frontmatter and a Markdown body.
    pub fn compose_document(
        &self,
        outline: &ContentOutline,
        input: &KeywordInput,
        config: &K2Config,
    ) -> GeneratedArticle {
        let slug = slugify(&outline.title);
        let category = input.category.clone().unwrap_or_else(|| "技术教程".to_string());

        let mut keywords = vec![input.keyword.clone()];
        keywords.extend(outline.related_entities.iter().take(7).cloned());

        let frontmatter = PostFrontmatter {
            canonical: Some(format!("{}/{slug}", config.domain())),
            date: date::today_iso(),
            updated: None,
            title: outline.title.clone(),
            description: outline.meta_description.clone(),
            keywords,
            category,
            tags: outline.related_entities.iter().take(5).cloned().collect(),
            image: None,
            reading_time: Some(estimate_reading_time(config.content.min_words)),
            references: None,
            slug,
        };

        let content = document::assemble(
            outline,
            &input.keyword,
            config.content.add_toc,
            config.content.add_faq,
        );

        GeneratedArticle { frontmatter, content }
    }
}

/// Reading time in minutes at 200 words per minute, rounded up.
fn estimate_reading_time(word_count: u32) -> u32 {
    word_count.div_ceil(200)
}
