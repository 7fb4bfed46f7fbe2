//! Content generation command.
//!
//! Runs the composer over a batch of keywords, skipping duplicates and
//! already-existing files. A failure on one keyword never aborts the
//! batch; it is logged and counted as skipped.

use crate::{
    composer::{ArticleComposer, KeywordInput},
    config::K2Config,
    corpus::{self, POSTS_DIR, dedup, write_markdown_file},
    log,
    utils::slug::file_name,
};
use anyhow::{Result, bail};
use std::path::Path;

pub struct GenerateOptions {
    pub keywords: Vec<String>,
    pub category: String,
    pub number: usize,
    pub seed: Option<u64>,
}

/// Outcome of a generation batch.
#[derive(Debug, Default)]
pub struct GenerateSummary {
    pub generated: usize,
    pub skipped: Vec<String>,
}

/// Generate articles into the conventional posts directory.
pub fn generate_content(options: &GenerateOptions, config: &K2Config) -> Result<()> {
    let posts_dir = Path::new(POSTS_DIR);
    if !posts_dir.exists() {
        bail!("{POSTS_DIR} does not exist; run `k2site init` first");
    }

    let summary = generate_into(posts_dir, options, config)?;

    log!("generate"; "done: {} generated, {} skipped", summary.generated, summary.skipped.len());
    if !summary.skipped.is_empty() {
        log!("warning"; "skipped keywords: {}", summary.skipped.join(", "));
    }
    Ok(())
}

fn generate_into(
    posts_dir: &Path,
    options: &GenerateOptions,
    config: &K2Config,
) -> Result<GenerateSummary> {
    let existing_titles = corpus::existing_titles(posts_dir);
    let mut composer = match options.seed {
        Some(seed) => ArticleComposer::with_seed(seed),
        None => ArticleComposer::new(),
    };

    let count = options.keywords.len().min(options.number);
    log!("generate"; "planning {count} article(s) into {}", posts_dir.display());

    let mut summary = GenerateSummary::default();

    for (index, raw_keyword) in options.keywords.iter().take(options.number).enumerate() {
        let keyword = raw_keyword.trim();
        if keyword.is_empty() {
            continue;
        }

        log!("generate"; "[{}/{count}] keyword: \"{keyword}\"", index + 1);

        let input = KeywordInput::new(keyword, Some(options.category.clone()));
        let outline = composer.compose_outline(&input);

        if dedup::is_duplicate(&outline.title, &existing_titles, dedup::DEFAULT_THRESHOLD) {
            log!("warning"; "skipping near-duplicate title: {}", outline.title);
            summary.skipped.push(keyword.to_string());
            continue;
        }

        let article = composer.compose_document(&outline, &input, config);
        let path = posts_dir.join(file_name(&article.frontmatter.slug, None));

        if path.exists() {
            log!("warning"; "file already exists, skipping: {}", path.display());
            summary.skipped.push(keyword.to_string());
            continue;
        }

        match write_markdown_file(&path, &article.frontmatter, &article.content) {
            Ok(()) => {
                log!("generate"; "wrote {} ({})", path.display(), article.frontmatter.title);
                summary.generated += 1;
            }
            Err(err) => {
                log!("error"; "failed to write article for \"{keyword}\": {err}");
                summary.skipped.push(keyword.to_string());
            }
        }
    }

    Ok(summary)
}
