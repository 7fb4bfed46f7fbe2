//! RSS 2.0 feed generation.
//!
//! Emits a feed of the 20 newest posts. Channel metadata comes from the
//! site config; a 1440-minute TTL tells readers to refresh daily.

use super::{PUBLIC_DIR, write_artifact};
use crate::{
    config::K2Config,
    corpus::{self, POSTS_DIR, PostFrontmatter},
    log,
    utils::date::DateTimeUtc,
};
use anyhow::{Result, anyhow};
use rss::{CategoryBuilder, ChannelBuilder, GuidBuilder, ItemBuilder, validation::Validate};
use std::path::{Path, PathBuf};

/// Maximum number of items in the feed.
const FEED_LIMIT: usize = 20;

pub struct RssGenerator<'a> {
    config: &'a K2Config,
    posts_dir: PathBuf,
}

impl<'a> RssGenerator<'a> {
    pub fn new(config: &'a K2Config) -> Self {
        Self::with_posts_dir(config, PathBuf::from(POSTS_DIR))
    }

    pub fn with_posts_dir(config: &'a K2Config, posts_dir: PathBuf) -> Self {
        Self { config, posts_dir }
    }

    /// Render the feed document.
    pub fn generate(&self) -> Result<String> {
        let mut posts = corpus::read_posts(&self.posts_dir);
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts.truncate(FEED_LIMIT);

        let items: Vec<_> = posts
            .iter()
            .filter_map(|post| self.post_to_item(post))
            .collect();

        let channel = ChannelBuilder::default()
            .title(&self.config.site.name)
            .link(self.config.domain())
            .description(format!("{} - 高质量内容聚合", self.config.seo.brand))
            .language(self.config.site.language.clone())
            .last_build_date(DateTimeUtc::now().to_rfc2822())
            .ttl("1440".to_string())
            .generator("k2site".to_string())
            .items(items)
            .build();

        channel
            .validate()
            .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
        Ok(channel.to_string())
    }

    /// Generate and write the feed, defaulting to `public/rss.xml`.
    pub fn save(&self, output: Option<&Path>) -> Result<()> {
        let default_path = Path::new(PUBLIC_DIR).join("rss.xml");
        let path = output.unwrap_or(&default_path);

        write_artifact(path, &self.generate()?)?;
        log!("rss"; "{}", path.display());
        Ok(())
    }

    fn post_to_item(&self, post: &PostFrontmatter) -> Option<rss::Item> {
        // Posts with unparsable dates are silently dropped from the feed
        let pub_date = DateTimeUtc::parse(&post.date).map(DateTimeUtc::to_rfc2822)?;
        let link = format!("{}/{}", self.config.domain(), post.slug);

        let category = CategoryBuilder::default().name(post.category.clone()).build();

        Some(
            ItemBuilder::default()
                .title(post.title.clone())
                .description(post.description.clone())
                .link(Some(link.clone()))
                .guid(GuidBuilder::default().permalink(true).value(link).build())
                .pub_date(pub_date)
                .categories(vec![category])
                .author(self.config.site.author.name.clone())
                .build(),
        )
    }
}
