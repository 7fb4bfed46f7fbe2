//! SEO data builders.
//!
//! - `meta`: per-page meta/OpenGraph/Twitter data
//! - `ldjson`: schema.org JSON-LD structured data
//!
//! Both produce plain data for the page templates to embed; nothing here
//! touches the filesystem.

pub mod ldjson;
pub mod meta;

pub use meta::{SeoData, canonical_url, page_title, truncate_text};
