//! Search-intent classification for keywords.

use serde::{Deserialize, Serialize};

/// Substrings that mark a purchase-oriented keyword.
const TRANSACTIONAL_WORDS: [&str; 7] = ["购买", "下载", "注册", "订阅", "价格", "购物", "折扣"];

/// Substrings that mark a navigation-oriented keyword.
const NAVIGATIONAL_WORDS: [&str; 5] = ["官网", "登录", "网站", "首页", "平台"];

/// What a searcher is trying to do with a keyword. Drives the meta
/// description template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchIntent {
    #[default]
    Informational,
    Transactional,
    Navigational,
}

impl SearchIntent {
    /// Classify a keyword by substring lookup.
    ///
    /// Transactional markers are checked before navigational ones, so a
    /// keyword containing both classifies as transactional. Anything
    /// unmatched is informational.
    pub fn detect(keyword: &str) -> Self {
        let keyword = keyword.to_lowercase();

        if TRANSACTIONAL_WORDS.iter().any(|word| keyword.contains(word)) {
            return Self::Transactional;
        }
        if NAVIGATIONAL_WORDS.iter().any(|word| keyword.contains(word)) {
            return Self::Navigational;
        }
        Self::Informational
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transactional() {
        assert_eq!(SearchIntent::detect("VPN价格对比"), SearchIntent::Transactional);
        assert_eq!(SearchIntent::detect("软件下载"), SearchIntent::Transactional);
    }

    #[test]
    fn test_navigational() {
        assert_eq!(SearchIntent::detect("GitHub官网"), SearchIntent::Navigational);
        assert_eq!(SearchIntent::detect("登录页面"), SearchIntent::Navigational);
    }

    #[test]
    fn test_informational_default() {
        assert_eq!(SearchIntent::detect("Rust教程"), SearchIntent::Informational);
        assert_eq!(SearchIntent::detect(""), SearchIntent::Informational);
    }

    #[test]
    fn test_transactional_wins_over_navigational() {
        // Contains both 购买 and 网站
        assert_eq!(SearchIntent::detect("购买网站模板"), SearchIntent::Transactional);
    }
}
