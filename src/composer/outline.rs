//! Outline templates.
//!
//! All article structure comes from fixed Chinese-language templates
//! parameterized on the keyword. The only non-deterministic choice is
//! the title template, picked by the composer's RNG.

use super::intent::SearchIntent;

/// Transient article skeleton: produced per keyword, consumed
/// immediately by document assembly, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentOutline {
    pub title: String,
    pub meta_description: String,
    pub sections: Vec<OutlineSection>,
    pub related_entities: Vec<String>,
    pub faq_questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineSection {
    pub heading: String,
    pub points: Vec<String>,
}

/// Number of title templates available to [`title`].
pub const TITLE_TEMPLATE_COUNT: usize = 5;

/// Render title template `index` (in `0..TITLE_TEMPLATE_COUNT`).
pub fn title(keyword: &str, index: usize) -> String {
    match index {
        0 => format!("{keyword}完全指南：从入门到精通"),
        1 => format!("{keyword}最佳实践：专家级教程"),
        2 => format!("{keyword}详解：你需要知道的一切"),
        3 => format!("掌握{keyword}：实用技巧和方法"),
        _ => format!("{keyword}终极教程：步骤详解"),
    }
}

/// Meta description keyed on search intent.
pub fn meta_description(keyword: &str, intent: SearchIntent) -> String {
    match intent {
        SearchIntent::Informational => format!(
            "深入了解{keyword}，包括基础概念、实用技巧和最佳实践。本指南适合初学者和进阶用户，助您快速掌握{keyword}。"
        ),
        SearchIntent::Transactional => {
            format!("寻找最佳{keyword}解决方案？我们为您详细比较和推荐，帮您做出明智选择。")
        }
        SearchIntent::Navigational => {
            format!("{keyword}官方指南和资源汇总，包含最新信息、使用方法和常见问题解答。")
        }
    }
}

/// The fixed five-section outline: definition, features, usage, best
/// practices, troubleshooting. Three points per section.
pub fn sections(keyword: &str) -> Vec<OutlineSection> {
    vec![
        OutlineSection {
            heading: format!("什么是{keyword}"),
            points: vec![
                format!("{keyword}的基本定义和概念"),
                format!("{keyword}的历史和发展"),
                format!("为什么{keyword}很重要"),
            ],
        },
        OutlineSection {
            heading: format!("{keyword}的核心特性"),
            points: vec![
                "主要功能和优势".to_string(),
                "与其他解决方案的比较".to_string(),
                "适用场景和限制".to_string(),
            ],
        },
        OutlineSection {
            heading: format!("如何使用{keyword}"),
            points: vec![
                "入门准备工作".to_string(),
                "步骤详解".to_string(),
                "常见配置选项".to_string(),
            ],
        },
        OutlineSection {
            heading: format!("{keyword}最佳实践"),
            points: vec![
                "性能优化技巧".to_string(),
                "安全注意事项".to_string(),
                "维护和监控".to_string(),
            ],
        },
        OutlineSection {
            heading: "常见问题和解决方案".to_string(),
            points: vec![
                "典型错误和修复方法".to_string(),
                "故障排除指南".to_string(),
                "专家建议".to_string(),
            ],
        },
    ]
}

/// Keyword concatenated with the eight fixed topic suffixes.
pub fn related_entities(keyword: &str) -> Vec<String> {
    ["教程", "指南", "最佳实践", "工具", "技巧", "优化", "配置", "问题解决"]
        .iter()
        .map(|suffix| format!("{keyword}{suffix}"))
        .collect()
}

/// The five templated FAQ questions.
pub fn faq_questions(keyword: &str) -> Vec<String> {
    vec![
        format!("什么是{keyword}？"),
        format!("{keyword}有什么优势？"),
        format!("如何开始使用{keyword}？"),
        format!("{keyword}适合哪些场景？"),
        format!("{keyword}有哪些常见问题？"),
    ]
}
