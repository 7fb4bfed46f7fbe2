//! Markdown body assembly.
//!
//! Concatenates, in fixed order: introduction, optional TOC, one prose
//! block per outline section, conclusion, optional FAQ. All text is
//! templated; the output for a given outline is fully deterministic.

use super::outline::{ContentOutline, OutlineSection};
use crate::utils::slug::slugify;
use std::fmt::Write;

/// Assemble the full article body.
pub(super) fn assemble(
    outline: &ContentOutline,
    keyword: &str,
    add_toc: bool,
    add_faq: bool,
) -> String {
    let mut content = introduction(keyword, outline);

    if add_toc {
        content.push_str(&table_of_contents(outline));
    }
    for section in &outline.sections {
        content.push_str(&section_content(section, keyword));
    }
    content.push_str(&conclusion(keyword, outline));
    if add_faq {
        content.push_str(&faq(&outline.faq_questions, keyword));
    }

    content
}

fn introduction(keyword: &str, outline: &ContentOutline) -> String {
    let headings = outline
        .sections
        .iter()
        .map(|section| format!("- {}", section.heading))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n在当今数字化时代，{keyword}已经成为不可或缺的重要工具。\
        无论您是初学者还是有经验的用户，本文都将为您提供关于{keyword}的全面指南。\n\n\
        我们将深入探讨{keyword}的核心概念、实用技巧和最佳实践，帮助您充分发挥其潜力。\
        通过本文，您将学会：\n\n{headings}\n\n让我们开始这个精彩的学习之旅吧！\n\n"
    )
}

fn table_of_contents(outline: &ContentOutline) -> String {
    let mut toc = String::from("\n## 目录\n\n");
    for (index, section) in outline.sections.iter().enumerate() {
        let _ = writeln!(
            toc,
            "{}. [{}](#{})",
            index + 1,
            section.heading,
            slugify(&section.heading)
        );
    }
    toc.push('\n');
    toc
}

fn section_content(section: &OutlineSection, keyword: &str) -> String {
    let heading = &section.heading;
    let mut content = format!("\n## {heading} {{#{}}}\n\n", slugify(heading));

    let _ = write!(
        content,
        "{heading}是理解{keyword}的关键部分。在这一节中，我们将详细介绍相关概念和实践方法。\n\n"
    );

    for (index, point) in section.points.iter().enumerate() {
        let _ = write!(
            content,
            "### {}. {point}\n\n\
            {point}涉及多个重要方面。让我们逐一分析：\n\n\
            - **核心要点**：这里是关键信息的详细说明\n\
            - **实际应用**：在实际场景中的具体运用方法\n\
            - **注意事项**：需要特别关注的重要细节\n\n",
            index + 1
        );
    }

    let _ = write!(
        content,
        "通过以上内容，您应该对{heading}有了深入的理解。接下来让我们继续下一个重要主题。\n\n"
    );

    content
}

fn conclusion(keyword: &str, outline: &ContentOutline) -> String {
    let recap = outline
        .sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            format!("{}. **{}**：掌握了相关的核心概念和实践方法", index + 1, section.heading)
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n## 总结\n\n\
        通过本文的详细介绍，我们全面探讨了{keyword}的各个方面。\
        从基础概念到高级应用，从理论知识到实践技巧，相信您已经对{keyword}有了深入的理解。\n\n\
        ### 关键要点回顾\n\n{recap}\n\n\
        ### 下一步行动\n\n\
        现在您已经具备了使用{keyword}的基础知识，建议您：\n\n\
        1. **实践应用**：将所学知识应用到实际项目中\n\
        2. **持续学习**：关注{keyword}的最新发展和更新\n\
        3. **分享交流**：与其他用户分享经验和心得\n\
        4. **深入研究**：探索更高级的功能和技巧\n\n\
        记住，掌握{keyword}是一个持续的过程。\
        保持学习的热情，不断实践和改进，您将在这个领域取得更大的成功。\n\n"
    )
}

fn faq(questions: &[String], keyword: &str) -> String {
    let mut faq = String::from("\n## 常见问题 FAQ\n\n");
    for question in questions {
        let _ = write!(
            faq,
            "### {question}\n\n\
            这是关于{keyword}的一个常见问题。简单来说，答案包含以下几个要点：\n\n\
            - 核心概念的解释\n\
            - 实际应用的建议\n\
            - 相关的注意事项\n\n"
        );
    }
    faq
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::outline;
    use crate::composer::intent::SearchIntent;

    fn sample_outline() -> ContentOutline {
        ContentOutline {
            title: outline::title("Docker", 0),
            meta_description: outline::meta_description("Docker", SearchIntent::Informational),
            sections: outline::sections("Docker"),
            related_entities: outline::related_entities("Docker"),
            faq_questions: outline::faq_questions("Docker"),
        }
    }

    #[test]
    fn test_assemble_order() {
        let body = assemble(&sample_outline(), "Docker", true, true);

        let toc = body.find("## 目录").unwrap();
        let first_section = body.find("## 什么是Docker").unwrap();
        let conclusion = body.find("## 总结").unwrap();
        let faq = body.find("## 常见问题 FAQ").unwrap();

        assert!(toc < first_section);
        assert!(first_section < conclusion);
        assert!(conclusion < faq);
    }

    #[test]
    fn test_toc_and_faq_are_optional() {
        let body = assemble(&sample_outline(), "Docker", false, false);
        assert!(!body.contains("## 目录"));
        assert!(!body.contains("## 常见问题 FAQ"));
        assert!(body.contains("## 总结"));
    }

    #[test]
    fn test_section_headings_carry_anchor_ids() {
        let body = assemble(&sample_outline(), "Docker", true, false);
        assert!(body.contains("## 如何使用Docker {#"));
    }

    #[test]
    fn test_deterministic() {
        let outline = sample_outline();
        let a = assemble(&outline, "Docker", true, true);
        let b = assemble(&outline, "Docker", true, true);
        assert_eq!(a, b);
    }
}
