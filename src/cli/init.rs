//! Project initialization.
//!
//! Scaffolds a new site project: directory tree, `k2.config.yaml`, a
//! sample post, and a `package.json` wired to the site builder.

use crate::{log, utils::date};
use anyhow::{Context, Result, bail};
use serde_json::json;
use std::{fs, path::Path};

/// Directories every new project starts with.
const PROJECT_DIRS: [&str; 9] = [
    "src/components",
    "src/layouts",
    "src/pages",
    "src/lib",
    "src/styles",
    "content/posts",
    "content/pages",
    "public/images",
    ".github/workflows",
];

pub struct InitOptions {
    pub name: String,
    pub domain: String,
    pub language: String,
}

/// Create a new project directory under the current working directory.
pub fn init_project(options: &InitOptions) -> Result<()> {
    init_at(Path::new(&options.name), options)
}

fn init_at(project_path: &Path, options: &InitOptions) -> Result<()> {
    log!("init"; "initializing project: {}", options.name);

    if project_path.exists() {
        bail!("directory '{}' already exists", options.name);
    }

    create_structure(project_path)?;
    write_config(project_path, options)?;
    write_sample_post(project_path)?;
    write_package_json(project_path, &options.name)?;

    log!("init"; "project {} initialized", options.name);
    log!("init"; "next steps: cd {} && pnpm install && k2site generate -k <keyword>", options.name);
    Ok(())
}

fn create_structure(root: &Path) -> Result<()> {
    for dir in PROJECT_DIRS {
        let path = root.join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory '{}'", path.display()))?;
    }
    Ok(())
}

fn write_config(root: &Path, options: &InitOptions) -> Result<()> {
    let config = config_template(options);
    fs::write(root.join(crate::config::CONFIG_FILE), config).context("Failed to write config")
}

fn config_template(options: &InitOptions) -> String {
    let InitOptions { name, domain, language } = options;
    let handle = name.to_lowercase().replace(char::is_whitespace, "-");

    format!(
        r##"site:
  name: "{name}"
  domain: "{domain}"
  language: "{language}"
  author:
    name: "K2Site Generator"
    url: "/about"
  themeColor: "#0ea5e9"

seo:
  brand: "{name}"
  ogDefaultImage: "/og-default.jpg"
  twitterHandle: "@{handle}"

monetization:
  adsense:
    enabled: false
    clientId: ""
    slots:
      article_top: ""
      article_middle: ""
      sidebar_sticky: ""
  consent:
    mode: "basic"

content:
  minWords: 1200
  addTOC: true
  addFAQ: true
  images:
    source: "unsplash"
    numPerPost: 2

build:
  target: "cloudflare"
"##
    )
}

fn write_sample_post(root: &Path) -> Result<()> {
    let today = date::today_iso();
    let post = format!(
        r#"---
title: "欢迎使用 K2Site"
description: "这是您的第一篇文章，介绍如何使用 K2Site 快速生成内容网站"
slug: "welcome-to-k2site"
date: "{today}"
category: "教程"
tags: ["K2Site", "入门指南", "网站生成"]
---

# 欢迎使用 K2Site

恭喜您成功创建了第一个 K2Site 项目！这是一个功能强大的内容生成平台，可以帮助您快速创建SEO优化的网站。

## 快速开始

1. **生成内容**: 使用 `k2site generate` 命令从关键词生成文章
2. **预览网站**: 使用 `k2site dev` 启动开发服务器
3. **构建部署**: 使用 `k2site build` 和 `k2site deploy` 发布网站

## 下一步

编辑 `k2.config.yaml` 文件来自定义您的网站设置，然后开始生成内容吧！
"#
    );

    fs::write(root.join("content/posts/welcome.mdx"), post).context("Failed to write sample post")
}

fn write_package_json(root: &Path, name: &str) -> Result<()> {
    let package = json!({
        "name": name.to_lowercase().replace(char::is_whitespace, "-"),
        "version": "1.0.0",
        "type": "module",
        "scripts": {
            "dev": "astro dev",
            "build": "astro build",
            "preview": "astro preview",
            "k2site": "k2site"
        },
        "dependencies": {
            "@astrojs/mdx": "^3.0.0",
            "@astrojs/sitemap": "^3.1.4",
            "@astrojs/tailwind": "^5.1.0",
            "astro": "^4.11.0",
            "k2site": "^1.0.0"
        },
        "devDependencies": {
            "typescript": "^5.5.2"
        }
    });

    let content = serde_json::to_string_pretty(&package)?;
    fs::write(root.join("package.json"), content).context("Failed to write package.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::K2Config;
    use tempfile::TempDir;

    fn options(name: &str) -> InitOptions {
        InitOptions {
            name: name.to_string(),
            domain: "https://demo.example".to_string(),
            language: "zh-CN".to_string(),
        }
    }

    #[test]
    fn test_init_creates_structure() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("site");

        create_structure(&root).unwrap();
        write_config(&root, &options("site")).unwrap();
        write_sample_post(&root).unwrap();
        write_package_json(&root, "site").unwrap();

        for dir in PROJECT_DIRS {
            assert!(root.join(dir).is_dir(), "missing {dir}");
        }
        assert!(root.join("k2.config.yaml").is_file());
        assert!(root.join("content/posts/welcome.mdx").is_file());
        assert!(root.join("package.json").is_file());
    }

    #[test]
    fn test_config_template_parses() {
        let template = config_template(&options("My Site"));
        let config = K2Config::from_str(&template).unwrap();

        assert_eq!(config.site.name, "My Site");
        assert_eq!(config.site.domain, "https://demo.example");
        assert_eq!(config.seo.twitter_handle, "@my-site");
        assert_eq!(config.content.min_words, 1200);
        assert!(!config.monetization.adsense.enabled);
    }

    #[test]
    fn test_sample_post_has_valid_frontmatter() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("site");
        fs::create_dir_all(root.join("content/posts")).unwrap();
        write_sample_post(&root).unwrap();

        let source = fs::read_to_string(root.join("content/posts/welcome.mdx")).unwrap();
        let (fm, _) = crate::corpus::extract_frontmatter(&source).unwrap().unwrap();
        assert_eq!(fm.slug, "welcome-to-k2site");
        assert_eq!(fm.category, "教程");
    }

    #[test]
    fn test_existing_directory_rejected() {
        let temp = TempDir::new().unwrap();
        let taken = temp.path().join("taken");
        fs::create_dir(&taken).unwrap();

        assert!(init_at(&taken, &options("taken")).is_err());
    }

    #[test]
    fn test_init_at_full_run() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("fresh");

        init_at(&root, &options("fresh")).unwrap();
        assert!(root.join("k2.config.yaml").is_file());
    }

    #[test]
    fn test_package_json_is_valid() {
        let temp = TempDir::new().unwrap();
        write_package_json(temp.path(), "My K2 Site").unwrap();

        let content = fs::read_to_string(temp.path().join("package.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["name"], "my-k2-site");
        assert_eq!(value["scripts"]["build"], "astro build");
    }
}
