//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Keyword-to-website static site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(name = "k2site", version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: k2.config.yaml)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new site project
    #[command(visible_alias = "i")]
    Init {
        /// Project name (also the directory to create)
        #[arg(short, long, default_value = "my-k2site")]
        name: String,

        /// Site domain
        #[arg(short, long, default_value = "https://example.com")]
        domain: String,

        /// Site language
        #[arg(short, long, default_value = "zh-CN")]
        language: String,
    },

    /// Generate articles from keywords
    #[command(visible_alias = "g")]
    Generate {
        /// Keywords to generate articles for
        #[arg(short, long, required = true, num_args = 1..)]
        keywords: Vec<String>,

        /// Category assigned to generated articles
        #[arg(short, long, default_value = "技术教程")]
        category: String,

        /// Maximum number of articles to generate
        #[arg(short, long, default_value_t = 5)]
        number: usize,

        /// RNG seed for reproducible title selection
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Build the site for production
    #[command(visible_alias = "b")]
    Build {
        /// Clean build caches before building
        #[arg(long)]
        clean: bool,

        /// Stream the site builder's own output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Start the development server
    Dev {
        /// Port number to listen on
        #[arg(short, long, default_value_t = 4321)]
        port: u16,

        /// Host to bind
        #[arg(long, default_value = "localhost")]
        host: String,
    },

    /// Preview the built site
    #[command(visible_alias = "p")]
    Preview {
        /// Port number to listen on
        #[arg(short, long, default_value_t = 4321)]
        port: u16,

        /// Host to bind
        #[arg(long, default_value = "localhost")]
        host: String,
    },

    /// Deploy the built site to a hosting platform
    #[command(visible_alias = "d")]
    Deploy {
        /// Deploy target (vercel, cloudflare); defaults to the config value
        #[arg(short, long)]
        target: Option<String>,

        /// API token passed through to the deploy CLI
        #[arg(long)]
        token: Option<String>,
    },

    /// Generate sitemap.xml, robots.txt and rss.xml
    Sitemap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_args() {
        let cli = Cli::parse_from(["k2site", "generate", "-k", "Rust教程", "Docker", "-n", "2"]);
        match cli.command {
            Commands::Generate { keywords, number, category, seed } => {
                assert_eq!(keywords, vec!["Rust教程", "Docker"]);
                assert_eq!(number, 2);
                assert_eq!(category, "技术教程");
                assert!(seed.is_none());
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_aliases() {
        let cli = Cli::parse_from(["k2site", "b"]);
        assert!(matches!(cli.command, Commands::Build { .. }));

        let cli = Cli::parse_from(["k2site", "g", "-k", "kw"]);
        assert!(matches!(cli.command, Commands::Generate { .. }));
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["k2site", "-C", "custom.yaml", "sitemap"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.yaml")));
    }
}
