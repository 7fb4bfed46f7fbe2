//! K2Site - keyword-driven static site generator.

#![allow(dead_code)]

mod cli;
mod composer;
mod config;
mod corpus;
mod generator;
mod logger;
mod seo;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{
    Cli, Commands,
    build::BuildOptions,
    deploy::DeployOptions,
    generate::GenerateOptions,
    init::InitOptions,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // Load once; every command receives the same snapshot
    let config = config::load(cli.config.as_deref());

    match cli.command {
        Commands::Init { name, domain, language } => {
            cli::init::init_project(&InitOptions { name, domain, language })
        }
        Commands::Generate { keywords, category, number, seed } => {
            cli::generate::generate_content(
                &GenerateOptions { keywords, category, number, seed },
                &config,
            )
        }
        Commands::Build { clean, verbose } => {
            logger::set_verbose(verbose);
            cli::build::build_site(&BuildOptions { clean, verbose }, &config)
        }
        Commands::Dev { port, host } => cli::serve::dev_server(port, &host),
        Commands::Preview { port, host } => cli::serve::preview_server(port, &host),
        Commands::Deploy { target, token } => {
            cli::deploy::deploy_site(&DeployOptions { target, token }, &config)
        }
        Commands::Sitemap => cli::sitemap::run(&config),
    }
}
