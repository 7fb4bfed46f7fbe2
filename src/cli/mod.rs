//! Command-line interface module.

mod args;
pub mod build;
pub mod deploy;
pub mod generate;
pub mod init;
pub mod serve;
pub mod sitemap;

pub use args::{Cli, Commands};
