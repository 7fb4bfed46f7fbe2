//! Production build command.
//!
//! Refreshes the SEO artifacts, runs the external site builder, and
//! sanity-checks the output directory.

use crate::{config::K2Config, log, utils::exec::Cmd};
use anyhow::{Result, bail};
use std::{fs, path::Path};

/// Build cache directories removed by `--clean`.
const CACHE_DIRS: [&str; 3] = ["dist", ".astro", "node_modules/.astro"];

/// Files expected in the build output. Missing ones are warnings, not
/// errors; themes may legitimately rename them.
const EXPECTED_OUTPUT: [&str; 3] = ["index.html", "sitemap.xml", "robots.txt"];

pub struct BuildOptions {
    pub clean: bool,
    pub verbose: bool,
}

pub fn build_site(options: &BuildOptions, config: &K2Config) -> Result<()> {
    if options.clean {
        clean_caches()?;
    }

    log!("build"; "generating SEO files");
    super::sitemap::generate_seo_files(config)?;

    log!("build"; "running site builder");
    let cmd = Cmd::new("npx").args(["astro", "build"]);
    let cmd = if options.verbose { cmd } else { cmd.captured() };
    cmd.run()?;

    validate_output(Path::new("dist"))?;
    log!("build"; "site build complete, output in dist/");
    Ok(())
}

fn clean_caches() -> Result<()> {
    for dir in CACHE_DIRS {
        let path = Path::new(dir);
        if path.exists() {
            fs::remove_dir_all(path)?;
            log!("build"; "removed {dir}");
        }
    }
    Ok(())
}

fn validate_output(dist: &Path) -> Result<()> {
    if !dist.exists() {
        bail!("build output directory '{}' does not exist", dist.display());
    }

    let missing: Vec<&str> = EXPECTED_OUTPUT
        .iter()
        .filter(|file| !dist.join(file).exists())
        .copied()
        .collect();

    if !missing.is_empty() {
        log!("warning"; "missing from build output: {}", missing.join(", "));
    }
    Ok(())
}
