//! Dev and preview server commands.
//!
//! Both are thin passthroughs to the site builder's own servers, with
//! stdio inherited so their output and key handling work as usual. The
//! child's exit code becomes our exit code.

use crate::{log, utils::exec::Cmd};
use anyhow::{Result, bail};
use std::path::Path;

pub fn dev_server(port: u16, host: &str) -> Result<()> {
    log!("dev"; "starting dev server at http://{host}:{port}");

    run_passthrough("dev", port, host)
}

pub fn preview_server(port: u16, host: &str) -> Result<()> {
    ensure_built(Path::new("dist"))?;

    log!("preview"; "previewing build at http://{host}:{port}");

    run_passthrough("preview", port, host)
}

fn run_passthrough(subcommand: &str, port: u16, host: &str) -> Result<()> {
    let status = Cmd::new("npx")
        .args(["astro", subcommand, "--port"])
        .arg(port.to_string())
        .args(["--host", host])
        .status()?;

    // Mirror the server's exit code so wrappers see Ctrl+C etc.
    std::process::exit(status.code().unwrap_or(0));
}

fn ensure_built(dist: &Path) -> Result<()> {
    if !dist.exists() {
        bail!("no build output found; run `k2site build` first");
    }
    Ok(())
}
