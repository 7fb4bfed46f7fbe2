//! Deploy command.
//!
//! Ships `dist/` to a hosting platform through its official CLI. The
//! target comes from the `--target` flag, falling back to the config's
//! `build.target`.

use crate::{
    config::{BuildTarget, K2Config},
    log,
    utils::exec::Cmd,
};
use anyhow::{Result, anyhow, bail};
use std::path::Path;

pub struct DeployOptions {
    pub target: Option<String>,
    pub token: Option<String>,
}

pub fn deploy_site(options: &DeployOptions, config: &K2Config) -> Result<()> {
    let target = resolve_target(options.target.as_deref(), config)?;

    if !Path::new("dist").exists() {
        bail!("no build output found; run `k2site build` first");
    }

    log!("deploy"; "deploying to {}", target.as_str());

    match target {
        BuildTarget::Vercel => deploy_vercel(options.token.as_deref())?,
        BuildTarget::Cloudflare => deploy_cloudflare(options.token.as_deref())?,
    }

    log!("deploy"; "deploy complete");
    Ok(())
}

fn resolve_target(flag: Option<&str>, config: &K2Config) -> Result<BuildTarget> {
    match flag {
        Some(name) => {
            BuildTarget::from_name(name).ok_or_else(|| anyhow!("unsupported deploy target: {name}"))
        }
        None => Ok(config.build.target),
    }
}

fn deploy_vercel(token: Option<&str>) -> Result<()> {
    let mut cmd = Cmd::new("npx").args(["vercel", "--prod"]);
    if let Some(token) = token {
        cmd = cmd.args(["--token", token]);
    }
    cmd.run()?;
    Ok(())
}

fn deploy_cloudflare(token: Option<&str>) -> Result<()> {
    let mut cmd = Cmd::new("npx").args(["wrangler", "pages", "deploy", "dist"]);
    if let Some(token) = token {
        cmd = cmd.env("CLOUDFLARE_API_TOKEN", token);
    }
    cmd.run()?;
    Ok(())
}
