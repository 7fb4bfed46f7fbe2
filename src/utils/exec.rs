//! External command execution utilities.
//!
//! Provides a Builder-based API for running the external site builder and
//! deploy CLIs. Subprocess stdio is inherited by default so tools like
//! `astro dev` stream their own output; `captured()` switches to piped
//! output for quiet invocations.
//!
//! # Examples
//!
//! ```ignore
//! use crate::utils::exec::Cmd;
//!
//! // Dev server, streaming to the terminal
//! Cmd::new("npx").args(["astro", "dev", "--port", "4321"]).run()?;
//!
//! // Deploy from dist/
//! Cmd::new("npx")
//!     .args(["wrangler", "pages", "deploy", "."])
//!     .cwd(dist_dir)
//!     .run()?;
//! ```

use anyhow::{Context, Result, bail};
use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
};

/// Command builder for external process execution.
#[derive(Default)]
pub struct Cmd {
    program: OsString,
    args: Vec<OsString>,
    envs: Vec<(OsString, OsString)>,
    cwd: Option<PathBuf>,
    capture: bool,
}

impl Cmd {
    /// Create a new command builder.
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            ..Default::default()
        }
    }

    /// Add a single argument. Empty arguments are dropped.
    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        let arg = arg.as_ref();
        if !arg.is_empty() {
            self.args.push(arg.to_owned());
        }
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            self = self.arg(arg);
        }
        self
    }

    /// Set working directory.
    pub fn cwd<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.cwd = Some(dir.as_ref().to_owned());
        self
    }

    /// Set an environment variable for the child process.
    pub fn env<K: AsRef<OsStr>, V: AsRef<OsStr>>(mut self, key: K, value: V) -> Self {
        self.envs.push((key.as_ref().to_owned(), value.as_ref().to_owned()));
        self
    }

    /// Capture output instead of inheriting the terminal.
    pub fn captured(mut self) -> Self {
        self.capture = true;
        self
    }

    /// Get the program name for error messages.
    fn program_name(&self) -> String {
        self.program.to_string_lossy().to_string()
    }

    /// Execute the command, failing on non-zero exit.
    pub fn run(self) -> Result<ExitStatus> {
        let name = self.program_name();
        let status = self.spawn_and_wait(&name)?;

        if !status.success() {
            bail!("Command `{name}` failed with {status}");
        }
        Ok(status)
    }

    /// Execute the command and return its exit status without failing.
    ///
    /// Used by passthrough commands (dev/preview) where the caller maps
    /// the status to its own process exit code.
    pub fn status(self) -> Result<ExitStatus> {
        let name = self.program_name();
        self.spawn_and_wait(&name)
    }

    fn spawn_and_wait(self, name: &str) -> Result<ExitStatus> {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);

        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        if self.capture {
            cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
            let output = cmd
                .output()
                .with_context(|| format!("Failed to execute `{name}`"))?;
            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                let stdout = String::from_utf8_lossy(&output.stdout);
                let detail = if stderr.trim().is_empty() {
                    stdout
                } else {
                    stderr
                };
                bail!(
                    "Command `{name}` failed with {}\n{}",
                    output.status,
                    detail.trim()
                );
            }
            return Ok(output.status);
        }

        cmd.status()
            .with_context(|| format!("Failed to execute `{name}`"))
    }
}
