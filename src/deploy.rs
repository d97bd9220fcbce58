//! Force push deployment of the working tree.
//!
//! Deployment throws away any existing history: the `.git` directory is
//! removed, a fresh repository is initialized, everything is committed
//! once and force pushed to the configured remote.

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::DeployConfig;

/// One external command in the deploy sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    name: &'static str,
    args: Vec<String>,
}

impl Step {
    fn git(name: &'static str, args: &[&str]) -> Self {
        Self {
            name,
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Short step name used in logs and errors.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Arguments passed to `git`.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Runs the deploy sequence against a working tree.
pub struct Deployer {
    dir: PathBuf,
    remote: String,
    branch: String,
    message: String,
    envs: Vec<(String, String)>,
}

impl Deployer {
    /// Creates deployer from command line configuration.
    pub fn new(config: &DeployConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            remote: config.remote.clone(),
            branch: config.branch.clone(),
            message: config.message.clone(),
            envs: Vec::new(),
        }
    }

    /// Adds an environment variable to every git invocation.
    #[cfg(test)]
    fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Git commands executed after the metadata directory is removed.
    pub fn steps(&self) -> Vec<Step> {
        let init_branch = format!("--initial-branch={}", self.branch);
        vec![
            Step::git("init", &["init", &init_branch]),
            Step::git("remote", &["remote", "add", "origin", &self.remote]),
            Step::git("add", &["add", "."]),
            Step::git("commit", &["commit", "-m", &self.message]),
            Step::git("push", &["push", "-f", "origin", &self.branch]),
        ]
    }

    /// Removes the repository metadata, then runs every step in order.
    ///
    /// Stops at the first failing step. Nothing is rolled back, so a failure
    /// after metadata removal leaves the tree without its old history.
    ///
    /// # Errors
    ///
    /// Returns error if metadata removal fails or any git command exits
    /// unsuccessfully.
    pub fn run(&self) -> Result<()> {
        remove_git_dir(&self.dir)?;

        for step in self.steps() {
            self.run_step(&step)?;
            if step.name() == "commit" {
                self.log_head();
            }
        }

        tracing::info!(remote = %self.remote, branch = %self.branch, "Deployed");
        Ok(())
    }

    fn run_step(&self, step: &Step) -> Result<()> {
        tracing::debug!(step = step.name(), args = ?step.args(), "Running git");

        let output = Command::new("git")
            .args(step.args())
            .envs(self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .current_dir(&self.dir)
            .output()
            .with_context(|| format!("Failed to spawn git for step '{}'", step.name()))?;

        if !output.status.success() {
            bail!(
                "Git {} failed ({}): {}",
                step.name(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(())
    }

    fn log_head(&self) {
        match head_commit(&self.dir) {
            Ok(id) => tracing::info!(commit = %id, "Committed working tree"),
            Err(e) => tracing::warn!("Failed to read HEAD after commit: {:#}", e),
        }
    }
}

/// Deletes `<dir>/.git`. A missing directory is not an error.
///
/// # Errors
///
/// Returns error if the directory exists but cannot be removed.
pub fn remove_git_dir(dir: &Path) -> Result<()> {
    let git_dir = dir.join(".git");
    match fs::remove_dir_all(&git_dir) {
        Ok(()) => {
            tracing::debug!(path = %git_dir.display(), "Removed repository metadata");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e)
            .with_context(|| format!("Failed to remove {}", git_dir.display())),
    }
}

/// Hex id of the commit HEAD points at.
///
/// # Errors
///
/// Returns error if the repository cannot be opened or has no commits.
pub fn head_commit(dir: impl AsRef<Path>) -> Result<String> {
    let repo = gix::open(dir.as_ref())
        .with_context(|| format!("Failed to open repository at {}", dir.as_ref().display()))?;
    let id = repo.head_id().context("Failed to read HEAD commit")?;
    Ok(id.detach().to_hex().to_string())
}
