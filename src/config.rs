//! Command line configuration.

use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::Rules;

/// Repository the generated document is force pushed to.
pub const DEFAULT_REMOTE: &str = "https://github.com/fz6m/komari.git";

/// Command line configuration for the document build.
#[derive(Debug, Clone, Parser)]
#[command(name = "komari", version, about, long_about = None)]
pub struct BuildConfig {
    /// Link tree JSON
    #[arg(short, long, default_value = "assets/fe.json")]
    pub input: PathBuf,

    /// Markdown template containing the {{content}} placeholder
    #[arg(short, long, default_value = "templates/README.md")]
    pub template: PathBuf,

    /// Output markdown file
    #[arg(short, long, default_value = "KOMARI.md")]
    pub output: PathBuf,

    /// JSON file overriding the ordering and filter tables
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl BuildConfig {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input, template or rules file does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Input file does not exist: {}", self.input.display());
        }
        if !self.template.exists() {
            bail!("Template file does not exist: {}", self.template.display());
        }
        if let Some(rules) = &self.rules
            && !rules.exists()
        {
            bail!("Rules file does not exist: {}", rules.display());
        }

        Ok(())
    }

    /// Rule tables from the `--rules` file, or the built in defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the rules file cannot be read or parsed.
    pub fn load_rules(&self) -> Result<Rules> {
        match &self.rules {
            Some(path) => Rules::load(path),
            None => Ok(Rules::default()),
        }
    }
}

/// Command line configuration for deployment.
#[derive(Debug, Clone, Parser)]
#[command(name = "komari-deploy", version, about, long_about = None)]
pub struct DeployConfig {
    /// Working tree to publish
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,

    /// Remote repository URL registered as origin
    #[arg(short, long, default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// Branch created and force pushed
    #[arg(short, long, default_value = "main")]
    pub branch: String,

    /// Commit message
    #[arg(short, long, default_value = "deploy")]
    pub message: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl DeployConfig {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the working tree does not exist or the branch is empty.
    pub fn validate(&self) -> Result<()> {
        if !self.dir.is_dir() {
            bail!("Deploy directory does not exist: {}", self.dir.display());
        }
        if self.branch.trim().is_empty() {
            bail!("Branch name must not be empty");
        }

        Ok(())
    }
}
