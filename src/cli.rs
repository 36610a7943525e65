use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::config::load_locate_options;
use crate::discovery::LocateOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "vows")]
#[command(about = "Discover vows test files and scaffold new ones", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List files whose name matches a shell-glob pattern
    Locate(LocateArgs),

    /// Print a boilerplate vows test file to stdout
    Template(TemplateArgs),
}

#[derive(clap::Args, Debug)]
pub struct LocateArgs {
    /// Glob matched against file names, e.g. '*_vows.py'
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Directory to search (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Only look directly inside the root directory
    #[arg(long)]
    pub no_recursive: bool,

    /// Discovery options file (JSON or YAML); flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub struct TemplateArgs {
    /// Version stamped into the header (defaults to this tool's version)
    #[arg(long, value_name = "VERSION")]
    pub version_string: Option<String>,
}

impl LocateArgs {
    /// Merges the optional config file with the command-line flags.
    pub fn to_options(&self) -> Result<LocateOptions> {
        let base = match &self.config {
            Some(path) => {
                validate_path(path)?;
                Some(load_locate_options(path).context("Invalid discovery config")?)
            }
            None => None,
        };

        let mut options = match (base, &self.pattern) {
            (Some(base), Some(pattern)) => LocateOptions {
                pattern: pattern.clone(),
                ..base
            },
            (Some(base), None) => base,
            (None, Some(pattern)) => LocateOptions::new(pattern.clone()),
            (None, None) => anyhow::bail!("A pattern is required, either as an argument or in --config"),
        };

        if let Some(root) = &self.root {
            options.root = Some(root.clone());
        }
        if self.no_recursive {
            options.recursive = false;
        }
        Ok(options)
    }
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }

    std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    Ok(())
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
