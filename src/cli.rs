use crate::commit::Commit;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// One line per record
    Text,
    /// JSON array of records
    Json,
    /// Commits re-rendered in `git log --pretty=raw` form
    Raw,
}

#[derive(Parser, Debug)]
#[command(
    name = "git-extract",
    version,
    about = "Extract commits and branch names from a git repository",
    long_about = None
)]
pub struct Args {
    /// Repository directory (defaults to the current directory)
    #[arg(short = 'C', long = "repo", value_name = "DIR", env = "GIT_EXTRACT_REPO")]
    pub repo_path: Option<PathBuf>,

    /// Directory searched for the git binary before /bin and /usr/bin
    #[arg(long = "binary-path", value_name = "DIR", env = "GIT_EXTRACT_BINARY_PATH")]
    pub binary_path: Option<PathBuf>,

    /// Config file (defaults to <config dir>/git-extract/config.toml)
    #[arg(long = "config", value_name = "FILE", env = "GIT_EXTRACT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging
    #[arg(long = "debug")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// List commits, newest first
    Commits {
        /// Revision range, e.g. `v1.0..main` (whole history of HEAD when omitted)
        #[arg(value_name = "RANGE", trailing_var_arg = true, allow_hyphen_values = true)]
        range: Vec<String>,
    },
    /// List local and remote-tracking branches
    Branches {
        /// Keep only branches matching this regular expression
        #[arg(long, value_name = "REGEX")]
        include: Option<String>,

        /// Drop branches matching this regular expression
        #[arg(long, value_name = "REGEX")]
        exclude: Option<String>,
    },
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if self.format == OutputFormat::Raw && !matches!(self.command, Command::Commits { .. }) {
            return Err("--format raw is only available for commits".to_string());
        }

        Ok(())
    }
}

pub fn render_commits(commits: &[Commit], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(commits),
        OutputFormat::Raw => Ok(commits
            .iter()
            .map(Commit::to_raw)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Text => Ok(commits
            .iter()
            .map(|commit| {
                let date = commit
                    .author
                    .datetime()
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default();
                format!(
                    "{} {} {} {}\n",
                    commit.short_hash(),
                    date,
                    commit.author.name,
                    commit.subject()
                )
            })
            .collect()),
    }
}

pub fn render_branches(branches: &[String], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(branches),
        OutputFormat::Text | OutputFormat::Raw => Ok(branches
            .iter()
            .map(|name| format!("{}\n", name))
            .collect()),
    }
}
