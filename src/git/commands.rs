use crate::error::{GitExtractError, Result};
use crate::git::binary::{self, BinaryLocation};
use std::env;
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured result of one git invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes a git command in a working directory.
///
/// Implementations report a non-zero exit through `CommandOutput::exit_code`;
/// `Err` is reserved for commands that could not be run at all.
pub trait CommandRunner {
    fn execute(&self, tokens: &[String], directory: &Path) -> Result<CommandOutput>;
}

/// Splits a command such as `log main..dev --pretty=raw` into its tokens
pub fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(str::to_string).collect()
}

/// Runs the real git binary
#[derive(Debug, Clone)]
pub struct GitCommandRunner {
    location: BinaryLocation,
}

impl GitCommandRunner {
    pub fn new(location: BinaryLocation) -> Self {
        Self { location }
    }

    /// Locates git, searching `binary_path` first when given
    pub fn discover(binary_path: Option<&Path>) -> Result<Self> {
        let location = binary::locate_git(binary_path)?;
        if location.is_environment_dependent() {
            log::warn!(
                "git binary {} depends on current environment variables",
                location.binary().display()
            );
        }
        Ok(Self::new(location))
    }

    pub fn location(&self) -> &BinaryLocation {
        &self.location
    }
}

impl CommandRunner for GitCommandRunner {
    fn execute(&self, tokens: &[String], directory: &Path) -> Result<CommandOutput> {
        let command_line = format!("git {}", tokens.join(" "));

        let mut cmd = Command::new(self.location.binary());
        cmd.arg("--no-pager")
            .arg("-C")
            .arg(directory)
            .args(tokens)
            .stdin(Stdio::null());

        if let BinaryLocation::Sanitized { search_path, .. } = &self.location {
            let path = env::join_paths(search_path).map_err(|e| GitExtractError::ExecutionFailure {
                command: command_line.clone(),
                exit_code: -1,
                stderr: e.to_string(),
            })?;
            cmd.env_clear().env("PATH", path);
        }

        log::debug!("Running {} in {}", command_line, directory.display());

        let output = cmd.output().map_err(|e| GitExtractError::ExecutionFailure {
            command: command_line.clone(),
            exit_code: -1,
            stderr: e.to_string(),
        })?;

        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}
