use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitExtractError {
    #[error("Not a git repository: {path}")]
    NotGitRepository { path: PathBuf },

    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Git binary not found in {searched} or on PATH")]
    GitBinaryNotFound { searched: String },

    #[error("Git command failed with exit code {exit_code}: {command}\n{stderr}")]
    ExecutionFailure {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("Malformed log record in block {block}: {reason}\n{content}")]
    MalformedLogRecord {
        block: usize,
        reason: String,
        content: String,
    },

    #[error("Invalid branch pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GitExtractError>;
