use crate::error::{GitExtractError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Directories searched for git before falling back to the caller's `PATH`
pub const COMMON_BINARY_PATHS: [&str; 2] = ["/bin", "/usr/bin"];

#[cfg(windows)]
const GIT_BINARY: &str = "git.exe";
#[cfg(not(windows))]
const GIT_BINARY: &str = "git";

/// Where the git executable was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinaryLocation {
    /// Found in a known directory; commands run with `PATH` limited to `search_path`
    Sanitized {
        binary: PathBuf,
        search_path: Vec<PathBuf>,
    },
    /// Only reachable through the caller's `PATH`, so results depend on their environment
    EnvironmentDependent { binary: PathBuf },
}

impl BinaryLocation {
    pub fn binary(&self) -> &Path {
        match self {
            BinaryLocation::Sanitized { binary, .. } => binary,
            BinaryLocation::EnvironmentDependent { binary } => binary,
        }
    }

    pub fn is_environment_dependent(&self) -> bool {
        matches!(self, BinaryLocation::EnvironmentDependent { .. })
    }
}

/// Directories to search, with `binary_path` (if any) ahead of the common ones
pub fn search_directories(binary_path: Option<&Path>) -> Result<Vec<PathBuf>> {
    let mut directories: Vec<PathBuf> = COMMON_BINARY_PATHS.iter().map(PathBuf::from).collect();

    if let Some(path) = binary_path {
        if !path.is_dir() {
            return Err(GitExtractError::NotADirectory {
                path: path.to_path_buf(),
            });
        }
        directories.insert(0, path.to_path_buf());
    }

    Ok(directories)
}

/// Finds the git executable
pub fn locate_git(binary_path: Option<&Path>) -> Result<BinaryLocation> {
    let search_path = search_directories(binary_path)?;

    if let Some(binary) = find_in(&search_path) {
        log::debug!("Using git binary at {}", binary.display());
        return Ok(BinaryLocation::Sanitized {
            binary,
            search_path,
        });
    }

    match find_on_path() {
        Some(binary) => Ok(BinaryLocation::EnvironmentDependent { binary }),
        None => Err(GitExtractError::GitBinaryNotFound {
            searched: search_path
                .iter()
                .map(|dir| dir.display().to_string())
                .collect::<Vec<_>>()
                .join(":"),
        }),
    }
}

fn find_in(directories: &[PathBuf]) -> Option<PathBuf> {
    directories
        .iter()
        .map(|dir| dir.join(GIT_BINARY))
        .find(|candidate| candidate.is_file())
}

fn find_on_path() -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    let directories: Vec<PathBuf> = env::split_paths(&path).collect();
    find_in(&directories)
}
