use crate::error::{GitExtractError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional settings read from `config.toml`.
///
/// ```toml
/// binary_path = "/opt/git/bin"
///
/// [branches]
/// include = "^feature/"
/// exclude = "wip"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Directory searched for git before the common binary paths
    pub binary_path: Option<PathBuf>,
    pub branches: BranchSettings,
}

/// Default branch filters, used when none are given on the command line
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BranchSettings {
    pub include: Option<String>,
    pub exclude: Option<String>,
}

impl Settings {
    /// `<config dir>/git-extract/config.toml`, e.g. `~/.config/git-extract/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("git-extract").join("config.toml"))
    }

    /// Loads the default config file, or defaults when it does not exist
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let settings = Self::from_toml(&contents)
            .map_err(|e| GitExtractError::ConfigError(format!("{}: {}", path.display(), e)))?;

        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| GitExtractError::ConfigError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_full_config() {
        let settings = Settings::from_toml(
            r#"
binary_path = "/opt/git/bin"

[branches]
include = "^feature/"
exclude = "wip"
"#,
        )
        .unwrap();

        assert_eq!(settings.binary_path, Some(PathBuf::from("/opt/git/bin")));
        assert_eq!(settings.branches.include.as_deref(), Some("^feature/"));
        assert_eq!(settings.branches.exclude.as_deref(), Some("wip"));
    }

    #[test]
    fn test_partial_branch_section() {
        let settings = Settings::from_toml("[branches]\nexclude = \"^remotes/\"\n").unwrap();
        assert_eq!(settings.binary_path, None);
        assert_eq!(settings.branches.include, None);
        assert_eq!(settings.branches.exclude.as_deref(), Some("^remotes/"));
    }

    #[test]
    fn test_invalid_config() {
        let err = Settings::from_toml("binary_path = 3").unwrap_err();
        assert!(matches!(err, GitExtractError::ConfigError(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[branches]\ninclude = \"main\"\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.branches.include.as_deref(), Some("main"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = Settings::load_from(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, GitExtractError::IoError(_)));
    }
}
