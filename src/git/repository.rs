use crate::commit::Commit;
use crate::error::{GitExtractError, Result};
use crate::git::branch_parser::extract_branches;
use crate::git::commands::{split_command, CommandOutput, CommandRunner, GitCommandRunner};
use crate::git::filter::BranchFilter;
use crate::git::log_parser::extract_commits;
use std::path::{Path, PathBuf};

/// A git repository read through the git command line.
///
/// Holds no state besides its directory and runner; every call runs git afresh.
#[derive(Debug)]
pub struct Repository<R = GitCommandRunner> {
    directory: PathBuf,
    runner: R,
}

impl Repository<GitCommandRunner> {
    /// Opens the repository at `directory`, locating git (searching `binary_path` first
    /// when given) and checking that the directory belongs to a repository
    pub fn open<P: AsRef<Path>>(directory: P, binary_path: Option<&Path>) -> Result<Self> {
        let runner = GitCommandRunner::discover(binary_path)?;
        Self::open_with_runner(directory, runner)
    }
}

impl<R: CommandRunner> Repository<R> {
    /// Wraps `directory` without checking that it is a repository
    pub fn with_runner<P: AsRef<Path>>(directory: P, runner: R) -> Self {
        Self {
            directory: normalize_directory(directory.as_ref()),
            runner,
        }
    }

    pub fn open_with_runner<P: AsRef<Path>>(directory: P, runner: R) -> Result<Self> {
        let repo = Self::with_runner(directory, runner);

        if !repo.run_unchecked("rev-parse --git-dir")?.success() {
            return Err(GitExtractError::NotGitRepository {
                path: repo.directory.clone(),
            });
        }

        log::debug!("Opened git repository at {}", repo.directory.display());
        Ok(repo)
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Runs a git command (without the leading `git`), e.g. `branch -v`.
    /// A non-zero exit becomes `ExecutionFailure` carrying git's stderr.
    pub fn run(&self, command: &str) -> Result<CommandOutput> {
        let output = self.run_unchecked(command)?;

        if !output.success() {
            log::error!("git {} failed: {}", command.trim(), output.stderr.trim());
            return Err(GitExtractError::ExecutionFailure {
                command: format!("git {}", command.trim()),
                exit_code: output.exit_code,
                stderr: output.stderr,
            });
        }

        Ok(output)
    }

    /// Like `run`, but returns the output whatever the exit code
    pub fn run_unchecked(&self, command: &str) -> Result<CommandOutput> {
        self.runner
            .execute(&split_command(command), &self.directory)
    }

    /// Commits selected by `revision_range` (any range `git log` accepts), newest first.
    /// An empty range means everything reachable from `HEAD`.
    pub fn get_commits(&self, revision_range: &str) -> Result<Vec<Commit>> {
        let output = self.run(&format!("log {} --pretty=raw", revision_range))?;
        extract_commits(&output.stdout)
    }

    /// Local and remote-tracking branch names, optionally filtered.
    ///
    /// `include` keeps only names matching it, then `exclude` drops names matching it.
    /// Both are unanchored regular expressions; `None` disables that filter.
    pub fn get_branches(&self, include: Option<&str>, exclude: Option<&str>) -> Result<Vec<String>> {
        let filter = BranchFilter::new(include, exclude)?;
        self.get_branches_filtered(&filter)
    }

    pub fn get_branches_filtered(&self, filter: &BranchFilter) -> Result<Vec<String>> {
        let output = self.run("branch --all")?;
        Ok(filter.apply(extract_branches(&output.stdout)))
    }
}

/// Drops trailing separators and `.` segments; the root stays `/`
fn normalize_directory(directory: &Path) -> PathBuf {
    let normalized: PathBuf = directory.components().collect();
    if normalized.as_os_str().is_empty() {
        directory.to_path_buf()
    } else {
        normalized
    }
}
