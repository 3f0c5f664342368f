use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

pub const AUTHOR_DATE: &str = "1700000000 +0200";
pub const COMMITTER_DATE: &str = "1700000100 -0500";

pub struct TestRepo {
    temp_dir: TempDir,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Repository on `main` with no commits
    pub fn empty() -> Self {
        let repo = Self {
            temp_dir: TempDir::new().unwrap(),
        };

        repo.git(&["init", "--quiet"]);
        repo.git(&["symbolic-ref", "HEAD", "refs/heads/main"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "user.email", "test@example.com"]);
        repo.git(&["config", "commit.gpgsign", "false"]);

        repo
    }

    /// Repository on `main` with one commit
    pub fn new() -> Self {
        let repo = Self::empty();
        repo.commit("test.txt", "Initial content", "Initial commit");
        repo
    }

    pub fn new_with_commits(count: usize) -> Self {
        let repo = Self::new();

        for i in 1..count {
            repo.commit("test.txt", &format!("Content version {}", i), &format!("Commit {}", i));
        }

        repo
    }

    pub fn new_with_branches(names: &[&str]) -> Self {
        let repo = Self::new();

        for name in names {
            repo.git(&["branch", name]);
        }

        repo
    }

    /// `main` with a `--no-ff` merge of `feature` on top
    pub fn new_with_merge() -> Self {
        let repo = Self::new();

        repo.git(&["checkout", "--quiet", "-b", "feature"]);
        repo.commit("feature.txt", "feature", "Add feature");
        repo.git(&["checkout", "--quiet", "main"]);
        repo.commit("main.txt", "main", "Work on main");
        repo.git(&["merge", "--quiet", "--no-ff", "--no-edit", "-m", "Merge feature", "feature"]);

        repo
    }

    /// A clone of `self` in a new directory, with `origin` pointing back here
    pub fn clone_repo(&self) -> TempDir {
        let target = TempDir::new().unwrap();
        let output = Command::new("git")
            .args(["clone", "--quiet"])
            .arg(self.path())
            .arg(target.path().join("clone"))
            .output()
            .unwrap();
        assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
        target
    }

    /// Checks `branch` out in a linked worktree under a new directory
    pub fn add_worktree(&self, branch: &str) -> TempDir {
        let target = TempDir::new().unwrap();
        let worktree = target.path().join(branch);
        self.git(&["worktree", "add", "--quiet", &worktree.to_string_lossy(), branch]);
        target
    }

    pub fn commit(&self, file: &str, content: &str, message: &str) {
        fs::write(self.path().join(file), content).unwrap();
        self.git(&["add", "."]);
        self.git(&["commit", "--quiet", "-m", message]);
    }

    /// Runs git with fixed dates and returns trimmed stdout
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .env("GIT_AUTHOR_DATE", AUTHOR_DATE)
            .env("GIT_COMMITTER_DATE", COMMITTER_DATE)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}
