//! Read-only extraction of commits and branch names from the output of the `git`
//! command line tool.
//!
//! ```no_run
//! use git_extract::Repository;
//!
//! let repo = Repository::open(".", None)?;
//! for commit in repo.get_commits("v1.0..HEAD")? {
//!     println!("{} {}", commit.short_hash(), commit.subject());
//! }
//! let features = repo.get_branches(Some("^feature/"), None)?;
//! # Ok::<(), git_extract::GitExtractError>(())
//! ```

pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;

pub use commit::{Commit, Signature};
pub use error::{GitExtractError, Result};
pub use git::{extract_branches, extract_commits, BranchFilter, Repository};
