pub mod binary;
pub mod branch_parser;
pub mod commands;
pub mod filter;
pub mod log_parser;
pub mod repository;

pub use branch_parser::extract_branches;
pub use commands::{CommandOutput, CommandRunner, GitCommandRunner};
pub use filter::BranchFilter;
pub use log_parser::extract_commits;
pub use repository::Repository;
