#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::TestRepo;

pub const HASH_A: &str = "e83c5163316f89bfbde7d9ab23ca2e25604af290";
pub const HASH_B: &str = "8d7bed4c0e7e1b2f5f8b0b5f8e9c7d6a5b4c3d2e";
pub const HASH_C: &str = "c460aeb7fb2d109c17e43de0ce681faec0b7374d";
pub const HASH_D: &str = "1945ab9c752534e733c38ba0109dc3b741f0a6eb";
pub const TREE: &str = "2b5bfdf7798569e0b59b16eb9602d5fa572d6038";

pub const AUTHOR: &str = "Jane Smith <jane@example.com> 1700000000 +0200";
pub const COMMITTER: &str = "John Doe <john@example.com> 1700000100 -0500";

/// One `git log --pretty=raw` block; `message` lines are indented as git does
pub fn raw_commit(hash: &str, parents: &[&str], message: &[&str]) -> String {
    let mut raw = format!("commit {}\ntree {}\n", hash, TREE);
    for parent in parents {
        raw.push_str(&format!("parent {}\n", parent));
    }
    raw.push_str(&format!("author {}\ncommitter {}\n\n", AUTHOR, COMMITTER));
    for line in message {
        if line.is_empty() {
            raw.push('\n');
        } else {
            raw.push_str(&format!("    {}\n", line));
        }
    }
    raw
}

/// Blocks joined the way git separates them
pub fn raw_log(blocks: &[String]) -> String {
    blocks.join("\n")
}
