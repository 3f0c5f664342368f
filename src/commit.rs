use chrono::{DateTime, FixedOffset, TimeZone};
use serde::Serialize;
use std::fmt::{self, Write};

/// Identity line of a commit (`author` or `committer`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signature {
    pub name: String,
    pub email: String,
    /// Seconds since the Unix epoch
    pub timestamp: i64,
    /// UTC offset exactly as git prints it, e.g. `+0200`
    pub offset: String,
}

impl Signature {
    /// Offset from UTC in minutes, `None` unless `offset` is a sign followed by HHMM
    pub fn offset_minutes(&self) -> Option<i32> {
        let offset = self.offset.as_str();
        if offset.len() != 5 || !offset.is_ascii() {
            return None;
        }

        let sign = match &offset[..1] {
            "+" => 1,
            "-" => -1,
            _ => return None,
        };
        let hours: i32 = offset[1..3].parse().ok()?;
        let minutes: i32 = offset[3..5].parse().ok()?;

        Some(sign * (hours * 60 + minutes))
    }

    /// The signature time in its own timezone
    pub fn datetime(&self) -> Option<DateTime<FixedOffset>> {
        let zone = FixedOffset::east_opt(self.offset_minutes()? * 60)?;
        zone.timestamp_opt(self.timestamp, 0).single()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> {} {}",
            self.name, self.email, self.timestamp, self.offset
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub hash: String,
    pub tree: String,
    /// First parent first; empty for a root commit
    pub parents: Vec<String>,
    pub author: Signature,
    pub committer: Signature,
    pub message: String,
}

impl Commit {
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }

    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Renders the commit the way `git log --pretty=raw` prints it
    pub fn to_raw(&self) -> String {
        let mut raw = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(raw, "commit {}", self.hash);
        let _ = writeln!(raw, "tree {}", self.tree);
        for parent in &self.parents {
            let _ = writeln!(raw, "parent {}", parent);
        }
        let _ = writeln!(raw, "author {}", self.author);
        let _ = writeln!(raw, "committer {}", self.committer);
        raw.push('\n');

        for line in self.message.lines() {
            if line.is_empty() {
                raw.push('\n');
            } else {
                let _ = writeln!(raw, "    {}", line);
            }
        }

        raw
    }
}
