use crate::commit::{Commit, Signature};
use crate::error::{GitExtractError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Indentation git puts in front of every message line in `--pretty=raw` output
const MESSAGE_INDENT: &str = "    ";

/// `Name <email> 1700000000 +0200`; the name may be empty or contain spaces
static SIGNATURE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<name>.*?) ?<(?P<email>[^<>]*)> (?P<timestamp>-?[0-9]+) (?P<offset>[+-][0-9]{4})$")
        .unwrap()
});

/// Parses the output of `git log --pretty=raw` into commits, in the order git printed them.
///
/// The first malformed block aborts the whole parse: a corrupt record is reported
/// rather than silently dropped from the history.
pub fn extract_commits(raw_text: &str) -> Result<Vec<Commit>> {
    let commits = split_blocks(raw_text)
        .iter()
        .enumerate()
        .map(|(index, block)| parse_block(index, block))
        .collect::<Result<Vec<_>>>()?;

    log::debug!("Parsed {} commits from log output", commits.len());
    Ok(commits)
}

/// Groups lines into commit blocks. A block starts at each unindented `commit ` line,
/// so blank lines inside a message never split a commit in two.
fn split_blocks(raw_text: &str) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();

    // `lines` also drops the `\r` of CRLF line endings
    for line in raw_text.lines() {
        let starts_block = line.starts_with("commit ")
            || (blocks.is_empty() && !line.trim().is_empty());
        if starts_block {
            blocks.push(Vec::new());
        }
        if let Some(block) = blocks.last_mut() {
            block.push(line);
        }
    }

    blocks
}

fn parse_block(index: usize, block: &[&str]) -> Result<Commit> {
    let malformed = |reason: String| GitExtractError::MalformedLogRecord {
        block: index,
        reason,
        content: block.join("\n"),
    };

    let mut lines = block.iter().copied().peekable();

    // Decorations such as `(HEAD -> main)` may follow the id
    let hash = lines
        .next()
        .and_then(|line| tagged(line, "commit"))
        .and_then(|value| value.split_whitespace().next())
        .ok_or_else(|| malformed("expected `commit <id>` line".to_string()))?
        .to_string();

    let tree = lines
        .next()
        .and_then(|line| tagged(line, "tree"))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| malformed("expected `tree <id>` line".to_string()))?
        .to_string();

    let mut parents = Vec::new();
    while let Some(parent) = lines.peek().and_then(|line| tagged(line, "parent")) {
        parents.push(parent.trim().to_string());
        lines.next();
    }

    let author = parse_signature_line(lines.next(), "author").map_err(&malformed)?;
    let committer = parse_signature_line(lines.next(), "committer").map_err(&malformed)?;

    // Extension headers (gpgsig, mergetag, encoding, ...) run until the blank separator.
    // Their continuation lines start with a single space and may themselves be blank
    // apart from that space, so only a truly empty line ends the headers.
    let mut in_extension = false;
    for line in lines.by_ref() {
        if line.is_empty() {
            break;
        }
        if line.starts_with(' ') {
            if !in_extension {
                return Err(malformed(format!(
                    "indented line before commit message: {:?}",
                    line
                )));
            }
            continue;
        }
        in_extension = true;
    }

    let mut message_lines = Vec::new();
    for line in lines {
        match line.strip_prefix(MESSAGE_INDENT) {
            Some(text) => message_lines.push(text),
            None if line.trim().is_empty() => message_lines.push(""),
            None => {
                return Err(malformed(format!(
                    "unindented line in commit message: {:?}",
                    line
                )))
            }
        }
    }
    while message_lines.last().is_some_and(|line| line.trim().is_empty()) {
        message_lines.pop();
    }

    Ok(Commit {
        hash,
        tree,
        parents,
        author,
        committer,
        message: message_lines.join("\n"),
    })
}

/// Value of a `<tag> <value>` header line
fn tagged<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    line.strip_prefix(tag)?.strip_prefix(' ')
}

fn parse_signature_line(line: Option<&str>, tag: &str) -> std::result::Result<Signature, String> {
    let line = line.ok_or_else(|| format!("missing `{}` line", tag))?;
    let value = tagged(line, tag).ok_or_else(|| format!("expected `{}` line, found {:?}", tag, line))?;
    parse_signature(value).ok_or_else(|| format!("malformed `{}` line: {:?}", tag, line))
}

fn parse_signature(value: &str) -> Option<Signature> {
    let captures = SIGNATURE_REGEX.captures(value)?;

    Some(Signature {
        name: captures["name"].to_string(),
        email: captures["email"].to_string(),
        timestamp: captures["timestamp"].parse().ok()?,
        offset: captures["offset"].to_string(),
    })
}
