/// Marks a symbolic ref such as `remotes/origin/HEAD -> origin/main`
const ALIAS_ARROW: &str = "->";

/// Markers git prints in the first column: `*` for the current branch,
/// `+` for a branch checked out in another worktree
const SELECTION_MARKERS: [char; 2] = ['*', '+'];

/// Parses the output of `git branch --all` into branch names, in the order git printed them.
///
/// Alias lines are dropped; their target is listed on its own line. No deduplication
/// or name validation is done.
pub fn extract_branches(raw_text: &str) -> Vec<String> {
    let branches: Vec<String> = raw_text.lines().filter_map(parse_branch_line).collect();

    log::debug!("Parsed {} branches from branch listing", branches.len());
    branches
}

fn parse_branch_line(line: &str) -> Option<String> {
    if line.contains(ALIAS_ARROW) {
        return None;
    }

    // Only the first column holds a marker; `+` and `*` after the indent belong to the name
    let name = line
        .strip_prefix(&SELECTION_MARKERS[..])
        .unwrap_or(line)
        .trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
