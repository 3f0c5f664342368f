use crate::error::Result;
use regex::Regex;

/// Optional include/exclude patterns applied to branch names.
///
/// Patterns are unanchored regular expressions: `feature` matches `remotes/origin/feature/x`.
/// An absent pattern does not filter at all.
#[derive(Debug, Clone, Default)]
pub struct BranchFilter {
    include: Option<Regex>,
    exclude: Option<Regex>,
}

impl BranchFilter {
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Result<Self> {
        Ok(Self {
            include: include.map(Regex::new).transpose()?,
            exclude: exclude.map(Regex::new).transpose()?,
        })
    }

    pub fn include(&self) -> Option<&Regex> {
        self.include.as_ref()
    }

    pub fn exclude(&self) -> Option<&Regex> {
        self.exclude.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_none() && self.exclude.is_none()
    }

    pub fn matches(&self, name: &str) -> bool {
        let included = self.include.as_ref().map_or(true, |re| re.is_match(name));
        let excluded = self.exclude.as_ref().is_some_and(|re| re.is_match(name));
        included && !excluded
    }

    /// Keeps the matching names, preserving their order
    pub fn apply(&self, branches: Vec<String>) -> Vec<String> {
        if self.is_empty() {
            return branches;
        }
        branches
            .into_iter()
            .filter(|name| self.matches(name))
            .collect()
    }
}
