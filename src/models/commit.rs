use serde::Serialize;

use super::worktree::DiffStat;

/// A commit ahead of the default branch, with its enrichment lookups applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Commit {
    pub hash: String,
    pub subject: String,
    pub body: String,
    pub author: String,
    /// Relative date as git renders it ("2 hours ago")
    pub date: String,
    /// Reachable from the remote branch
    pub pushed: bool,
    pub tags: Vec<String>,
    pub files: Vec<String>,
    #[serde(flatten)]
    pub diff: DiffStat,
    /// AI agents credited in `Co-authored-by:` trailers, first occurrence order
    pub ai_agents: Vec<String>,
}

impl Commit {
    pub fn short_hash(&self) -> &str {
        self.hash.get(..7).unwrap_or(&self.hash)
    }

    /// Subject and body joined the way the trailer scan sees them
    pub fn message(&self) -> String {
        format!("{}\n{}", self.subject, self.body)
    }
}
