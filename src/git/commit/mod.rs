//! Commits ahead of the default branch, with push status, tags, file stats
//! and AI co-author attribution.

mod coauthor;
mod enrich;
mod log;

use std::path::Path;

use crate::error::Result;
use crate::git::runner::Git;
use crate::models::Commit;

pub use coauthor::{detect_ai_agents, AI_AGENTS};
pub use log::{parse_log, FIELD_SEPARATOR, LOG_FORMAT, RECORD_SEPARATOR};

impl Git {
    /// List commits in `default..branch`, newest first, fully enriched.
    ///
    /// Fails only when the log itself cannot be read.
    pub fn list_commits(&self, repo: &Path, branch: &str) -> Result<Vec<Commit>> {
        let default_branch = self.default_branch(repo);
        let range = format!("{default_branch}..{branch}");

        let stdout = self.run_checked(&["log", &range, LOG_FORMAT, "--"], repo)?;
        let mut commits = parse_log(&stdout);
        if commits.is_empty() {
            return Ok(commits);
        }

        self.enrich_commits(repo, &default_branch, branch, &mut commits);
        Ok(commits)
    }
}
