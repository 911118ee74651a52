//! Per-commit enrichment lookups
//!
//! Each lookup may fail on its own; a failure leaves that field at its
//! default and never fails the listing.

use std::collections::HashSet;
use std::path::Path;

use super::coauthor::detect_ai_agents;
use super::log::parse_hashes;
use crate::git::diff::{parse_numstat, total};
use crate::git::runner::Git;
use crate::models::Commit;

impl Git {
    /// Hashes in `default..<remote>/branch`.
    ///
    /// Empty when the remote branch does not exist.
    pub fn pushed_hashes(&self, repo: &Path, default_branch: &str, branch: &str) -> HashSet<String> {
        let range = format!("{default_branch}..{}/{branch}", self.remote());
        self.run_optional(&["log", &range, "--format=%H", "--"], repo)
            .map(|stdout| parse_hashes(&stdout).into_iter().collect())
            .unwrap_or_default()
    }

    /// Tags pointing directly at `hash`
    pub fn tags_at(&self, repo: &Path, hash: &str) -> Vec<String> {
        self.run_optional(&["tag", "--points-at", hash], repo)
            .map(|stdout| parse_hashes(&stdout))
            .unwrap_or_default()
    }

    /// Apply push status, tags, file stats and AI co-authors to each commit
    pub(crate) fn enrich_commits(
        &self,
        repo: &Path,
        default_branch: &str,
        branch: &str,
        commits: &mut [Commit],
    ) {
        let pushed = self.pushed_hashes(repo, default_branch, branch);

        for commit in commits.iter_mut() {
            commit.pushed = pushed.contains(&commit.hash);
            commit.tags = self.tags_at(repo, &commit.hash);

            if let Some(stdout) = self.run_optional(
                &["diff-tree", "--no-commit-id", "--numstat", "-r", &commit.hash],
                repo,
            ) {
                let entries = parse_numstat(&stdout);
                commit.diff = total(&entries);
                commit.files = entries.into_iter().map(|e| e.path).collect();
            }

            commit.ai_agents = detect_ai_agents(&commit.message());
        }
    }
}
