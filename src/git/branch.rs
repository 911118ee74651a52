//! Branch lookups: default branch resolution, existence checks and deletion

use std::path::Path;

use super::runner::Git;
use crate::error::Result;

/// Used when neither the remote HEAD nor a local main/master is found
pub const FALLBACK_DEFAULT_BRANCH: &str = "main";

/// Local branches probed, in order, when the remote HEAD is unknown
const DEFAULT_BRANCH_CANDIDATES: [&str; 2] = ["main", "master"];

impl Git {
    /// Get the default branch used as the comparison base.
    ///
    /// First success wins:
    /// 1. the remote's symbolic HEAD (`refs/remotes/origin/HEAD` -> `main`)
    /// 2. a local `main`, then `master`
    /// 3. the constant `main`
    ///
    /// Never fails.
    pub fn default_branch(&self, repo: &Path) -> String {
        let remote_head = format!("refs/remotes/{}/HEAD", self.remote());
        if let Some(stdout) = self.run_optional(&["symbolic-ref", &remote_head], repo) {
            let prefix = format!("refs/remotes/{}/", self.remote());
            let reference = stdout.trim();
            let branch = reference.strip_prefix(&prefix).unwrap_or(reference);
            if !branch.is_empty() {
                return branch.to_string();
            }
        }

        for candidate in DEFAULT_BRANCH_CANDIDATES {
            if self.branch_exists(candidate, repo) {
                return candidate.to_string();
            }
        }

        tracing::debug!(repo = %repo.display(), "no default branch found, assuming main");
        FALLBACK_DEFAULT_BRANCH.to_string()
    }

    /// Check if a local branch exists
    pub fn branch_exists(&self, name: &str, repo: &Path) -> bool {
        let ref_path = format!("refs/heads/{name}");
        self.run_bool(&["rev-parse", "--verify", "--quiet", &ref_path], repo)
    }

    /// Force-delete a local branch
    pub fn delete_branch(&self, name: &str, repo: &Path) -> Result<()> {
        self.run_checked(&["branch", "-D", name], repo)?;
        Ok(())
    }
}
