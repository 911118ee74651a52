//! Worktree operations
//!
//! List, add, remove and rebase secondary worktrees. New worktrees are created
//! as siblings of the repository root: `<parent>/<name>`.

use std::path::{Path, PathBuf};

use super::parser::parse_worktree_list;
use crate::error::{classify_worktree_error, summary_line, MossyError, Result};
use crate::git::runner::Git;
use crate::models::{BranchRef, Outcome, Worktree};

/// Worktrees of one repository in a multi-repository refresh
#[derive(Debug)]
pub struct RepoWorktrees {
    pub repo: PathBuf,
    pub worktrees: Result<Vec<Worktree>>,
}

/// What a successful removal did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub path: PathBuf,
    /// Set when the local branch was deleted as well
    pub deleted_branch: Option<String>,
}

/// Location of a new worktree named `name`: a sibling of the repository root
pub fn worktree_path_for(repo: &Path, name: &str) -> Result<PathBuf> {
    let parent = repo
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| MossyError::InvalidRepoPath(repo.to_path_buf()))?;
    Ok(parent.join(name))
}

impl Git {
    /// List secondary worktrees with diff stats against the default branch.
    ///
    /// The primary checkout (first record) is excluded. Worktrees on the
    /// default branch, detached, or without a branch keep zero stats.
    pub fn list_worktrees(&self, repo: &Path) -> Result<Vec<Worktree>> {
        let stdout = self.run_checked(&["worktree", "list", "--porcelain"], repo)?;

        let mut worktrees: Vec<Worktree> = parse_worktree_list(&stdout).into_iter().skip(1).collect();
        if worktrees.is_empty() {
            return Ok(worktrees);
        }

        let default_branch = self.default_branch(repo);
        for worktree in &mut worktrees {
            if !worktree.compares_against(&default_branch) {
                continue;
            }
            let head = if worktree.head.is_empty() {
                worktree.branch.to_string()
            } else {
                worktree.head.clone()
            };
            worktree.diff = self.diff_stats(repo, &default_branch, &head);
        }

        Ok(worktrees)
    }

    /// List worktrees of several repositories.
    ///
    /// Each repository is listed independently; one failure does not hide the others.
    pub fn list_all_worktrees(&self, repos: &[PathBuf]) -> Vec<RepoWorktrees> {
        repos
            .iter()
            .map(|repo| {
                let worktrees = self.list_worktrees(repo);
                if let Err(e) = &worktrees {
                    tracing::warn!(repo = %repo.display(), error = %e, "failed to list worktrees");
                }
                RepoWorktrees {
                    repo: repo.clone(),
                    worktrees,
                }
            })
            .collect()
    }

    /// Create a worktree named `name` next to the repository, on a new branch.
    ///
    /// An empty `branch` uses `name` as the branch name.
    /// Runs: git worktree add <parent>/<name> -b <branch>
    pub fn add_worktree(&self, repo: &Path, name: &str, branch: &str) -> Result<PathBuf> {
        let branch = if branch.is_empty() { name } else { branch };
        let path = worktree_path_for(repo, name)?;
        let path_str = path.to_string_lossy();

        let output = self.run(&["worktree", "add", &path_str, "-b", branch], repo)?;
        if !output.success {
            return Err(classify_worktree_error(&output.combined(), name, branch));
        }

        tracing::info!(path = %path.display(), branch, "created worktree");
        Ok(path)
    }

    /// Remove a worktree, optionally deleting its local branch afterwards.
    ///
    /// Branch deletion is skipped for detached or branchless worktrees. If it
    /// fails, the removal still stands and the failure comes back as a
    /// [`MossyError::PartialFailure`] warning; it is not retried.
    pub fn remove_worktree(
        &self,
        repo: &Path,
        worktree: &Path,
        branch: &BranchRef,
        delete_branch: bool,
    ) -> Result<Outcome<Removal>> {
        let path_str = worktree.to_string_lossy();
        let output = self.run(&["worktree", "remove", &path_str], repo)?;
        if !output.success {
            return Err(MossyError::command(
                "git worktree remove",
                summary_line(&output.combined()),
            ));
        }
        tracing::info!(path = %worktree.display(), "removed worktree");

        let mut removal = Removal {
            path: worktree.to_path_buf(),
            deleted_branch: None,
        };

        let Some(name) = branch.name().filter(|_| delete_branch) else {
            return Ok(Outcome::clean(removal));
        };

        match self.delete_branch(name, repo) {
            Ok(()) => {
                tracing::info!(branch = name, "deleted branch");
                removal.deleted_branch = Some(name.to_string());
                Ok(Outcome::clean(removal))
            }
            Err(e) => {
                tracing::warn!(branch = name, error = %e, "worktree removed but branch survives");
                Ok(Outcome::with_warning(
                    removal,
                    MossyError::PartialFailure {
                        completed: "worktree removed".to_string(),
                        message: format!("branch deletion failed: {e}"),
                    },
                ))
            }
        }
    }

    /// Fetch the default branch from the remote and rebase the worktree onto it.
    ///
    /// Any rebase failure is aborted to restore the previous state. Conflicts
    /// come back as [`MossyError::RebaseConflict`] naming the first conflicting
    /// path; other failures (a dirty worktree, say) as [`MossyError::Command`].
    /// Returns the ref rebased onto.
    pub fn rebase_onto_default(&self, repo: &Path, worktree: &Path) -> Result<String> {
        let default_branch = self.default_branch(repo);
        let remote = self.remote().to_string();

        let fetch = self.run(&["fetch", &remote, &default_branch], worktree)?;
        if !fetch.success {
            return Err(MossyError::command(
                "git fetch",
                format!("fetch failed: {}", summary_line(&fetch.combined())),
            ));
        }

        let onto = format!("{remote}/{default_branch}");
        let rebase = self.run(&["rebase", &onto], worktree)?;
        if !rebase.success {
            let output = rebase.combined();
            let conflict = output
                .lines()
                .map(str::trim)
                .find(|line| line.starts_with("CONFLICT"))
                .map(str::to_string);
            let aborted = self.run_bool(&["rebase", "--abort"], worktree);

            return Err(match conflict {
                Some(line) => {
                    if !aborted {
                        tracing::warn!(worktree = %worktree.display(), "rebase --abort failed");
                    }
                    MossyError::RebaseConflict(line)
                }
                None => {
                    tracing::debug!(worktree = %worktree.display(), aborted, "rebase refused to start or stopped early");
                    MossyError::command("git rebase", summary_line(&output))
                }
            });
        }

        tracing::info!(worktree = %worktree.display(), onto = %onto, "rebased worktree");
        Ok(onto)
    }
}
