use serde::{Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

/// Branch label shown for a worktree with a detached HEAD
pub const DETACHED: &str = "(detached)";

/// What a worktree has checked out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BranchRef {
    /// No `branch` line was present (bare repository or unborn HEAD)
    #[default]
    None,
    Detached,
    Named(String),
}

impl BranchRef {
    /// Build from a raw branch string, recognizing the empty and detached forms
    pub fn from_name(name: &str) -> Self {
        match name {
            "" => BranchRef::None,
            DETACHED => BranchRef::Detached,
            other => BranchRef::Named(other.to_string()),
        }
    }

    /// The local branch name, if this worktree is on one
    pub fn name(&self) -> Option<&str> {
        match self {
            BranchRef::Named(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_detached(&self) -> bool {
        matches!(self, BranchRef::Detached)
    }
}

impl fmt::Display for BranchRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchRef::None => Ok(()),
            BranchRef::Detached => f.write_str(DETACHED),
            BranchRef::Named(name) => f.write_str(name),
        }
    }
}

impl Serialize for BranchRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Added/deleted line totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStat {
    pub additions: u64,
    pub deletions: u64,
}

impl DiffStat {
    pub fn is_empty(&self) -> bool {
        self.additions == 0 && self.deletions == 0
    }
}

impl std::ops::AddAssign for DiffStat {
    fn add_assign(&mut self, rhs: Self) {
        self.additions += rhs.additions;
        self.deletions += rhs.deletions;
    }
}

/// One secondary worktree, as listed by `git worktree list --porcelain`
///
/// A snapshot: recomputed on every refresh, never updated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Worktree {
    pub path: PathBuf,
    pub head: String,
    pub branch: BranchRef,
    pub bare: bool,
    /// Lines changed relative to the default branch (merge-base comparison)
    #[serde(flatten)]
    pub diff: DiffStat,
}

impl Worktree {
    /// Whether diff stats against `default_branch` are meaningful for this worktree
    pub fn compares_against(&self, default_branch: &str) -> bool {
        matches!(self.branch.name(), Some(name) if name != default_branch)
    }

    /// Directory name of the worktree
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
