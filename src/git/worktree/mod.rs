//! Git worktree management
//!
//! - `parser`: `git worktree list --porcelain` parsing
//! - `operations`: list, add, remove and rebase

mod operations;
mod parser;

pub use operations::{worktree_path_for, Removal, RepoWorktrees};
pub use parser::{parse_worktree_list, PorcelainLine};
