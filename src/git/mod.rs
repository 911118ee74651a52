//! Git operations for the worktree dashboard
//!
//! This module provides:
//! - Worktree listing with diff stats against the default branch
//! - Commit listing with push status, tags, file stats and AI co-authors
//! - Worktree add/remove and rebase onto the default branch
//!
//! All of it runs through [`Git`], which shells out to the git binary.

pub mod branch;
pub mod commit;
pub mod diff;
pub mod runner;
pub mod worktree;

pub use branch::FALLBACK_DEFAULT_BRANCH;
pub use commit::{detect_ai_agents, AI_AGENTS};
pub use diff::{parse_numstat, NumstatEntry};
pub use runner::{check_git_available, Git};
pub use worktree::{parse_worktree_list, worktree_path_for, Removal, RepoWorktrees};
