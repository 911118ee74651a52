pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod models;
pub mod process;
pub mod tmux;

pub use config::Config;
pub use error::{MossyError, Result, WorktreeError};
pub use git::Git;
pub use models::{BranchRef, Commit, ContainerState, DiffStat, Outcome, PaneId, Worktree};
pub use tmux::PaneManager;
