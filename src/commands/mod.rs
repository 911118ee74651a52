pub mod commits;
pub mod pane;
pub mod worktree;
