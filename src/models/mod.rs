pub mod commit;
pub mod outcome;
pub mod pane;
pub mod worktree;

pub use commit::Commit;
pub use outcome::Outcome;
pub use pane::{ContainerState, PaneId};
pub use worktree::{BranchRef, DiffStat, Worktree, DETACHED};
