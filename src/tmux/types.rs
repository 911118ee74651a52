//! Constants for the tmux backend

/// Session that parks panes not shown in any visible window
pub const DEFAULT_HOLDING_SESSION: &str = "mossy-worktrees";

/// Format printed by `-P -F` when a pane is created
pub const PANE_ID_FORMAT: &str = "#{pane_id}";
