//! Integration tests for mossy
//!
//! These drive the real git binary against throwaway repositories, and a
//! private tmux server when one is available.

mod commits;
mod panes;
mod worktrees;
