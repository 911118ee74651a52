//! Helper functions for tmux operations

use crate::error::{MossyError, Result};
use crate::models::PaneId;

/// Check if tmux is available on the system
pub fn check_tmux_available() -> Result<()> {
    if which::which("tmux").is_err() {
        return Err(tmux_missing("tmux"));
    }
    Ok(())
}

pub(super) fn tmux_missing(binary: &str) -> MossyError {
    MossyError::command(
        binary,
        format!(
            "{binary} is not installed or not working. On Debian/Ubuntu: apt-get install tmux, on macOS: brew install tmux"
        ),
    )
}

/// True when this process runs inside a tmux client
pub fn inside_tmux() -> bool {
    std::env::var_os("TMUX").is_some_and(|v| !v.is_empty())
}

/// First line of tmux output, trimmed
pub fn first_line(output: &str) -> &str {
    output.lines().next().unwrap_or("").trim()
}

/// Pane id printed by `-P -F #{pane_id}`; empty output is an error
pub fn parse_pane_id(stdout: &str) -> Result<PaneId> {
    let id = first_line(stdout);
    if id.is_empty() {
        return Err(MossyError::command("tmux", "tmux did not report a pane id"));
    }
    Ok(PaneId::new(id))
}
