//! Pane operations: create, join, break, swap, kill

use std::path::Path;

use super::helpers::parse_pane_id;
use super::types::PANE_ID_FORMAT;
use super::PaneManager;
use crate::error::Result;
use crate::models::{Outcome, PaneId};

impl PaneManager {
    /// Create a shell pane in `dir`, parked in the holding session.
    ///
    /// Creates the holding session when it is absent, otherwise adds a
    /// detached window to it. The pane is respawned in `dir` right away
    /// because shell startup files can override tmux's `-c`. If the respawn
    /// fails the new pane is killed, so no untracked pane is left behind.
    pub fn create_pane(&self, dir: &Path) -> Result<PaneId> {
        let dir_str = dir.to_string_lossy();
        let stdout = if self.session_exists() {
            let target = self.holding_target();
            self.run_checked(&[
                "new-window", "-d", "-t", &target, "-c", &dir_str, "-P", "-F", PANE_ID_FORMAT,
            ])?
        } else {
            self.run_checked(&[
                "new-session", "-d", "-s", &self.session, "-c", &dir_str, "-P", "-F", PANE_ID_FORMAT,
            ])?
        };

        let pane = parse_pane_id(&stdout)?;

        if let Err(e) = self.run_checked(&["respawn-pane", "-k", "-c", &dir_str, "-t", pane.as_str()]) {
            if !self.run_bool(&["kill-pane", "-t", pane.as_str()]) {
                tracing::warn!(pane = %pane, "failed to kill pane after respawn failure");
            }
            return Err(e);
        }

        tracing::info!(pane = %pane, dir = %dir.display(), "created pane");
        Ok(pane)
    }

    /// Move a parked pane into the caller's active window as a side-by-side
    /// split, keeping focus where it was.
    pub fn join_pane(&self, pane: &PaneId) -> Result<()> {
        self.run_checked(&["join-pane", "-h", "-d", "-s", pane.as_str()])?;
        tracing::info!(pane = %pane, "joined pane");
        Ok(())
    }

    /// Like [`join_pane`](Self::join_pane), into an explicit target window
    pub fn join_pane_into(&self, pane: &PaneId, target: &str) -> Result<()> {
        self.run_checked(&["join-pane", "-h", "-d", "-s", pane.as_str(), "-t", target])?;
        tracing::info!(pane = %pane, window = target, "joined pane");
        Ok(())
    }

    /// Return a pane to the holding session.
    ///
    /// If the holding session is gone (its last pane was joined elsewhere), it
    /// is recreated around a placeholder pane that is killed once ours has
    /// moved in. Failing to kill the placeholder is reported as a warning; the
    /// move itself stands.
    pub fn break_pane(&self, pane: &PaneId) -> Result<Outcome<()>> {
        let target = self.holding_target();

        if self.session_exists() {
            self.run_checked(&["join-pane", "-d", "-s", pane.as_str(), "-t", &target])?;
            tracing::info!(pane = %pane, "parked pane");
            return Ok(Outcome::clean(()));
        }

        let stdout = self.run_checked(&[
            "new-session", "-d", "-s", &self.session, "-P", "-F", PANE_ID_FORMAT,
        ])?;
        let joined = parse_pane_id(&stdout).and_then(|placeholder| {
            self.run_checked(&["join-pane", "-d", "-s", pane.as_str(), "-t", &target])?;
            Ok(placeholder)
        });
        let placeholder = match joined {
            Ok(placeholder) => placeholder,
            Err(e) => {
                if !self.run_bool(&["kill-session", "-t", &self.session_target()]) {
                    tracing::warn!(session = %self.session, "failed to remove recreated holding session");
                }
                return Err(e);
            }
        };
        tracing::info!(pane = %pane, session = %self.session, "recreated holding session and parked pane");

        match self.run_checked(&["kill-pane", "-t", placeholder.as_str()]) {
            Ok(_) => Ok(Outcome::clean(())),
            Err(e) => {
                tracing::warn!(placeholder = %placeholder, error = %e, "failed to kill placeholder pane");
                Ok(Outcome::with_warning((), e))
            }
        }
    }

    /// Exchange two panes' positions without a layout reflow
    pub fn swap_pane(&self, a: &PaneId, b: &PaneId) -> Result<()> {
        self.run_checked(&["swap-pane", "-d", "-s", a.as_str(), "-t", b.as_str()])?;
        tracing::debug!(a = %a, b = %b, "swapped panes");
        Ok(())
    }

    pub fn kill_pane(&self, pane: &PaneId) -> Result<()> {
        self.run_checked(&["kill-pane", "-t", pane.as_str()])?;
        tracing::info!(pane = %pane, "killed pane");
        Ok(())
    }
}
