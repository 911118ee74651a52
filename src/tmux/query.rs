//! Query functions for panes and the holding session

use std::collections::HashMap;
use std::hash::Hash;

use super::types::PANE_ID_FORMAT;
use super::PaneManager;
use crate::models::{ContainerState, PaneId};

impl PaneManager {
    /// Check if the holding session exists
    pub fn session_exists(&self) -> bool {
        self.run_bool(&["has-session", "-t", &self.session_target()])
    }

    /// Check if a pane is still alive
    pub fn pane_exists(&self, pane: &PaneId) -> bool {
        self.run_bool(&["display-message", "-t", pane.as_str(), "-p", PANE_ID_FORMAT])
    }

    /// Panes parked in the holding session, across all of its windows.
    ///
    /// `None` when the session does not exist.
    pub fn holding_panes(&self) -> Option<Vec<PaneId>> {
        let target = self.session_target();
        let output = match self.run(&["list-panes", "-s", "-t", &target, "-F", PANE_ID_FORMAT]) {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(error = %e, "tmux could not run, treating holding session as absent");
                return None;
            }
        };
        if !output.success {
            tracing::debug!(session = %self.session, stderr = %output.message(), "holding session not listed");
            return None;
        }
        Some(
            output
                .stdout
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(PaneId::new)
                .collect(),
        )
    }

    pub fn container_state(&self) -> ContainerState {
        match self.holding_panes() {
            None => ContainerState::Absent,
            Some(panes) if panes.is_empty() => ContainerState::Empty,
            Some(panes) => ContainerState::Occupied(panes.len()),
        }
    }

    /// Drop map entries whose pane no longer exists; returns the dropped keys.
    ///
    /// Use after anything that may have left tmux in an unknown state, instead
    /// of trusting previously stored pane ids.
    pub fn prune_dead<K>(&self, panes: &mut HashMap<K, PaneId>) -> Vec<K>
    where
        K: Clone + Eq + Hash,
    {
        let dead: Vec<K> = panes
            .iter()
            .filter(|(_, pane)| !self.pane_exists(pane))
            .map(|(key, _)| key.clone())
            .collect();
        for key in &dead {
            if let Some(pane) = panes.remove(key) {
                tracing::debug!(pane = %pane, "dropping dead pane");
            }
        }
        dead
    }
}
