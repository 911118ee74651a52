use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque tmux pane handle (`%12`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaneId(String);

impl PaneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PaneId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// State of the holding session that parks panes out of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    Absent,
    /// The session exists but lists no panes
    Empty,
    Occupied(usize),
}

impl ContainerState {
    pub fn exists(&self) -> bool {
        !matches!(self, ContainerState::Absent)
    }
}
