//! Settings file
//!
//! Read from `<config dir>/mossy/settings.toml`. Every key is optional.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::tmux::DEFAULT_HOLDING_SESSION;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote used for the default branch, push status and rebase
    pub remote: String,
    /// tmux session that parks hidden panes
    pub holding_session: String,
    /// Private tmux server socket name (`tmux -L`)
    pub tmux_socket: Option<String>,
    pub git_binary: String,
    pub tmux_binary: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            holding_session: DEFAULT_HOLDING_SESSION.to_string(),
            tmux_socket: None,
            git_binary: "git".to_string(),
            tmux_binary: "tmux".to_string(),
        }
    }
}

impl Config {
    /// Default settings file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mossy").join("settings.toml"))
    }

    /// Load settings from `path`, or the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}
