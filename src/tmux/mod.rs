//! tmux pane orchestration
//!
//! Every worktree gets a shell pane. Panes that are not shown in a visible
//! window are parked in a holding session, so each managed pane is at all
//! times either parked there or joined into exactly one visible window.
//!
//! All calls are blocking. Mutations against the same holding session must be
//! serialized by the caller.

mod helpers;
mod pane_ops;
mod query;
mod types;

use std::sync::Arc;

use crate::config::Config;
use crate::error::{MossyError, Result};
use crate::process::{display_command, CommandOutput, CommandRunner, SystemRunner};

use helpers::tmux_missing;

pub use helpers::{check_tmux_available, inside_tmux};
pub use types::{DEFAULT_HOLDING_SESSION, PANE_ID_FORMAT};

/// Manages pane lifecycle and the holding session
#[derive(Clone)]
pub struct PaneManager {
    runner: Arc<dyn CommandRunner>,
    binary: String,
    /// Name of the holding session
    session: String,
    /// Private server socket (`tmux -L`), if any
    socket: Option<String>,
}

impl PaneManager {
    pub fn new(runner: Arc<dyn CommandRunner>, session: impl Into<String>) -> Self {
        Self {
            runner,
            binary: "tmux".to_string(),
            session: session.into(),
            socket: None,
        }
    }

    /// System tmux with the default holding session
    pub fn system() -> Self {
        Self::new(Arc::new(SystemRunner), DEFAULT_HOLDING_SESSION)
    }

    pub fn from_config(config: &Config, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            binary: config.tmux_binary.clone(),
            session: config.holding_session.clone(),
            socket: config.tmux_socket.clone(),
        }
    }

    /// Talk to a private tmux server (`tmux -L <socket>`)
    pub fn with_socket(mut self, socket: impl Into<String>) -> Self {
        self.socket = Some(socket.into());
        self
    }

    /// Name of the holding session
    pub fn session(&self) -> &str {
        &self.session
    }

    /// Exact-match target for the holding session. A bare name would also
    /// match any session it is a prefix of (`mossy-worktrees-2`).
    fn session_target(&self) -> String {
        format!("={}", self.session)
    }

    /// Target for the holding session's current window
    fn holding_target(&self) -> String {
        format!("={}:", self.session)
    }

    /// Check that the configured tmux binary runs
    pub fn check_available(&self) -> Result<()> {
        let output = self.run(&["-V"]).map_err(|_| tmux_missing(&self.binary))?;
        if !output.success {
            return Err(tmux_missing(&self.binary));
        }
        Ok(())
    }

    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let mut full: Vec<&str> = Vec::with_capacity(args.len() + 2);
        if let Some(socket) = &self.socket {
            full.extend(["-L", socket.as_str()]);
        }
        full.extend_from_slice(args);
        self.runner.run(&self.binary, &full, None)
    }

    /// Run a tmux command and return stdout, or the trimmed stderr as an error
    fn run_checked(&self, args: &[&str]) -> Result<String> {
        let output = self.run(args)?;
        if !output.success {
            return Err(MossyError::command(
                display_command(&self.binary, args),
                output.message(),
            ));
        }
        Ok(output.stdout)
    }

    fn run_bool(&self, args: &[&str]) -> bool {
        self.run(args).map(|o| o.success).unwrap_or(false)
    }
}
