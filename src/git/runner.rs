//! Git command runner
//!
//! [`Git`] carries the explicit state every git operation needs: the process
//! runner, the binary to call and the remote name. Operations are spread over
//! the sibling modules as `impl Git` blocks.

use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{MossyError, Result};
use crate::process::{display_command, CommandOutput, CommandRunner, SystemRunner};

#[derive(Clone)]
pub struct Git {
    runner: Arc<dyn CommandRunner>,
    binary: String,
    remote: String,
}

impl Git {
    pub fn new(runner: Arc<dyn CommandRunner>, remote: impl Into<String>) -> Self {
        Self {
            runner,
            binary: "git".to_string(),
            remote: remote.into(),
        }
    }

    /// System git with the `origin` remote
    pub fn system() -> Self {
        Self::new(Arc::new(SystemRunner), "origin")
    }

    pub fn from_config(config: &Config, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            binary: config.git_binary.clone(),
            remote: config.remote.clone(),
        }
    }

    /// Name of the remote used for the default branch, push status and rebase
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Run a git command and return the raw output.
    ///
    /// Fails only when git cannot be spawned.
    pub fn run(&self, args: &[&str], dir: &Path) -> Result<CommandOutput> {
        self.runner.run(&self.binary, args, Some(dir))
    }

    /// Run a git command, check for success, and return stdout.
    ///
    /// On failure, returns the trimmed stderr as a [`MossyError::Command`].
    pub fn run_checked(&self, args: &[&str], dir: &Path) -> Result<String> {
        let output = self.run(args, dir)?;
        if !output.success {
            return Err(MossyError::command(
                display_command(&self.binary, args),
                output.message(),
            ));
        }
        Ok(output.stdout)
    }

    /// Run a git command and return true if it exited 0.
    ///
    /// Spawn failures and non-zero exits both read as false.
    pub fn run_bool(&self, args: &[&str], dir: &Path) -> bool {
        self.run(args, dir)
            .map(|output| output.success)
            .unwrap_or(false)
    }

    /// Run a git command whose failure should degrade to a default.
    ///
    /// Returns stdout on success, `None` otherwise, logging why at debug level.
    pub fn run_optional(&self, args: &[&str], dir: &Path) -> Option<String> {
        match self.run(args, dir) {
            Ok(output) if output.success => Some(output.stdout),
            Ok(output) => {
                tracing::debug!(
                    command = %display_command(&self.binary, args),
                    stderr = %output.message(),
                    "git command failed, using default"
                );
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "git command could not run, using default");
                None
            }
        }
    }
}

/// Check that git is installed and answers `--version`
pub fn check_git_available() -> Result<()> {
    if which::which("git").is_err() {
        return Err(git_missing("git"));
    }
    Git::system().check_available()
}

fn git_missing(binary: &str) -> MossyError {
    MossyError::command(
        binary,
        format!(
            "{binary} is not installed or not working. On Debian/Ubuntu: apt-get install git, on macOS: brew install git"
        ),
    )
}

impl Git {
    /// Check that the configured git binary runs
    pub fn check_available(&self) -> Result<()> {
        let output = self
            .runner
            .run(&self.binary, &["--version"], None)
            .map_err(|_| git_missing(&self.binary))?;
        if !output.success {
            return Err(git_missing(&self.binary));
        }
        Ok(())
    }
}
