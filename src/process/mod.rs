//! Process invocation for the git and tmux clients
//!
//! Every external call goes through [`CommandRunner`] so the clients can be
//! driven by a scripted runner in tests. Calls are blocking and are never retried.

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;
use std::process::Command;

use crate::error::{summary_line, MossyError, Result};

/// Captured result of one external command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl CommandOutput {
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            success: true,
        }
    }

    pub fn failed(stderr: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            stderr: stderr.into(),
            success: false,
        }
    }

    /// The tool's own message as a single line. Falls back to stdout when
    /// stderr is empty.
    pub fn message(&self) -> String {
        let stderr = summary_line(&self.stderr);
        if stderr.is_empty() {
            summary_line(&self.stdout)
        } else {
            stderr
        }
    }

    /// stderr followed by stdout, the way git interleaves them on a terminal
    pub fn combined(&self) -> String {
        format!("{}{}", self.stderr, self.stdout)
    }
}

/// Runs one external command to completion.
///
/// Returns `Err` only when the program could not be spawned; a non-zero exit
/// is reported through [`CommandOutput::success`] and left to the caller to classify.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandOutput>;
}

/// [`CommandRunner`] backed by `std::process::Command`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> Result<CommandOutput> {
        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        tracing::debug!(program, args = %args.join(" "), cwd = ?cwd, "running command");

        let output = command.output().map_err(|e| {
            MossyError::command(
                display_command(program, args),
                format!("failed to execute {program}: {e}"),
            )
        })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
        })
    }
}

/// Render a command line for error messages and logs
pub fn display_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}
