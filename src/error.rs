//! Error taxonomy for git and tmux operations
//!
//! Every variant renders as a single line that can be shown to the user as-is.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, MossyError>;

#[derive(Debug, thiserror::Error)]
pub enum MossyError {
    /// The tool could not be spawned, or exited non-zero with an unrecognized message.
    #[error("{message}")]
    Command { command: String, message: String },

    #[error(transparent)]
    Validation(#[from] WorktreeError),

    /// A multi-step operation completed its first step and failed a later one.
    /// The completed step must not be retried.
    #[error("{completed} but {message}")]
    PartialFailure { completed: String, message: String },

    #[error("conflicts detected, resolve in terminal ({0})")]
    RebaseConflict(String),

    #[error("repository path {} has no parent directory", .0.display())]
    InvalidRepoPath(PathBuf),
}

impl MossyError {
    pub fn command(command: impl Into<String>, message: impl Into<String>) -> Self {
        MossyError::Command {
            command: command.into(),
            message: message.into(),
        }
    }

    /// True when the completed part of the operation should not be retried.
    pub fn is_partial(&self) -> bool {
        matches!(self, MossyError::PartialFailure { .. })
    }
}

/// Recognized `fatal:` messages from `git worktree add`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorktreeError {
    #[error("a branch named {0:?} already exists")]
    BranchExists(String),

    #[error("a worktree named {0:?} already exists")]
    WorktreeExists(String),

    #[error("{0:?} is not a valid branch name")]
    InvalidBranchName(String),

    #[error("worktree {0:?} is locked; unlock it first")]
    Locked(String),
}

fn output_lines(output: &str) -> impl Iterator<Item = &str> {
    output
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Reduce multi-line tool output to the one line worth showing.
///
/// Prefers the first `fatal:` or `error:` line, then the first non-empty line.
/// Progress output separated by carriage returns counts as separate lines.
pub fn summary_line(output: &str) -> String {
    output_lines(output)
        .find(|line| line.starts_with("fatal:") || line.starts_with("error:"))
        .or_else(|| output_lines(output).next())
        .unwrap_or_default()
        .to_string()
}

/// Pull the first `fatal:` line out of git's output.
///
/// git prefixes the fatal line with progress text ("Preparing worktree ...")
/// that can contain the same keywords, so only the fatal line is classified.
pub fn fatal_line(output: &str) -> String {
    output_lines(output)
        .find_map(|line| line.strip_prefix("fatal:"))
        .map(|rest| rest.trim().to_string())
        .unwrap_or_else(|| summary_line(output))
}

/// Map `git worktree add` output onto the domain taxonomy.
pub fn classify_worktree_error(output: &str, name: &str, branch: &str) -> MossyError {
    let fatal = fatal_line(output);

    if fatal.contains("branch named") && fatal.contains("already exists") {
        WorktreeError::BranchExists(branch.to_string()).into()
    } else if fatal.contains("already exists") {
        WorktreeError::WorktreeExists(name.to_string()).into()
    } else if fatal.contains("not a valid branch name") {
        WorktreeError::InvalidBranchName(branch.to_string()).into()
    } else if fatal.contains("is a missing but locked") {
        WorktreeError::Locked(name.to_string()).into()
    } else {
        MossyError::command("git worktree add", fatal)
    }
}
