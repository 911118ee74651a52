//! Worktree output parsing
//!
//! Parses `git worktree list --porcelain` output into structured data. Each
//! line is classified first, then folded into records that close on a blank line.

use std::path::PathBuf;

use crate::models::{BranchRef, Worktree};

/// One line of porcelain output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PorcelainLine<'a> {
    Path(&'a str),
    Head(&'a str),
    /// Branch name with `refs/heads/` stripped
    Branch(&'a str),
    Bare,
    Detached,
    Blank,
    /// `locked`, `prunable` and anything newer git versions add
    Unknown(&'a str),
}

impl<'a> PorcelainLine<'a> {
    pub fn classify(line: &'a str) -> Self {
        if line.trim().is_empty() {
            return PorcelainLine::Blank;
        }
        if let Some(path) = line.strip_prefix("worktree ") {
            return PorcelainLine::Path(path);
        }
        if let Some(head) = line.strip_prefix("HEAD ") {
            return PorcelainLine::Head(head);
        }
        if let Some(branch) = line.strip_prefix("branch ") {
            return PorcelainLine::Branch(branch.strip_prefix("refs/heads/").unwrap_or(branch));
        }
        match line {
            "bare" => PorcelainLine::Bare,
            "detached" => PorcelainLine::Detached,
            other => PorcelainLine::Unknown(other),
        }
    }
}

enum Fold {
    Idle,
    InRecord(Worktree),
}

/// Parse git worktree list --porcelain output
///
/// Example input:
/// ```text
/// worktree /home/user/repo
/// HEAD abc123def456
/// branch refs/heads/main
///
/// worktree /home/user/repo-feature
/// HEAD def789abc012
/// detached
/// ```
///
/// Lines that appear outside a record (before its `worktree` line) are skipped.
/// The first record is the primary checkout; it is kept here and dropped by the lister.
pub fn parse_worktree_list(output: &str) -> Vec<Worktree> {
    let mut worktrees = Vec::new();
    let mut state = Fold::Idle;

    for line in output.lines() {
        state = match (state, PorcelainLine::classify(line)) {
            (Fold::Idle, PorcelainLine::Path(path)) => Fold::InRecord(new_record(path)),
            (Fold::Idle, PorcelainLine::Blank) => Fold::Idle,
            (Fold::Idle, other) => {
                tracing::debug!(line = ?other, "skipping porcelain line outside a worktree record");
                Fold::Idle
            }
            (Fold::InRecord(current), PorcelainLine::Blank) => {
                worktrees.push(current);
                Fold::Idle
            }
            // A new record without the separating blank line closes the previous one
            (Fold::InRecord(current), PorcelainLine::Path(path)) => {
                worktrees.push(current);
                Fold::InRecord(new_record(path))
            }
            (Fold::InRecord(mut current), line) => {
                apply(&mut current, line);
                Fold::InRecord(current)
            }
        };
    }

    if let Fold::InRecord(current) = state {
        worktrees.push(current);
    }

    worktrees
}

fn new_record(path: &str) -> Worktree {
    Worktree {
        path: PathBuf::from(path),
        ..Default::default()
    }
}

fn apply(worktree: &mut Worktree, line: PorcelainLine<'_>) {
    match line {
        PorcelainLine::Head(head) => worktree.head = head.to_string(),
        PorcelainLine::Branch(branch) => worktree.branch = BranchRef::from_name(branch),
        PorcelainLine::Bare => worktree.bare = true,
        PorcelainLine::Detached => worktree.branch = BranchRef::Detached,
        PorcelainLine::Path(_) | PorcelainLine::Blank | PorcelainLine::Unknown(_) => {}
    }
}
