//! Worktree commands
//! Usage: mossy [list|add|remove|rebase|default-branch]

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::git::Git;
use crate::models::{BranchRef, Worktree};

/// List worktrees of each repository
pub fn list(git: &Git, repos: &[PathBuf], json: bool) -> Result<()> {
    let results = git.list_all_worktrees(repos);

    if json {
        let value: Vec<serde_json::Value> = results
            .iter()
            .map(|r| match &r.worktrees {
                Ok(worktrees) => serde_json::json!({ "repo": r.repo, "worktrees": worktrees }),
                Err(e) => serde_json::json!({ "repo": r.repo, "error": e.to_string() }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    for result in &results {
        println!("{}", result.repo.display().to_string().bold());
        match &result.worktrees {
            Ok(worktrees) if worktrees.is_empty() => println!("  {}", "(no worktrees)".dimmed()),
            Ok(worktrees) => {
                for worktree in worktrees {
                    println!("  {}", format_worktree(worktree));
                }
            }
            Err(e) => println!("  {} {e}", "error:".red()),
        }
    }
    Ok(())
}

/// One-line summary: `name  branch  +a -d`
pub fn format_worktree(worktree: &Worktree) -> String {
    let branch = match &worktree.branch {
        BranchRef::Named(name) => name.cyan().to_string(),
        other => other.to_string().dimmed().to_string(),
    };
    let mut line = format!("{:<24} {branch}", worktree.name());
    if !worktree.diff.is_empty() {
        line.push_str(&format!(
            "  {} {}",
            format!("+{}", worktree.diff.additions).green(),
            format!("-{}", worktree.diff.deletions).red()
        ));
    }
    line
}

pub fn add(git: &Git, repo: &Path, name: &str, branch: &str) -> Result<()> {
    let path = git.add_worktree(repo, name, branch)?;
    println!("{} Worktree created at {}", "✓".green(), path.display());
    Ok(())
}

/// Remove a worktree; a surviving branch is reported as an error after the removal
pub fn remove(
    git: &Git,
    repo: &Path,
    worktree: &Path,
    branch: &str,
    delete_branch: bool,
) -> Result<()> {
    let outcome = git.remove_worktree(repo, worktree, &BranchRef::from_name(branch), delete_branch)?;

    let name = worktree
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| worktree.display().to_string());
    println!("{} Worktree {name:?} removed", "✓".green());
    if let Some(deleted) = &outcome.value.deleted_branch {
        println!("{} Branch {deleted:?} deleted", "✓".green());
    }

    outcome.into_result()?;
    Ok(())
}

pub fn rebase(git: &Git, repo: &Path, worktree: &Path) -> Result<()> {
    let onto = git.rebase_onto_default(repo, worktree)?;
    println!("{} Rebased onto {onto}", "✓".green());
    Ok(())
}

pub fn default_branch(git: &Git, repo: &Path) -> Result<()> {
    println!("{}", git.default_branch(repo));
    Ok(())
}
