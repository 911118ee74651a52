//! Commit listing command
//! Usage: mossy commits <repo> <branch>

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::git::Git;
use crate::models::Commit;

pub fn list(git: &Git, repo: &Path, branch: &str, json: bool) -> Result<()> {
    let commits = git.list_commits(repo, branch)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&commits)?);
        return Ok(());
    }

    if commits.is_empty() {
        println!("{}", "(no commits ahead of the default branch)".dimmed());
        return Ok(());
    }

    for commit in &commits {
        println!("{}", format_commit(commit));
    }
    Ok(())
}

/// `hash ● subject (author, date) [tags] +a -d agents`
///
/// The dot is green for pushed commits and yellow for local-only ones.
pub fn format_commit(commit: &Commit) -> String {
    let marker = if commit.pushed {
        "●".green()
    } else {
        "●".yellow()
    };
    let mut line = format!(
        "{} {marker} {} {}",
        commit.short_hash().yellow(),
        commit.subject,
        format!("({}, {})", commit.author, commit.date).dimmed()
    );
    if !commit.tags.is_empty() {
        line.push_str(&format!(" [{}]", commit.tags.join(", ")).magenta().to_string());
    }
    if !commit.diff.is_empty() {
        line.push_str(&format!(
            " {} {}",
            format!("+{}", commit.diff.additions).green(),
            format!("-{}", commit.diff.deletions).red()
        ));
    }
    if !commit.ai_agents.is_empty() {
        line.push_str(&format!(" {}", commit.ai_agents.join(", ").cyan()));
    }
    line
}
