use anyhow::Result;
use mossy::commands::{commits, pane, worktree};
use mossy::models::PaneId;
use mossy::{Config, Git, PaneManager};
use std::process::ExitCode;
use std::sync::Arc;

use mossy::process::SystemRunner;

use super::types::{Commands, PaneCommands};

pub fn dispatch(command: Commands, config: &Config) -> Result<ExitCode> {
    let runner = Arc::new(SystemRunner);
    let git = Git::from_config(config, runner.clone());
    let panes = PaneManager::from_config(config, runner);

    match &command {
        Commands::Pane { .. } => panes.check_available()?,
        _ => git.check_available()?,
    }

    match command {
        Commands::List { repos, json } => worktree::list(&git, &repos, json)?,
        Commands::Commits { repo, branch, json } => commits::list(&git, &repo, &branch, json)?,
        Commands::Add { repo, name, branch } => worktree::add(&git, &repo, &name, &branch)?,
        Commands::Remove {
            repo,
            worktree: path,
            branch,
            delete_branch,
        } => worktree::remove(&git, &repo, &path, &branch, delete_branch)?,
        Commands::Rebase { repo, worktree: path } => worktree::rebase(&git, &repo, &path)?,
        Commands::DefaultBranch { repo } => worktree::default_branch(&git, &repo)?,
        Commands::Pane { command } => match command {
            PaneCommands::Create { dir } => pane::create(&panes, &dir)?,
            PaneCommands::Join { pane: id } => pane::join(&panes, &PaneId::new(id))?,
            PaneCommands::Break { pane: id } => pane::park(&panes, &PaneId::new(id))?,
            PaneCommands::Swap { a, b } => pane::swap(&panes, &PaneId::new(a), &PaneId::new(b))?,
            PaneCommands::Kill { pane: id } => pane::kill(&panes, &PaneId::new(id))?,
            PaneCommands::Exists { pane: id } => {
                if !pane::exists(&panes, &PaneId::new(id)) {
                    return Ok(ExitCode::FAILURE);
                }
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
