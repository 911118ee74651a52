use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mossy")]
#[command(about = "Git worktree dashboard with tmux panes", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Settings file (default: <config dir>/mossy/settings.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log every git and tmux invocation to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List secondary worktrees with diff stats against the default branch
    List {
        /// Repository paths
        #[arg(required = true)]
        repos: Vec<PathBuf>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List commits ahead of the default branch
    Commits {
        repo: PathBuf,
        branch: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Create a worktree next to the repository on a new branch
    Add {
        repo: PathBuf,

        /// Directory name of the new worktree
        name: String,

        /// Branch to create (default: the worktree name)
        #[arg(short, long, default_value = "")]
        branch: String,
    },

    /// Remove a worktree
    Remove {
        repo: PathBuf,
        worktree: PathBuf,

        /// Branch checked out in the worktree
        #[arg(short, long, default_value = "")]
        branch: String,

        /// Also delete the local branch
        #[arg(short, long)]
        delete_branch: bool,
    },

    /// Fetch the default branch and rebase a worktree onto it
    Rebase { repo: PathBuf, worktree: PathBuf },

    /// Print the default branch of a repository
    DefaultBranch { repo: PathBuf },

    /// Manage worktree panes
    Pane {
        #[command(subcommand)]
        command: PaneCommands,
    },
}

#[derive(Subcommand)]
pub enum PaneCommands {
    /// Create a pane in the holding session and print its id
    Create { dir: PathBuf },

    /// Show a parked pane next to the current one
    Join { pane: String },

    /// Park a pane back in the holding session
    Break { pane: String },

    /// Swap two panes in place
    Swap { a: String, b: String },

    /// Kill a pane
    Kill { pane: String },

    /// Exit 0 if the pane exists, 1 otherwise
    Exists { pane: String },
}
