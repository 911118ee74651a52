//! Pane commands
//! Usage: mossy pane [create|join|break|swap|kill|exists]

use anyhow::{bail, Result};
use colored::Colorize;
use std::path::Path;

use crate::models::PaneId;
use crate::tmux::{inside_tmux, PaneManager};

/// Create a parked pane and print its id
pub fn create(panes: &PaneManager, dir: &Path) -> Result<()> {
    let pane = panes.create_pane(dir)?;
    println!("{pane}");
    Ok(())
}

pub fn join(panes: &PaneManager, pane: &PaneId) -> Result<()> {
    if !inside_tmux() {
        bail!("join needs a tmux client; run mossy inside tmux");
    }
    panes.join_pane(pane)?;
    Ok(())
}

pub fn park(panes: &PaneManager, pane: &PaneId) -> Result<()> {
    let outcome = panes.break_pane(pane)?;
    if let Some(warning) = outcome.warning {
        eprintln!("{} {warning}", "warning:".yellow());
    }
    Ok(())
}

pub fn swap(panes: &PaneManager, a: &PaneId, b: &PaneId) -> Result<()> {
    panes.swap_pane(a, b)?;
    Ok(())
}

pub fn kill(panes: &PaneManager, pane: &PaneId) -> Result<()> {
    panes.kill_pane(pane)?;
    Ok(())
}

/// Print whether the pane exists; returns the answer for the exit status
pub fn exists(panes: &PaneManager, pane: &PaneId) -> bool {
    let alive = panes.pane_exists(pane);
    println!("{}", if alive { "yes" } else { "no" });
    alive
}
