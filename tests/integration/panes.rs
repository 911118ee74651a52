//! Pane orchestration against a private tmux server
//!
//! Skipped when tmux is not installed.

use std::process::Command;
use std::sync::Arc;

use serial_test::serial;
use tempfile::TempDir;

use mossy::process::SystemRunner;
use mossy::tmux::check_tmux_available;
use mossy::{ContainerState, PaneManager};

/// Private tmux server, killed on drop
struct TmuxServer {
    socket: String,
}

impl TmuxServer {
    fn start() -> Option<Self> {
        if check_tmux_available().is_err() {
            eprintln!("tmux not installed, skipping");
            return None;
        }
        Some(Self {
            socket: format!("mossy-test-{}", std::process::id()),
        })
    }

    fn manager(&self, session: &str) -> PaneManager {
        PaneManager::new(Arc::new(SystemRunner), session).with_socket(self.socket.clone())
    }

    fn tmux(&self, args: &[&str]) -> bool {
        Command::new("tmux")
            .args(["-L", &self.socket])
            .args(args)
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

impl Drop for TmuxServer {
    fn drop(&mut self) {
        self.tmux(&["kill-server"]);
    }
}

#[test]
#[serial]
fn test_pane_round_trip_through_visible_window() {
    let Some(server) = TmuxServer::start() else {
        return;
    };
    let dir = TempDir::new().unwrap();
    let manager = server.manager("mossy-holding");

    let pane = manager.create_pane(dir.path()).unwrap();
    assert!(pane.as_str().starts_with('%'));
    assert_eq!(manager.container_state(), ContainerState::Occupied(1));

    assert!(server.tmux(&["new-session", "-d", "-s", "visible"]));
    manager.join_pane_into(&pane, "visible:").unwrap();
    assert_eq!(manager.container_state(), ContainerState::Absent);

    let outcome = manager.break_pane(&pane).unwrap();
    assert!(outcome.is_clean());
    assert_eq!(manager.container_state(), ContainerState::Occupied(1));
    assert_eq!(manager.holding_panes(), Some(vec![pane.clone()]));
    assert!(manager.pane_exists(&pane));
}

#[test]
#[serial]
fn test_killed_pane_no_longer_exists() {
    let Some(server) = TmuxServer::start() else {
        return;
    };
    let dir = TempDir::new().unwrap();
    let manager = server.manager("mossy-kill");

    let keep = manager.create_pane(dir.path()).unwrap();
    let doomed = manager.create_pane(dir.path()).unwrap();
    assert_eq!(manager.container_state(), ContainerState::Occupied(2));

    manager.kill_pane(&doomed).unwrap();
    assert!(!manager.pane_exists(&doomed));
    assert!(manager.pane_exists(&keep));
    assert!(manager.kill_pane(&doomed).is_err());
}

#[test]
#[serial]
fn test_swap_panes_in_holding_session() {
    let Some(server) = TmuxServer::start() else {
        return;
    };
    let dir = TempDir::new().unwrap();
    let manager = server.manager("mossy-swap");

    let a = manager.create_pane(dir.path()).unwrap();
    let b = manager.create_pane(dir.path()).unwrap();
    manager.swap_pane(&a, &b).unwrap();

    assert!(manager.pane_exists(&a));
    assert!(manager.pane_exists(&b));
}

#[test]
#[serial]
fn test_user_session_sharing_name_prefix_is_left_alone() {
    let Some(server) = TmuxServer::start() else {
        return;
    };
    let dir = TempDir::new().unwrap();
    let manager = server.manager("mossy-park");

    assert!(server.tmux(&["new-session", "-d", "-s", "mossy-park-user"]));
    assert!(!manager.session_exists());
    assert_eq!(manager.container_state(), ContainerState::Absent);

    let pane = manager.create_pane(dir.path()).unwrap();
    assert_eq!(manager.holding_panes(), Some(vec![pane]));

    let user_panes = Command::new("tmux")
        .args(["-L", &server.socket, "list-panes", "-s", "-t", "=mossy-park-user", "-F", "#{pane_id}"])
        .output()
        .unwrap();
    assert_eq!(String::from_utf8_lossy(&user_panes.stdout).lines().count(), 1);
}
