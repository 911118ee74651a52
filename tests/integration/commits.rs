//! Commit listing and enrichment against a real repository

use std::fs;

use mossy::Git;

use super::helpers::*;

#[test]
fn test_push_status_follows_remote_branch() {
    let repo = init_test_repo();
    add_origin(&repo);
    let git = Git::system();

    let feature = git.add_worktree(&repo.root, "repo-feature", "feature").unwrap();
    let first = commit_file(&feature, "a.txt", "a\n", "First");
    run_git(&["push", "origin", "feature"], &feature);
    let second = commit_file(&feature, "b.txt", "b\n", "Second");

    let commits = git.list_commits(&repo.root, "feature").unwrap();
    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].hash, second);
    assert!(!commits[0].pushed);
    assert_eq!(commits[1].hash, first);
    assert!(commits[1].pushed);
}

#[test]
fn test_branch_without_remote_is_unpushed() {
    let repo = init_test_repo();
    add_origin(&repo);
    let git = Git::system();

    let feature = git.add_worktree(&repo.root, "repo-local", "local").unwrap();
    commit_file(&feature, "a.txt", "a\n", "Local one");
    commit_file(&feature, "b.txt", "b\n", "Local two");

    let commits = git.list_commits(&repo.root, "local").unwrap();
    assert_eq!(commits.len(), 2);
    assert!(commits.iter().all(|c| !c.pushed));
}

#[test]
fn test_commit_enrichment() {
    let repo = init_test_repo();
    let git = Git::system();

    let feature = git.add_worktree(&repo.root, "repo-rich", "rich").unwrap();
    fs::write(feature.join("logo.bin"), [0u8, 159, 146, 150, 0, 1, 2]).unwrap();
    fs::write(feature.join("lib.rs"), "fn a() {}\nfn b() {}\n").unwrap();
    run_git(&["add", "."], &feature);
    run_git(
        &[
            "commit",
            "-m",
            "Add logo; tidy: parser, lexer",
            "-m",
            "Co-authored-by: Claude <noreply@anthropic.com>\nCo-authored-by: Claude <noreply@anthropic.com>",
        ],
        &feature,
    );
    run_git(&["tag", "v0.1.0"], &feature);

    let commits = git.list_commits(&repo.root, "rich").unwrap();
    assert_eq!(commits.len(), 1);

    let commit = &commits[0];
    assert_eq!(commit.subject, "Add logo; tidy: parser, lexer");
    assert_eq!(commit.author, "Test User");
    assert_eq!(commit.tags, vec!["v0.1.0".to_string()]);
    assert_eq!(commit.ai_agents, vec!["Claude".to_string()]);
    assert!(commit.files.contains(&"logo.bin".to_string()));
    assert!(commit.files.contains(&"lib.rs".to_string()));
    assert_eq!(commit.diff.additions, 2);
    assert_eq!(commit.diff.deletions, 0);
}

#[test]
fn test_branch_at_default_has_no_commits() {
    let repo = init_test_repo();
    let git = Git::system();
    git.add_worktree(&repo.root, "repo-fresh", "fresh").unwrap();

    assert!(git.list_commits(&repo.root, "fresh").unwrap().is_empty());
}

#[test]
fn test_unknown_branch_is_error() {
    let repo = init_test_repo();
    let git = Git::system();

    assert!(git.list_commits(&repo.root, "no-such-branch").is_err());
}
