//! Worktree listing, add and remove against a real repository

use mossy::{BranchRef, Git, MossyError, WorktreeError};

use super::helpers::*;

#[test]
fn test_list_excludes_primary_checkout_in_order() {
    let repo = init_test_repo();
    let git = Git::system();

    git.add_worktree(&repo.root, "repo-alpha", "alpha").unwrap();
    git.add_worktree(&repo.root, "repo-beta", "beta").unwrap();

    let worktrees = git.list_worktrees(&repo.root).unwrap();
    assert_eq!(names(&worktrees), vec!["repo-alpha", "repo-beta"]);
    assert_eq!(worktrees[0].branch, BranchRef::Named("alpha".to_string()));
    assert!(!worktrees[0].head.is_empty());
}

#[test]
fn test_add_worktree_is_repository_sibling() {
    let repo = init_test_repo();
    let git = Git::system();

    let path = git.add_worktree(&repo.root, "repo-login", "").unwrap();
    assert_eq!(path, repo.sibling("repo-login"));
    assert!(path.join("README.md").exists());
    assert!(git.branch_exists("repo-login", &repo.root));
}

#[test]
fn test_diff_stats_against_default_branch() {
    let repo = init_test_repo();
    let git = Git::system();

    let feature = git.add_worktree(&repo.root, "repo-feature", "feature").unwrap();
    commit_file(&feature, "notes.txt", "one\ntwo\nthree\n", "Add notes");

    let detached = repo.sibling("repo-detached");
    run_git(
        &["worktree", "add", "--detach", &detached.to_string_lossy()],
        &repo.root,
    );

    let worktrees = git.list_worktrees(&repo.root).unwrap();
    assert_eq!(names(&worktrees), vec!["repo-feature", "repo-detached"]);
    assert_eq!(worktrees[0].diff.additions, 3);
    assert_eq!(worktrees[0].diff.deletions, 0);
    assert_eq!(worktrees[1].branch, BranchRef::Detached);
    assert!(worktrees[1].diff.is_empty());
}

#[test]
fn test_add_maps_git_errors() {
    let repo = init_test_repo();
    let git = Git::system();

    run_git(&["branch", "taken"], &repo.root);
    let err = git.add_worktree(&repo.root, "repo-x", "taken").unwrap_err();
    assert!(matches!(
        err,
        MossyError::Validation(WorktreeError::BranchExists(ref b)) if b == "taken"
    ));

    git.add_worktree(&repo.root, "repo-y", "y").unwrap();
    let err = git.add_worktree(&repo.root, "repo-y", "other").unwrap_err();
    assert!(matches!(
        err,
        MossyError::Validation(WorktreeError::WorktreeExists(ref n)) if n == "repo-y"
    ));

    let err = git.add_worktree(&repo.root, "repo-z", "bad..name").unwrap_err();
    assert!(matches!(
        err,
        MossyError::Validation(WorktreeError::InvalidBranchName(_))
    ));
}

#[test]
fn test_remove_with_branch_deletion() {
    let repo = init_test_repo();
    let git = Git::system();

    let path = git.add_worktree(&repo.root, "repo-done", "done").unwrap();
    let outcome = git
        .remove_worktree(&repo.root, &path, &BranchRef::Named("done".to_string()), true)
        .unwrap();

    assert!(outcome.is_clean());
    assert_eq!(outcome.value.deleted_branch.as_deref(), Some("done"));
    assert!(!path.exists());
    assert!(!git.branch_exists("done", &repo.root));
}

#[test]
fn test_remove_partial_failure_keeps_removal() {
    let repo = init_test_repo();
    let git = Git::system();

    let path = git.add_worktree(&repo.root, "repo-gone", "gone").unwrap();
    let outcome = git
        .remove_worktree(&repo.root, &path, &BranchRef::Named("ghost".to_string()), true)
        .unwrap();

    let warning = outcome.warning.expect("branch deletion should fail");
    assert!(warning.is_partial());
    assert!(warning.to_string().starts_with("worktree removed but branch deletion failed"));

    let worktrees = git.list_worktrees(&repo.root).unwrap();
    assert!(worktrees.is_empty());
    assert!(git.branch_exists("gone", &repo.root));
}

#[test]
fn test_rebase_dirty_worktree_reports_git_error() {
    let repo = init_test_repo();
    add_origin(&repo);
    let git = Git::system();

    let feature = git.add_worktree(&repo.root, "repo-dirty", "dirty").unwrap();
    commit_file(&repo.root, "upstream.txt", "upstream\n", "Upstream work");
    run_git(&["push", "origin", "main"], &repo.root);
    std::fs::write(feature.join("README.md"), "# Uncommitted edit\n").unwrap();

    let err = git.rebase_onto_default(&repo.root, &feature).unwrap_err();
    assert!(matches!(err, MossyError::Command { .. }));
    assert_eq!(err.to_string().lines().count(), 1);
    assert!(feature.join("README.md").exists());
}

#[test]
fn test_list_outside_repository_fails_with_git_message() {
    let temp = tempfile::TempDir::new().unwrap();
    let err = Git::system().list_worktrees(temp.path()).unwrap_err();
    assert!(matches!(err, MossyError::Command { .. }));
    assert!(err.to_string().contains("not a git repository"));
}

#[test]
fn test_list_all_worktrees_isolates_failures() {
    let repo = init_test_repo();
    let temp = tempfile::TempDir::new().unwrap();
    let git = Git::system();
    git.add_worktree(&repo.root, "repo-a", "a").unwrap();

    let results = git.list_all_worktrees(&[temp.path().to_path_buf(), repo.root.clone()]);
    assert!(results[0].worktrees.is_err());
    assert_eq!(results[1].worktrees.as_ref().unwrap().len(), 1);
}

#[test]
fn test_rebase_onto_default() {
    let repo = init_test_repo();
    add_origin(&repo);
    let git = Git::system();

    let feature = git.add_worktree(&repo.root, "repo-feature", "feature").unwrap();
    commit_file(&feature, "feature.txt", "feature\n", "Feature work");

    commit_file(&repo.root, "upstream.txt", "upstream\n", "Upstream work");
    run_git(&["push", "origin", "main"], &repo.root);

    let onto = git.rebase_onto_default(&repo.root, &feature).unwrap();
    assert_eq!(onto, "origin/main");
    assert!(feature.join("upstream.txt").exists());
    assert!(feature.join("feature.txt").exists());
}

#[test]
fn test_rebase_conflict_is_aborted() {
    let repo = init_test_repo();
    add_origin(&repo);
    let git = Git::system();

    let feature = git.add_worktree(&repo.root, "repo-feature", "feature").unwrap();
    let before = commit_file(&feature, "README.md", "# Feature title\n", "Retitle on feature");

    commit_file(&repo.root, "README.md", "# Main title\n", "Retitle on main");
    run_git(&["push", "origin", "main"], &repo.root);

    let err = git.rebase_onto_default(&repo.root, &feature).unwrap_err();
    assert!(matches!(err, MossyError::RebaseConflict(_)));
    assert_eq!(err.to_string().lines().count(), 1);
    assert!(err.to_string().contains("CONFLICT"));
    assert!(err.to_string().contains("README.md"));

    assert_eq!(run_git(&["rev-parse", "HEAD"], &feature), before);
    assert_eq!(run_git(&["status", "--porcelain"], &feature), "");
}

#[test]
fn test_git_is_available() {
    mossy::git::check_git_available().unwrap();
    Git::system().check_available().unwrap();
}
