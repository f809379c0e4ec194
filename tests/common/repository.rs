//! Git repository management and setup utilities
//!
//! Provides functions for creating and managing test repositories with
//! various states for end-to-end verb testing.

#![allow(dead_code)]

use anyhow::{ensure, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the repository path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Runs a git command in the repository and fails loudly on a non-zero exit.
pub fn run_git(repo: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(repo).output()?;
    ensure!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Sets up a fresh git repository on a `main` branch with basic user
/// configuration, so commits never prompt.
pub fn setup_test_repo() -> Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let repo_path = temp_dir.path().to_path_buf();

    run_git(&repo_path, &["init", "-b", "main"])?;
    run_git(&repo_path, &["config", "user.name", "Test User"])?;
    run_git(&repo_path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo {
        temp_dir,
        path: repo_path,
    })
}

/// Sets up a git repository with an initial commit containing "initial.txt",
/// so log-based queries have history to work with.
pub fn setup_test_repo_with_initial_commit() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "initial.txt", "initial content\n")?;
    run_git(&repo.path, &["add", "initial.txt"])?;
    run_git(&repo.path, &["commit", "-m", "Initial commit"])?;

    Ok(repo)
}

/// Creates a file with specified content in the repository
pub fn create_file(repo: &Path, name: &str, content: &str) -> Result<()> {
    std::fs::write(repo.join(name), content)?;
    Ok(())
}

/// Creates and switches to a new branch
pub fn checkout_new_branch(repo: &Path, name: &str) -> Result<()> {
    run_git(repo, &["checkout", "-b", name])?;
    Ok(())
}

/// The current HEAD's full commit message, trimmed
pub fn last_commit_message(repo: &Path) -> Result<String> {
    run_git(repo, &["log", "-1", "--pretty=%B"])
}

/// The currently checked-out branch name
pub fn current_branch(repo: &Path) -> Result<String> {
    run_git(repo, &["rev-parse", "--abbrev-ref", "HEAD"])
}
