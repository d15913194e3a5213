//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Test fixture that creates a real git repository.
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new test repository with an initial commit on main.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init", "-b", "main"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);
        run_git(dir.path(), &["config", "commit.gpgsign", "false"]);
        run_git(dir.path(), &["config", "tag.gpgsign", "false"]);

        std::fs::write(dir.path().join("README.md"), "# Test Repo\n").unwrap();
        run_git(dir.path(), &["add", "README.md"]);
        run_git(dir.path(), &["commit", "-m", "Initial commit"]);

        Self { dir }
    }

    /// Get the path to the repository.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create an empty commit and return its id.
    pub fn commit(&self, message: &str) -> String {
        run_git(self.path(), &["commit", "--allow-empty", "-m", message]);
        self.head_oid()
    }

    /// Tag HEAD.
    pub fn tag(&self, name: &str) {
        run_git(self.path(), &["tag", name]);
    }

    /// Add a remote.
    pub fn add_remote(&self, name: &str, url: &str) {
        run_git(self.path(), &["remote", "add", name, url]);
    }

    /// Write a file relative to the repository root.
    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.path().join(name), contents).unwrap();
    }

    /// Read a file relative to the repository root.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path().join(name)).unwrap()
    }

    /// Get HEAD OID.
    pub fn head_oid(&self) -> String {
        let output = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(self.path())
            .output()
            .expect("git rev-parse failed");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }
}

/// Run a git command in the given directory.
pub fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

/// A repository with `v1.2.0` tagged and two commits after it.
///
/// Returns the repo and the ids of the two new commits (older first).
pub fn released_repo() -> (TestRepo, String, String) {
    let repo = TestRepo::new();
    repo.commit("Release 1.2.0");
    repo.tag("v1.2.0");
    let feature = repo.commit("Add feature (#41)");
    let fix = repo.commit("Fix bug (#42)");
    (repo, feature, fix)
}
