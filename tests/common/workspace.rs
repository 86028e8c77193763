//! Temporary workspace management for integration tests
//!
//! Provides a scratch directory holding the files a session adds to its
//! repositories, plus an isolated config file location.

#![allow(dead_code)]

use assert_cmd::Command;
use cvhub::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test workspace containing the temporary directory and its path.
/// The TempDir must be kept alive for the duration of the test.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestWorkspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Config file location that never exists unless a test writes it
    pub fn config_path(&self) -> PathBuf {
        self.path.join("config").join("config.json")
    }
}

/// Sets up a fresh, empty workspace
pub fn setup_workspace() -> Result<TestWorkspace> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();
    Ok(TestWorkspace { temp_dir, path })
}

/// Creates a file with the given content and returns its full path as a string
///
/// # Arguments
///
/// * `workspace` - Workspace to create the file in
/// * `relative` - Path relative to the workspace root, parents are created
/// * `content` - Content to write to the file
pub fn create_file(workspace: &TestWorkspace, relative: &str, content: &str) -> Result<String> {
    let path = workspace.path.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path.to_string_lossy().into_owned())
}

/// Builds a `cvhub` command with colors and the intro disabled, using the
/// workspace's private config file
pub fn hub_command(workspace: &TestWorkspace) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("cvhub")?;
    cmd.arg("--no-color")
        .arg("--skip-intro")
        .arg("--config")
        .arg(workspace.config_path());
    Ok(cmd)
}
