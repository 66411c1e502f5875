//! Git testing utilities

use anyhow::Result;
use std::path::Path;
use std::process::Command;

/// Sets up a git repository with user config suitable for scripted commits
pub fn setup_git_repo(path: &Path) -> Result<()> {
    let init_result = Command::new("git")
        .args(["init"])
        .current_dir(path)
        .output()?;

    if !init_result.status.success() {
        anyhow::bail!("Git not available - skipping test");
    }

    // Configure git user
    Command::new("git")
        .args(["config", "user.name", "Test User"])
        .current_dir(path)
        .output()?;

    Command::new("git")
        .args(["config", "user.email", "test@example.com"])
        .current_dir(path)
        .output()?;

    // Disable commit signing for tests
    Command::new("git")
        .args(["config", "commit.gpgsign", "false"])
        .current_dir(path)
        .output()?;

    Ok(())
}

/// Creates a commit adding `file_name` with `content`
pub fn create_test_commit(
    path: &Path,
    file_name: &str,
    content: &str,
    message: &str,
) -> Result<()> {
    std::fs::write(path.join(file_name), content)?;

    Command::new("git")
        .args(["add", file_name])
        .current_dir(path)
        .output()?;

    let commit_result = Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(path)
        .output()?;

    if !commit_result.status.success() {
        anyhow::bail!(
            "Failed to create commit: {}",
            String::from_utf8_lossy(&commit_result.stderr)
        );
    }

    Ok(())
}

/// Checks if git is available in the system
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
