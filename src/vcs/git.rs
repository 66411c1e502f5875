//! Git backend
//!
//! Also serves the `github` alias; a GitHub remote is a plain git remote once
//! the caller has resolved it to a URL.

use std::path::Path;
use std::process::Command;

use url::Url;

use super::runner::{CommandRunner, SystemRunner};
use super::{prepare_parent_dir, VcsBackend};
use crate::error::Result;

const GIT_PROGRAM: &str = "git";

// Git command arguments
const GIT_CLONE_ARGS: &[&str] = &["clone"];
const GIT_SHALLOW_ARGS: &[&str] = &["--depth", "1"];
const GIT_UPDATE_ARGS: &[&str] = &["pull", "--ff-only"];

/// Backend for git repositories.
///
/// Supports shallow clones via `--depth 1`; updates are fast-forward only so
/// local commits are never overwritten silently.
#[derive(Debug, Default)]
pub struct Git<R = SystemRunner> {
    runner: R,
}

impl Git {
    pub const fn new() -> Self {
        Self {
            runner: SystemRunner,
        }
    }
}

impl<R: CommandRunner> Git<R> {
    /// Uses `runner` in place of spawning real processes.
    pub const fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> VcsBackend for Git<R> {
    fn clone_repo(&self, remote: &Url, local: &Path, shallow: bool) -> Result<()> {
        prepare_parent_dir(local)?;

        let mut command = Command::new(GIT_PROGRAM);
        command.args(GIT_CLONE_ARGS);
        if shallow {
            command.args(GIT_SHALLOW_ARGS);
        }
        command.arg(remote.as_str()).arg(local);

        self.runner.run(command)
    }

    fn update(&self, local: &Path) -> Result<()> {
        let mut command = Command::new(GIT_PROGRAM);
        command.args(GIT_UPDATE_ARGS).current_dir(local);

        self.runner.run(command)
    }
}
