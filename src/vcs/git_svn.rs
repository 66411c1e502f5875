//! git-svn backend
//!
//! Drives Subversion remotes through git's `svn` subcommand. git-svn has no
//! shallow mode, so the shallow preference is ignored.

use std::path::Path;
use std::process::Command;

use url::Url;

use super::runner::{CommandRunner, SystemRunner};
use super::{prepare_parent_dir, VcsBackend};
use crate::error::Result;

const GIT_PROGRAM: &str = "git";

const GIT_SVN_CLONE_ARGS: &[&str] = &["svn", "clone"];
const GIT_SVN_UPDATE_ARGS: &[&str] = &["svn", "rebase"];

/// Backend for Subversion remotes accessed through git-svn.
#[derive(Debug, Default)]
pub struct GitSvn<R = SystemRunner> {
    runner: R,
}

impl GitSvn {
    pub const fn new() -> Self {
        Self {
            runner: SystemRunner,
        }
    }
}

impl<R: CommandRunner> GitSvn<R> {
    pub const fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> VcsBackend for GitSvn<R> {
    fn clone_repo(&self, remote: &Url, local: &Path, _shallow: bool) -> Result<()> {
        prepare_parent_dir(local)?;

        let mut command = Command::new(GIT_PROGRAM);
        command
            .args(GIT_SVN_CLONE_ARGS)
            .arg(remote.as_str())
            .arg(local);

        self.runner.run(command)
    }

    fn update(&self, local: &Path) -> Result<()> {
        let mut command = Command::new(GIT_PROGRAM);
        command.args(GIT_SVN_UPDATE_ARGS).current_dir(local);

        self.runner.run(command)
    }
}
