//! Fossil backend
//!
//! Fossil separates the repository database from the working checkout: clone
//! writes a single repository file, open materializes a checkout from it.
//! Acquisition is therefore two sequential invocations, and the repository
//! file keeps a fixed conventional name next to the checkout directory.

use std::fs;
use std::path::Path;
use std::process::Command;

use url::Url;

use super::runner::{CommandRunner, SystemRunner};
use super::{prepare_parent_dir, VcsBackend};
use crate::error::{Result, VcsError};

const FOSSIL_PROGRAM: &str = "fossil";

const FOSSIL_CLONE_ARGS: &[&str] = &["clone"];
const FOSSIL_OPEN_ARGS: &[&str] = &["open"];
const FOSSIL_UPDATE_ARGS: &[&str] = &["update"];

/// Conventional name of the repository database in the checkout's parent.
const FOSSIL_REPO_NAME: &str = ".fossil";

/// Backend for Fossil repositories.
///
/// Fossil has no shallow clone mode, so the shallow preference is ignored.
#[derive(Debug, Default)]
pub struct Fossil<R = SystemRunner> {
    runner: R,
}

impl Fossil {
    pub const fn new() -> Self {
        Self {
            runner: SystemRunner,
        }
    }
}

impl<R: CommandRunner> Fossil<R> {
    pub const fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> VcsBackend for Fossil<R> {
    fn clone_repo(&self, remote: &Url, local: &Path, _shallow: bool) -> Result<()> {
        prepare_parent_dir(local)?;

        let parent = match local.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let repo_file = parent.join(FOSSIL_REPO_NAME);

        let mut clone = Command::new(FOSSIL_PROGRAM);
        clone
            .args(FOSSIL_CLONE_ARGS)
            .arg(remote.as_str())
            .arg(&repo_file);
        self.runner.run(clone)?;

        // The checkout materializes inside `local`, which fossil does not
        // create on its own. The open step runs there instead of chdir-ing
        // the whole process.
        fs::create_dir_all(local).map_err(|source| VcsError::DirectoryPreparation {
            path: local.to_path_buf(),
            source,
        })?;

        let mut open = Command::new(FOSSIL_PROGRAM);
        open.args(FOSSIL_OPEN_ARGS)
            .arg(Path::new("..").join(FOSSIL_REPO_NAME))
            .current_dir(local);
        self.runner.run(open)
    }

    fn update(&self, local: &Path) -> Result<()> {
        let mut command = Command::new(FOSSIL_PROGRAM);
        command.args(FOSSIL_UPDATE_ARGS).current_dir(local);

        self.runner.run(command)
    }
}
