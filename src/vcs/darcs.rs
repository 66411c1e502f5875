//! Darcs backend
//!
//! Darcs spells shallow acquisition `--lazy`: patches are fetched on demand
//! instead of up front.

use std::path::Path;
use std::process::Command;

use url::Url;

use super::runner::{CommandRunner, SystemRunner};
use super::{prepare_parent_dir, VcsBackend};
use crate::error::Result;

const DARCS_PROGRAM: &str = "darcs";

const DARCS_GET_ARGS: &[&str] = &["get"];
const DARCS_LAZY_ARGS: &[&str] = &["--lazy"];
const DARCS_UPDATE_ARGS: &[&str] = &["pull"];

/// Backend for Darcs repositories.
#[derive(Debug, Default)]
pub struct Darcs<R = SystemRunner> {
    runner: R,
}

impl Darcs {
    pub const fn new() -> Self {
        Self {
            runner: SystemRunner,
        }
    }
}

impl<R: CommandRunner> Darcs<R> {
    pub const fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> VcsBackend for Darcs<R> {
    fn clone_repo(&self, remote: &Url, local: &Path, shallow: bool) -> Result<()> {
        prepare_parent_dir(local)?;

        let mut command = Command::new(DARCS_PROGRAM);
        command.args(DARCS_GET_ARGS);
        if shallow {
            command.args(DARCS_LAZY_ARGS);
        }
        command.arg(remote.as_str()).arg(local);

        self.runner.run(command)
    }

    fn update(&self, local: &Path) -> Result<()> {
        let mut command = Command::new(DARCS_PROGRAM);
        command.args(DARCS_UPDATE_ARGS).current_dir(local);

        self.runner.run(command)
    }
}
