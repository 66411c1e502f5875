//! Mercurial backend
//!
//! Mercurial has no shallow clone mode, so the shallow preference is ignored.

use std::path::Path;
use std::process::Command;

use url::Url;

use super::runner::{CommandRunner, SystemRunner};
use super::{prepare_parent_dir, VcsBackend};
use crate::error::Result;

const HG_PROGRAM: &str = "hg";

const HG_CLONE_ARGS: &[&str] = &["clone"];
const HG_UPDATE_ARGS: &[&str] = &["pull", "--update"];

/// Backend for Mercurial repositories.
#[derive(Debug, Default)]
pub struct Mercurial<R = SystemRunner> {
    runner: R,
}

impl Mercurial {
    pub const fn new() -> Self {
        Self {
            runner: SystemRunner,
        }
    }
}

impl<R: CommandRunner> Mercurial<R> {
    pub const fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> VcsBackend for Mercurial<R> {
    fn clone_repo(&self, remote: &Url, local: &Path, _shallow: bool) -> Result<()> {
        prepare_parent_dir(local)?;

        let mut command = Command::new(HG_PROGRAM);
        command.args(HG_CLONE_ARGS).arg(remote.as_str()).arg(local);

        self.runner.run(command)
    }

    fn update(&self, local: &Path) -> Result<()> {
        let mut command = Command::new(HG_PROGRAM);
        command.args(HG_UPDATE_ARGS).current_dir(local);

        self.runner.run(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcs::runner::testing::RecordingRunner;
    use tempfile::TempDir;

    fn remote() -> Url {
        Url::parse("https://hg.example.com/project").unwrap()
    }

    #[test]
    fn test_shallow_preference_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let local = temp_dir.path().join("project");

        let shallow_runner = RecordingRunner::new();
        Mercurial::with_runner(&shallow_runner)
            .clone_repo(&remote(), &local, true)
            .unwrap();

        let full_runner = RecordingRunner::new();
        Mercurial::with_runner(&full_runner)
            .clone_repo(&remote(), &local, false)
            .unwrap();

        assert_eq!(shallow_runner.invocations(), full_runner.invocations());
        assert_eq!(
            shallow_runner.invocations()[0].args,
            [
                "clone",
                "https://hg.example.com/project",
                local.to_str().unwrap(),
            ]
        );
    }

    #[test]
    fn test_update_pulls_with_update_in_local() {
        let runner = RecordingRunner::new();
        let backend = Mercurial::with_runner(&runner);

        backend.update(Path::new("/src/project")).unwrap();

        let calls = runner.invocations();
        assert_eq!(calls[0].program, "hg");
        assert_eq!(calls[0].args, ["pull", "--update"]);
        assert_eq!(calls[0].cwd.as_deref(), Some(Path::new("/src/project")));
    }
}
