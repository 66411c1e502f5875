//! Subversion backend

use std::path::Path;
use std::process::Command;

use url::Url;

use super::runner::{CommandRunner, SystemRunner};
use super::{prepare_parent_dir, VcsBackend};
use crate::error::Result;

const SVN_PROGRAM: &str = "svn";

// Subversion command arguments
const SVN_CHECKOUT_ARGS: &[&str] = &["checkout"];
const SVN_SHALLOW_ARGS: &[&str] = &["--depth", "1"];
const SVN_UPDATE_ARGS: &[&str] = &["update"];

/// Backend for Subversion repositories.
#[derive(Debug, Default)]
pub struct Subversion<R = SystemRunner> {
    runner: R,
}

impl Subversion {
    pub const fn new() -> Self {
        Self {
            runner: SystemRunner,
        }
    }
}

impl<R: CommandRunner> Subversion<R> {
    pub const fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> VcsBackend for Subversion<R> {
    fn clone_repo(&self, remote: &Url, local: &Path, shallow: bool) -> Result<()> {
        prepare_parent_dir(local)?;

        let mut command = Command::new(SVN_PROGRAM);
        command.args(SVN_CHECKOUT_ARGS);
        if shallow {
            command.args(SVN_SHALLOW_ARGS);
        }
        command.arg(remote.as_str()).arg(local);

        self.runner.run(command)
    }

    fn update(&self, local: &Path) -> Result<()> {
        let mut command = Command::new(SVN_PROGRAM);
        command.args(SVN_UPDATE_ARGS).current_dir(local);

        self.runner.run(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcs::runner::testing::RecordingRunner;
    use tempfile::TempDir;

    fn remote() -> Url {
        Url::parse("https://svn.example.com/project/trunk").unwrap()
    }

    #[test]
    fn test_shallow_checkout_limits_depth() {
        let temp_dir = TempDir::new().unwrap();
        let local = temp_dir.path().join("project");
        let runner = RecordingRunner::new();
        let backend = Subversion::with_runner(&runner);

        backend.clone_repo(&remote(), &local, true).unwrap();

        let calls = runner.invocations();
        assert_eq!(calls[0].program, "svn");
        assert_eq!(
            calls[0].args,
            [
                "checkout",
                "--depth",
                "1",
                "https://svn.example.com/project/trunk",
                local.to_str().unwrap(),
            ]
        );
    }

    #[test]
    fn test_full_checkout_omits_depth() {
        let temp_dir = TempDir::new().unwrap();
        let local = temp_dir.path().join("project");
        let runner = RecordingRunner::new();
        let backend = Subversion::with_runner(&runner);

        backend.clone_repo(&remote(), &local, false).unwrap();

        assert!(!runner.invocations()[0].args.contains(&"--depth".to_string()));
    }

    #[test]
    fn test_update_runs_in_local() {
        let runner = RecordingRunner::new();
        let backend = Subversion::with_runner(&runner);

        backend.update(Path::new("/src/project")).unwrap();

        let calls = runner.invocations();
        assert_eq!(calls[0].program, "svn");
        assert_eq!(calls[0].args, ["update"]);
        assert_eq!(calls[0].cwd.as_deref(), Some(Path::new("/src/project")));
    }
}
