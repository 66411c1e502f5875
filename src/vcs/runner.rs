//! External process execution
//!
//! Backends describe tool invocations as [`std::process::Command`] values and
//! hand them to a [`CommandRunner`]. Production code uses [`SystemRunner`];
//! tests substitute a recording fake so no real tools are spawned.

use std::process::Command;

use crate::error::{Result, VcsError};

/// Executes one external command and maps its exit status to a result.
pub trait CommandRunner: Send + Sync {
    /// Runs `command` to completion, blocking until it exits.
    ///
    /// Succeeds only when the process exits with status zero. A process that
    /// cannot be started reports [`VcsError::ToolNotAvailable`]; an
    /// unsuccessful exit reports [`VcsError::ExternalTool`] carrying the tool
    /// name, the exit code when one is available, and trimmed stderr output.
    fn run(&self, command: Command) -> Result<()>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command: Command) -> Result<()> {
        (**self).run(command)
    }
}

/// Runner that spawns real processes and waits for them to exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, mut command: Command) -> Result<()> {
        let tool = command.get_program().to_string_lossy().into_owned();

        let output = command
            .output()
            .map_err(|source| VcsError::ToolNotAvailable {
                tool: tool.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        Err(VcsError::ExternalTool {
            tool,
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_reported_as_not_available() {
        let result = SystemRunner.run(Command::new("repofetch-no-such-tool"));

        match result {
            Err(VcsError::ToolNotAvailable { tool, .. }) => {
                assert_eq!(tool, "repofetch-no-such-tool");
            }
            other => panic!("expected ToolNotAvailable, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_reported_with_code_and_stderr() {
        let mut command = Command::new("sh");
        command.args(["-c", "echo oops >&2; exit 7"]);

        match SystemRunner.run(command) {
            Err(VcsError::ExternalTool { tool, code, stderr }) => {
                assert_eq!(tool, "sh");
                assert_eq!(code, Some(7));
                assert_eq!(stderr, "oops");
            }
            other => panic!("expected ExternalTool, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_is_success() {
        let mut command = Command::new("sh");
        command.args(["-c", "exit 0"]);

        SystemRunner.run(command).unwrap();
    }
}
