//! Error types for backend resolution and backend operations

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the registry and the version control backends
#[derive(Error, Debug)]
pub enum VcsError {
    /// The identifier is not present in the backend registry.
    #[error("unknown version control system: {name}")]
    UnknownBackend { name: String },

    /// The destination's parent directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    DirectoryPreparation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The external tool ran and exited unsuccessfully.
    #[error("{tool} {}: {stderr}", exit_description(.code))]
    ExternalTool {
        tool: String,
        code: Option<i32>,
        stderr: String,
    },

    /// The external tool binary could not be located or executed.
    #[error("{tool} could not be executed: {source}")]
    ToolNotAvailable {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The backend deliberately does not implement the requested operation.
    #[error("{vcs} {operation} is not supported")]
    Unsupported {
        vcs: &'static str,
        operation: &'static str,
    },
}

fn exit_description(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {code}"),
        None => String::from("was terminated by a signal"),
    }
}

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, VcsError>;
