//! CVS stub
//!
//! CVS remotes are recognized but deliberately unsupported; both operations
//! fail without spawning any external process.

use std::path::Path;

use url::Url;

use super::VcsBackend;
use crate::error::{Result, VcsError};

const CVS_NAME: &str = "cvs";

/// Stub backend for CVS repositories.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cvs;

impl VcsBackend for Cvs {
    fn clone_repo(&self, _remote: &Url, _local: &Path, _shallow: bool) -> Result<()> {
        Err(VcsError::Unsupported {
            vcs: CVS_NAME,
            operation: "clone",
        })
    }

    fn update(&self, _local: &Path) -> Result<()> {
        Err(VcsError::Unsupported {
            vcs: CVS_NAME,
            operation: "update",
        })
    }
}
