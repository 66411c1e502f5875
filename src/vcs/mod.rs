//! Version control backends
//!
//! Each supported system implements [`VcsBackend`], a two-operation contract
//! for materializing and refreshing local working copies. Backends are
//! stateless; the registry hands out shared instances chosen by identifier.

pub mod cvs;
pub mod darcs;
pub mod fossil;
pub mod git;
pub mod git_svn;
pub mod mercurial;
pub mod registry;
pub mod runner;
pub mod subversion;

// Re-export commonly used items
pub use cvs::Cvs;
pub use darcs::Darcs;
pub use fossil::Fossil;
pub use git::Git;
pub use git_svn::GitSvn;
pub use mercurial::Mercurial;
pub use registry::resolve;
pub use runner::{CommandRunner, SystemRunner};
pub use subversion::Subversion;

use std::fs;
use std::path::Path;

use url::Url;

use crate::error::{Result, VcsError};

/// Capability contract shared by every version control backend.
pub trait VcsBackend: Send + Sync {
    /// Materializes a working copy of `remote` at `local`.
    ///
    /// Missing ancestors of `local` are created first. When `shallow` is set
    /// and the underlying tool supports a depth-limited fetch, history is
    /// truncated; backends without shallow support perform a full clone.
    fn clone_repo(&self, remote: &Url, local: &Path, shallow: bool) -> Result<()>;

    /// Refreshes the working copy at `local` without discarding local state.
    fn update(&self, local: &Path) -> Result<()>;
}

/// Creates all missing ancestors of `local`'s parent directory.
///
/// Pre-existing directories are not an error; creation is idempotent and safe
/// to race across processes.
pub(crate) fn prepare_parent_dir(local: &Path) -> Result<()> {
    match local.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|source| VcsError::DirectoryPreparation {
                path: parent.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}
