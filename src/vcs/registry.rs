//! Backend registry
//!
//! Process-wide, read-only mapping from backend identifiers and their aliases
//! to shared backend instances. Initialized once on first lookup; safe for
//! unsynchronized concurrent reads afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::{Cvs, Darcs, Fossil, Git, GitSvn, Mercurial, Subversion, VcsBackend};

static GIT: Git = Git::new();
static SUBVERSION: Subversion = Subversion::new();
static GIT_SVN: GitSvn = GitSvn::new();
static MERCURIAL: Mercurial = Mercurial::new();
static DARCS: Darcs = Darcs::new();
static FOSSIL: Fossil = Fossil::new();
static CVS: Cvs = Cvs;

static REGISTRY: LazyLock<HashMap<&'static str, &'static dyn VcsBackend>> = LazyLock::new(|| {
    let backends: [(&[&str], &'static dyn VcsBackend); 7] = [
        (&["git", "github"], &GIT),
        (&["svn", "subversion"], &SUBVERSION),
        (&["git-svn"], &GIT_SVN),
        (&["hg", "mercurial"], &MERCURIAL),
        (&["darcs"], &DARCS),
        (&["fossil"], &FOSSIL),
        (&["cvs"], &CVS),
    ];

    let mut registry = HashMap::new();
    for (identifiers, backend) in backends {
        for identifier in identifiers {
            registry.insert(*identifier, backend);
        }
    }
    registry
});

/// Looks up the backend registered for `vcs`.
///
/// Identifiers are case-sensitive; aliases of one system resolve to the same
/// shared instance. Returns `None` for unregistered identifiers.
pub fn resolve(vcs: &str) -> Option<&'static dyn VcsBackend> {
    REGISTRY.get(vcs).copied()
}
