//! # repofetch
//!
//! `repofetch` is a small library for acquiring and refreshing local working
//! copies of remote repositories across several version control systems. It
//! powers the `repofetch` CLI tool.
//!
//! ## Core Features
//!
//! - **One contract, many tools**: Git, Subversion, git-svn, Mercurial, Darcs,
//!   and Fossil behind a single clone/update trait.
//! - **Static registry**: backend identifiers and their aliases resolve to
//!   shared, immutable backend instances.
//! - **Typed failures**: directory preparation problems, missing tools, and
//!   non-zero exits surface as distinct error variants.
//!
//! ## Example
//!
//! ```rust,no_run
//! use repofetch::resolve;
//! use std::path::Path;
//! use url::Url;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = resolve("github").ok_or("unknown version control system")?;
//!     let remote = Url::parse("https://github.com/octocat/hello-world.git")?;
//!     backend.clone_repo(&remote, Path::new("/tmp/hello-world"), true)?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod vcs;

pub use error::{Result, VcsError};
pub use vcs::registry::resolve;
pub use vcs::runner::{CommandRunner, SystemRunner};
pub use vcs::VcsBackend;
