//! repofetch: clone and update remote repositories across version control systems
//!
//! Thin dispatcher over the backend registry: pick a backend by identifier,
//! then hand it the remote URL and the destination path.

use std::path::Path;

use anyhow::{anyhow, Result};
use clap::{Arg, ArgMatches, Command as ClapCommand};
use url::Url;

use repofetch::{resolve, VcsBackend, VcsError};

const DEFAULT_VCS: &str = "git";
const VCS_HELP: &str = "Backend identifier (git, svn, git-svn, hg, darcs, fossil, ...)";

fn build_cli() -> ClapCommand {
    ClapCommand::new("repofetch")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Clone and update remote repositories across version control systems")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            ClapCommand::new("get")
                .about("Clone a remote repository into a local path")
                .arg(
                    Arg::new("vcs")
                        .long("vcs")
                        .value_name("ID")
                        .default_value(DEFAULT_VCS)
                        .help(VCS_HELP),
                )
                .arg(
                    Arg::new("shallow")
                        .long("shallow")
                        .help("Prefer a history-limited clone where the backend supports it")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("remote")
                        .required(true)
                        .help("Remote repository URL"),
                )
                .arg(
                    Arg::new("path")
                        .required(true)
                        .help("Destination path for the working copy"),
                ),
        )
        .subcommand(
            ClapCommand::new("update")
                .about("Refresh an existing working copy")
                .arg(
                    Arg::new("vcs")
                        .long("vcs")
                        .value_name("ID")
                        .default_value(DEFAULT_VCS)
                        .help(VCS_HELP),
                )
                .arg(Arg::new("path").required(true).help("Path of the working copy")),
        )
}

/// Resolves the `--vcs` identifier against the backend registry
fn backend_for(matches: &ArgMatches) -> Result<&'static dyn VcsBackend> {
    let vcs = matches
        .get_one::<String>("vcs")
        .map(String::as_str)
        .unwrap_or(DEFAULT_VCS);

    resolve(vcs).ok_or_else(|| {
        VcsError::UnknownBackend {
            name: vcs.to_string(),
        }
        .into()
    })
}

fn required_arg<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing required argument: {name}"))
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("get", args)) => {
            let backend = backend_for(args)?;
            let remote = Url::parse(required_arg(args, "remote")?)?;
            let path = Path::new(required_arg(args, "path")?);

            backend.clone_repo(&remote, path, args.get_flag("shallow"))?;
            println!("✅ cloned into {}", path.display());
        }
        Some(("update", args)) => {
            let backend = backend_for(args)?;
            let path = Path::new(required_arg(args, "path")?);

            backend.update(path)?;
            println!("✅ updated {}", path.display());
        }
        _ => unreachable!("subcommand is required"),
    }

    Ok(())
}
