//! Command dispatch and handler modules.

mod check;
mod deploy;
mod modules;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Deploy { target, output } => {
            deploy::exec(&target, output.as_deref(), cli.verbose)
        }
        Command::Check => check::exec(cli.verbose),
        Command::Modules { format } => modules::exec(&format),
    }
}

/// Resolve the project root from the current working directory.
fn project_root() -> Result<std::path::PathBuf> {
    let cwd = std::env::current_dir().map_err(shipkit_util::errors::ShipkitError::Io)?;
    shipkit_ops::find_project_root(&cwd)
}
