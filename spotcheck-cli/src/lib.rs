//! Command-line interface for planning spot-check audits.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod audit;
mod catalog;
mod error;

pub use catalog::JsonCatalog;
pub use error::CliError;

use audit::AuditArgs;

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_RATIO: &str = "ratio";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_CAPACITY: &str = "capacity";
pub(crate) const ENV_CATALOG: &str = "SPOTCHECK_CMDS_AUDIT_CATALOG";
pub(crate) const ENV_RATIO: &str = "SPOTCHECK_CMDS_AUDIT_RATIO";

/// Run the Spotcheck CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments or configuration are invalid, the
/// catalog cannot be read, or the audit cannot be planned.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Audit(args) => audit::run_audit(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "spotcheck",
    about = "Random spot-check sampling and inspection routes for asset audits",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sample assets from a catalog and plan a route from each one.
    Audit(AuditArgs),
}

#[cfg(test)]
mod tests;
