//! Completions action logic.
//!
//! This module contains the logic for generating shell completions.

use crate::commands::params::PARAMETER_SHELL;
use crate::error::CliError;
use clap::ArgMatches;
use clap_complete::Shell;
use std::io;

/// Generate completions for the specified shell and write to stdout.
pub fn generate_completions(matches: &ArgMatches) -> Result<(), CliError> {
    let shell = *matches
        .get_one::<Shell>(PARAMETER_SHELL)
        .ok_or_else(|| CliError::MissingRequiredArgument(PARAMETER_SHELL.to_string()))?;

    // Completions cover the whole command tree, not just this subcommand
    let mut cmd = crate::commands::create_full_command();
    clap_complete::generate(shell, &mut cmd, env!("CARGO_PKG_NAME"), &mut io::stdout());

    Ok(())
}
