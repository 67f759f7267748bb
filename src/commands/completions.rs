//! Completions command definitions.
//!
//! This module defines the CLI command for generating shell completions.

use crate::commands::params::{COMMAND_COMPLETIONS, PARAMETER_SHELL};
use clap::{Arg, Command};
use clap_complete::Shell;

/// Create the completions command.
pub fn completions_command() -> Command {
    Command::new(COMMAND_COMPLETIONS)
        .about("Generate shell completions for various shells")
        .arg(
            Arg::new(PARAMETER_SHELL)
                .help("The shell to generate completions for")
                .required(true)
                .value_parser(clap::value_parser!(Shell)),
        )
}
