//! Authentication command definitions.
//!
//! Tokens are obtained elsewhere; these commands only store them in, or
//! remove them from, the OS keyring.

use crate::commands::params::{
    resource_parameter, COMMAND_AUTH, COMMAND_CLEAR, COMMAND_SET, COMMAND_TOKEN, PARAMETER_TOKEN,
};
use clap::{Arg, Command};

/// Create the authentication command with all its subcommands.
pub fn auth_command() -> Command {
    Command::new(COMMAND_AUTH)
        .about("Access token management")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_TOKEN)
                .about("Manage stored access tokens")
                .subcommand_required(true)
                .subcommand(
                    Command::new(COMMAND_SET)
                        .about("Store an access token in the OS keyring")
                        .arg(resource_parameter())
                        .arg(
                            Arg::new(PARAMETER_TOKEN)
                                .long(PARAMETER_TOKEN)
                                .num_args(1)
                                .required(true)
                                .env("M365_TOKEN")
                                .hide_env_values(true)
                                .help("Bearer token issued for the resource"),
                        ),
                )
                .subcommand(
                    Command::new(COMMAND_CLEAR)
                        .about("Remove a stored access token")
                        .arg(resource_parameter()),
                ),
        )
}
