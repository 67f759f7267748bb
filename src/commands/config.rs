//! Configuration command definitions.
//!
//! This module defines CLI commands related to configuration management.

use crate::commands::params::{
    COMMAND_CONFIG, COMMAND_GET, COMMAND_PATH, COMMAND_SET, PARAMETER_AZMGMT_URL,
    PARAMETER_GRAPH_URL, PARAMETER_TIMEOUT,
};
use clap::{Arg, Command};
use url::Url;

/// Create the config command with all its subcommands.
pub fn config_command() -> Command {
    Command::new(COMMAND_CONFIG)
        .about("Configuration management")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get configuration details")
                .subcommand(Command::new(COMMAND_PATH).about("Show configuration file path")),
        )
        .subcommand(
            Command::new(COMMAND_SET)
                .about("Set configuration properties")
                .arg(
                    Arg::new(PARAMETER_GRAPH_URL)
                        .long(PARAMETER_GRAPH_URL)
                        .num_args(1)
                        .help("Microsoft Graph base URL (e.g., https://graph.microsoft.com)")
                        .value_parser(clap::value_parser!(Url)),
                )
                .arg(
                    Arg::new(PARAMETER_AZMGMT_URL)
                        .long(PARAMETER_AZMGMT_URL)
                        .num_args(1)
                        .help("Azure Resource Manager base URL (e.g., https://management.azure.com/)")
                        .value_parser(clap::value_parser!(Url)),
                )
                .arg(
                    Arg::new(PARAMETER_TIMEOUT)
                        .long(PARAMETER_TIMEOUT)
                        .num_args(1)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64).range(1..)),
                )
                .group(
                    clap::ArgGroup::new("config-property")
                        .args([PARAMETER_GRAPH_URL, PARAMETER_AZMGMT_URL, PARAMETER_TIMEOUT])
                        .multiple(true)
                        .required(true),
                ),
        )
}
