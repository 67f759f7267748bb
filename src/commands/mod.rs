//! CLI command definitions and argument parsing.
//!
//! This module defines all the CLI commands and their arguments using the clap crate.
//! Each command group lives in its own file; shared names and argument builders
//! are in [`params`].

use clap::{ArgMatches, Command};

pub mod auth;
pub mod completions;
pub mod config;
pub mod flow;
pub mod params;
pub mod planner;

pub use params::{
    COMMAND_ADD, COMMAND_AUTH, COMMAND_CHECKLISTITEM, COMMAND_CLEAR, COMMAND_COMPLETIONS,
    COMMAND_CONFIG, COMMAND_FLOW, COMMAND_GET, COMMAND_OWNER, COMMAND_PATH, COMMAND_PLANNER,
    COMMAND_SET, COMMAND_TASK, COMMAND_TOKEN, PARAMETER_DEBUG, PARAMETER_OUTPUT,
    PARAMETER_VERBOSE,
};

/// Build the complete command tree.
pub fn create_full_command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(params::output_parameter())
        .arg(params::pretty_parameter())
        .arg(params::headers_parameter())
        .arg(params::verbose_parameter())
        .arg(params::debug_parameter())
        .subcommand(flow::flow_command())
        .subcommand(planner::planner_command())
        .subcommand(auth::auth_command())
        .subcommand(config::config_command())
        .subcommand(completions::completions_command())
}

/// Parse the process arguments.
///
/// # Returns
///
/// An `ArgMatches` instance containing the parsed command-line arguments.
pub fn create_cli_commands() -> ArgMatches {
    create_full_command().get_matches()
}
