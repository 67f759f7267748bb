//! Shared command parameters for all CLI commands.
//!
//! This module defines the command and parameter names used across the
//! command modules, together with the builders for arguments that more than
//! one command needs.

use crate::auth::Resource;
use crate::format::OutputFormat;
use clap::builder::{PossibleValue, StringValueParser, TypedValueParser};
use clap::{Arg, ArgAction};
use std::ffi::OsStr;

// Command groups
pub const COMMAND_FLOW: &str = "flow";
pub const COMMAND_OWNER: &str = "owner";
pub const COMMAND_PLANNER: &str = "planner";
pub const COMMAND_TASK: &str = "task";
pub const COMMAND_CHECKLISTITEM: &str = "checklistitem";
pub const COMMAND_AUTH: &str = "auth";
pub const COMMAND_TOKEN: &str = "token";
pub const COMMAND_CONFIG: &str = "config";
pub const COMMAND_COMPLETIONS: &str = "completions";

// Verbs
pub const COMMAND_ADD: &str = "add";
pub const COMMAND_GET: &str = "get";
pub const COMMAND_SET: &str = "set";
pub const COMMAND_CLEAR: &str = "clear";
pub const COMMAND_PATH: &str = "path";

// Global parameters
pub const PARAMETER_OUTPUT: &str = "output";
pub const PARAMETER_PRETTY: &str = "pretty";
pub const PARAMETER_HEADERS: &str = "headers";
pub const PARAMETER_VERBOSE: &str = "verbose";
pub const PARAMETER_DEBUG: &str = "debug";

// Flow parameters
pub const PARAMETER_ENVIRONMENT_NAME: &str = "environmentName";
pub const PARAMETER_FLOW_NAME: &str = "flowName";
pub const PARAMETER_USER_ID: &str = "userId";
pub const PARAMETER_USER_NAME: &str = "userName";
pub const PARAMETER_GROUP_ID: &str = "groupId";
pub const PARAMETER_GROUP_NAME: &str = "groupName";
pub const PARAMETER_ROLE_NAME: &str = "roleName";
pub const PARAMETER_AS_ADMIN: &str = "asAdmin";

// Planner parameters
pub const PARAMETER_TASK_ID: &str = "taskId";
pub const PARAMETER_TITLE: &str = "title";
pub const PARAMETER_IS_CHECKED: &str = "isChecked";

// Auth and configuration parameters
pub const PARAMETER_RESOURCE: &str = "resource";
pub const PARAMETER_TOKEN: &str = "token";
pub const PARAMETER_GRAPH_URL: &str = "graph-url";
pub const PARAMETER_AZMGMT_URL: &str = "azmgmt-url";
pub const PARAMETER_TIMEOUT: &str = "timeout";
pub const PARAMETER_SHELL: &str = "shell";

/// Accepts any string but advertises a fixed list of values to help and
/// shell completion. The command's own validators decide what is valid.
#[derive(Clone, Debug)]
pub struct SuggestedValues(pub &'static [&'static str]);

impl TypedValueParser for SuggestedValues {
    type Value = String;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, clap::Error> {
        StringValueParser::new().parse_ref(cmd, arg, value)
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        Some(Box::new(self.0.iter().map(|v| PossibleValue::new(*v))))
    }
}

/// Create the global output parameter.
pub fn output_parameter() -> Arg {
    Arg::new(PARAMETER_OUTPUT)
        .short('o')
        .long(PARAMETER_OUTPUT)
        .num_args(1)
        .required(false)
        .env("M365_OUTPUT")
        .default_value("json")
        .global(true)
        .help("Output type")
        .value_parser(OutputFormat::names())
}

/// Pretty-print JSON output.
pub fn pretty_parameter() -> Arg {
    Arg::new(PARAMETER_PRETTY)
        .long(PARAMETER_PRETTY)
        .action(ArgAction::SetTrue)
        .required(false)
        .global(true)
        .help("Format JSON output for humans")
}

/// Include a header row in CSV output.
pub fn headers_parameter() -> Arg {
    Arg::new(PARAMETER_HEADERS)
        .long(PARAMETER_HEADERS)
        .action(ArgAction::SetTrue)
        .required(false)
        .env("M365_HEADERS")
        .global(true)
        .help("Include a header row in CSV output")
}

pub fn verbose_parameter() -> Arg {
    Arg::new(PARAMETER_VERBOSE)
        .short('v')
        .long(PARAMETER_VERBOSE)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Runs command with verbose logging")
}

pub fn debug_parameter() -> Arg {
    Arg::new(PARAMETER_DEBUG)
        .long(PARAMETER_DEBUG)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Runs command with debug logging")
}

/// Optional string parameter with only a long name, as used by the
/// alternative principal options.
pub fn optional_string_parameter(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .num_args(1)
        .required(false)
        .help(help)
}

/// Boolean switch, defaults to false.
pub fn flag_parameter(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .action(ArgAction::SetTrue)
        .required(false)
        .help(help)
}

/// Create the token resource parameter.
pub fn resource_parameter() -> Arg {
    Arg::new(PARAMETER_RESOURCE)
        .short('r')
        .long(PARAMETER_RESOURCE)
        .num_args(1)
        .required(true)
        .help("API the access token is issued for")
        .value_parser(Resource::names())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    #[test]
    fn test_suggested_values_accept_anything() {
        let cmd = Command::new("test").arg(
            Arg::new(PARAMETER_ROLE_NAME)
                .long(PARAMETER_ROLE_NAME)
                .value_parser(SuggestedValues(&["CanView", "CanEdit"])),
        );
        let matches = cmd
            .try_get_matches_from(["test", "--roleName", "Owner"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>(PARAMETER_ROLE_NAME).map(String::as_str),
            Some("Owner")
        );
    }

    #[test]
    fn test_suggested_values_are_advertised() {
        let arg = Arg::new(PARAMETER_ROLE_NAME).value_parser(SuggestedValues(&["CanView", "CanEdit"]));
        let names: Vec<String> = arg
            .get_possible_values()
            .iter()
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, vec!["CanView", "CanEdit"]);
    }
}
