//! Power Automate command definitions.

use crate::actions::flow::ALLOWED_ROLE_NAMES;
use crate::actions::CommandName;
use crate::commands::params::{
    flag_parameter, optional_string_parameter, SuggestedValues, COMMAND_ADD, COMMAND_FLOW,
    COMMAND_OWNER, PARAMETER_AS_ADMIN, PARAMETER_ENVIRONMENT_NAME, PARAMETER_FLOW_NAME,
    PARAMETER_GROUP_ID, PARAMETER_GROUP_NAME, PARAMETER_ROLE_NAME, PARAMETER_USER_ID,
    PARAMETER_USER_NAME,
};
use clap::{Arg, Command};

/// Create the flow command with all its subcommands.
pub fn flow_command() -> Command {
    Command::new(COMMAND_FLOW)
        .about("Manage Power Automate flows")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_OWNER)
                .about("Manage flow permissions")
                .subcommand_required(true)
                .subcommand(
                    Command::new(COMMAND_ADD)
                        .about(CommandName::FlowOwnerAdd.description())
                        .arg(
                            Arg::new(PARAMETER_ENVIRONMENT_NAME)
                                .short('e')
                                .long(PARAMETER_ENVIRONMENT_NAME)
                                .num_args(1)
                                .required(true)
                                .help("The name of the environment the flow belongs to"),
                        )
                        .arg(
                            Arg::new(PARAMETER_FLOW_NAME)
                                .short('f')
                                .long(PARAMETER_FLOW_NAME)
                                .num_args(1)
                                .required(true)
                                .help("The name (GUID) of the flow"),
                        )
                        .arg(optional_string_parameter(
                            PARAMETER_USER_ID,
                            "The ID of the user. Specify either userId, userName, groupId or groupName",
                        ))
                        .arg(optional_string_parameter(
                            PARAMETER_USER_NAME,
                            "The user principal name of the user",
                        ))
                        .arg(optional_string_parameter(
                            PARAMETER_GROUP_ID,
                            "The ID of the group",
                        ))
                        .arg(optional_string_parameter(
                            PARAMETER_GROUP_NAME,
                            "The display name of the group",
                        ))
                        .arg(
                            Arg::new(PARAMETER_ROLE_NAME)
                                .long(PARAMETER_ROLE_NAME)
                                .num_args(1)
                                .required(true)
                                .help("The role to grant")
                                .value_parser(SuggestedValues(&ALLOWED_ROLE_NAMES)),
                        )
                        .arg(flag_parameter(
                            PARAMETER_AS_ADMIN,
                            "Run the command as admin for flows not owned by you",
                        )),
                ),
        )
}
