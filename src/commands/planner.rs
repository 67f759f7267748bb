//! Planner command definitions.

use crate::actions::CommandName;
use crate::commands::params::{
    flag_parameter, COMMAND_ADD, COMMAND_CHECKLISTITEM, COMMAND_PLANNER, COMMAND_TASK,
    PARAMETER_IS_CHECKED, PARAMETER_TASK_ID, PARAMETER_TITLE,
};
use clap::{Arg, Command};

/// Create the planner command with all its subcommands.
pub fn planner_command() -> Command {
    Command::new(COMMAND_PLANNER)
        .about("Manage Microsoft Planner")
        .subcommand_required(true)
        .subcommand(
            Command::new(COMMAND_TASK)
                .about("Manage Planner tasks")
                .subcommand_required(true)
                .subcommand(
                    Command::new(COMMAND_CHECKLISTITEM)
                        .about("Manage the checklist of a Planner task")
                        .subcommand_required(true)
                        .subcommand(
                            Command::new(COMMAND_ADD)
                                .about(CommandName::PlannerTaskChecklistItemAdd.description())
                                .arg(
                                    Arg::new(PARAMETER_TASK_ID)
                                        .short('i')
                                        .long(PARAMETER_TASK_ID)
                                        .num_args(1)
                                        .required(true)
                                        .help("ID of the task"),
                                )
                                .arg(
                                    Arg::new(PARAMETER_TITLE)
                                        .short('t')
                                        .long(PARAMETER_TITLE)
                                        .num_args(1)
                                        .required(true)
                                        .help("Title of the checklist item"),
                                )
                                .arg(flag_parameter(
                                    PARAMETER_IS_CHECKED,
                                    "Mark the new checklist item as checked",
                                )),
                        ),
                ),
        )
}
