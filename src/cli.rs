use crate::{
    actions::{auth, completions, configuration as config_actions, flow, planner},
    commands::{
        COMMAND_ADD, COMMAND_AUTH, COMMAND_CHECKLISTITEM, COMMAND_CLEAR, COMMAND_COMPLETIONS,
        COMMAND_CONFIG, COMMAND_FLOW, COMMAND_GET, COMMAND_OWNER, COMMAND_PATH, COMMAND_PLANNER,
        COMMAND_SET, COMMAND_TASK, COMMAND_TOKEN,
    },
    configuration::Configuration,
    error::CliError,
};
use clap::ArgMatches;
use tracing::trace;

fn extract_subcommand_name(sub_matches: &ArgMatches) -> String {
    let message = match sub_matches.subcommand() {
        Some(m) => m.0,
        None => "unknown",
    };

    message.to_string()
}

/// Execute the CLI command selected by the parsed arguments.
///
/// # Arguments
///
/// * `configuration` - The loaded configuration
/// * `commands` - The parsed command-line arguments
///
/// # Returns
///
/// * `Ok(())` - If the command executed successfully
/// * `Err(CliError)` - If an error occurred during execution
pub async fn execute_command(
    configuration: Configuration,
    commands: &ArgMatches,
) -> Result<(), CliError> {
    trace!("Dispatching command...");

    match commands.subcommand() {
        Some((COMMAND_FLOW, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_OWNER, sub_matches)) => match sub_matches.subcommand() {
                Some((COMMAND_ADD, sub_matches)) => flow::execute(sub_matches, &configuration).await,
                _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                    sub_matches,
                ))),
            },
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        Some((COMMAND_PLANNER, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_TASK, sub_matches)) => match sub_matches.subcommand() {
                Some((COMMAND_CHECKLISTITEM, sub_matches)) => match sub_matches.subcommand() {
                    Some((COMMAND_ADD, sub_matches)) => {
                        planner::execute(sub_matches, &configuration).await
                    }
                    _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                        sub_matches,
                    ))),
                },
                _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                    sub_matches,
                ))),
            },
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        Some((COMMAND_AUTH, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_TOKEN, sub_matches)) => match sub_matches.subcommand() {
                Some((COMMAND_SET, sub_matches)) => auth::set_token(sub_matches),
                Some((COMMAND_CLEAR, sub_matches)) => auth::clear_token(sub_matches),
                _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                    sub_matches,
                ))),
            },
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        Some((COMMAND_CONFIG, sub_matches)) => match sub_matches.subcommand() {
            Some((COMMAND_GET, sub_matches)) => match sub_matches.subcommand() {
                Some((COMMAND_PATH, _)) => config_actions::print_configuration_path(),
                None => config_actions::print_configuration(sub_matches, &configuration),
                _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                    sub_matches,
                ))),
            },
            Some((COMMAND_SET, sub_matches)) => {
                config_actions::set_configuration(sub_matches, configuration)
            }
            _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
                sub_matches,
            ))),
        },
        Some((COMMAND_COMPLETIONS, sub_matches)) => completions::generate_completions(sub_matches),
        _ => Err(CliError::UnsupportedSubcommand(extract_subcommand_name(
            commands,
        ))),
    }
}
