//! Configuration action logic.

use crate::commands::params::{PARAMETER_AZMGMT_URL, PARAMETER_GRAPH_URL, PARAMETER_TIMEOUT};
use crate::configuration::Configuration;
use crate::error::CliError;
use crate::format::Formattable;
use crate::param_utils::get_output_format;
use clap::ArgMatches;
use tracing::{debug, trace};
use url::Url;

/// Prints the effective configuration in the requested output mode.
pub fn print_configuration(
    matches: &ArgMatches,
    configuration: &Configuration,
) -> Result<(), CliError> {
    trace!("Executing \"config get\" command...");
    let format = get_output_format(matches);
    println!("{}", configuration.format(&format)?);
    Ok(())
}

pub fn print_configuration_path() -> Result<(), CliError> {
    let path = Configuration::get_default_configuration_file_path()?;
    println!("{}", path.display());
    Ok(())
}

/// Applies the supplied properties and persists the result.
pub fn set_configuration(
    matches: &ArgMatches,
    mut configuration: Configuration,
) -> Result<(), CliError> {
    trace!("Executing \"config set\" command...");

    if let Some(url) = matches.get_one::<Url>(PARAMETER_GRAPH_URL) {
        configuration.set_graph_url(url.clone());
    }
    if let Some(url) = matches.get_one::<Url>(PARAMETER_AZMGMT_URL) {
        configuration.set_azmgmt_url(url.clone());
    }
    if let Some(timeout) = matches.get_one::<u64>(PARAMETER_TIMEOUT) {
        configuration.set_timeout(*timeout)?;
    }

    configuration.save_to_default()?;
    debug!("Configuration saved");
    Ok(())
}
