use crate::auth::{DefaultTokenProvider, Resource};
use crate::commands::params::{PARAMETER_RESOURCE, PARAMETER_TOKEN};
use crate::error::CliError;
use clap::ArgMatches;
use std::str::FromStr;
use tracing::info;

fn resource_from(matches: &ArgMatches) -> Result<Resource, CliError> {
    let name = matches
        .get_one::<String>(PARAMETER_RESOURCE)
        .ok_or_else(|| CliError::MissingRequiredArgument(PARAMETER_RESOURCE.to_string()))?;
    Resource::from_str(name)
        .map_err(|_| CliError::ValidationError(format!("{} is not a valid resource.", name)))
}

/// Stores a bearer token in the OS keyring.
pub fn set_token(matches: &ArgMatches) -> Result<(), CliError> {
    let resource = resource_from(matches)?;
    let token = matches
        .get_one::<String>(PARAMETER_TOKEN)
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .ok_or_else(|| CliError::ValidationError("Specify a valid token".to_string()))?;

    DefaultTokenProvider::default().store(resource, token)?;
    info!("Stored access token for {}", resource);
    Ok(())
}

/// Removes a stored token. Clearing a token that was never stored succeeds.
pub fn clear_token(matches: &ArgMatches) -> Result<(), CliError> {
    let resource = resource_from(matches)?;
    DefaultTokenProvider::default().clear(resource)?;
    info!("Removed access token for {}", resource);
    Ok(())
}
