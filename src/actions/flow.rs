//! `flow owner add`: grants a user or group a role on a Power Automate flow.

use crate::auth::Resource;
use crate::commands::params::{
    PARAMETER_AS_ADMIN, PARAMETER_ENVIRONMENT_NAME, PARAMETER_FLOW_NAME, PARAMETER_GROUP_ID,
    PARAMETER_GROUP_NAME, PARAMETER_ROLE_NAME, PARAMETER_USER_ID, PARAMETER_USER_NAME,
};
use crate::configuration::Configuration;
use crate::error::CliError;
use crate::http_utils::{endpoint, ApiRequest, HttpClient, RequestGateway};
use crate::model::ModifyPermissionsRequest;
use crate::resolution_utils::{
    resolve_principal, GraphIdentityResolver, IdentityResolver, PrincipalOptions,
};
use crate::validation::{
    is_valid_user_principal_name, require_guid, require_one_of, validate, CommandOptions,
    OptionSet, Validator,
};
use clap::ArgMatches;
use tracing::{debug, info};
use url::Url;

pub const ALLOWED_ROLE_NAMES: [&str; 2] = ["CanView", "CanEdit"];

const FLOW_API_VERSION: &str = "2016-11-01";

pub const OPTION_SETS: [OptionSet; 1] = [OptionSet::new(&[
    PARAMETER_USER_ID,
    PARAMETER_USER_NAME,
    PARAMETER_GROUP_ID,
    PARAMETER_GROUP_NAME,
])];

pub const VALIDATORS: [Validator<FlowOwnerAddOptions>; 5] = [
    flow_name_is_guid,
    user_id_is_guid,
    user_name_is_upn,
    group_id_is_guid,
    role_name_is_allowed,
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowOwnerAddOptions {
    pub environment_name: String,
    pub flow_name: String,
    pub principal: PrincipalOptions,
    pub role_name: String,
    pub as_admin: bool,
}

impl FlowOwnerAddOptions {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CliError> {
        let required = |name: &str| -> Result<String, CliError> {
            matches
                .get_one::<String>(name)
                .cloned()
                .ok_or_else(|| CliError::MissingRequiredArgument(name.to_string()))
        };
        let optional = |name: &str| matches.get_one::<String>(name).cloned();

        Ok(FlowOwnerAddOptions {
            environment_name: required(PARAMETER_ENVIRONMENT_NAME)?,
            flow_name: required(PARAMETER_FLOW_NAME)?,
            principal: PrincipalOptions {
                user_id: optional(PARAMETER_USER_ID),
                user_name: optional(PARAMETER_USER_NAME),
                group_id: optional(PARAMETER_GROUP_ID),
                group_name: optional(PARAMETER_GROUP_NAME),
            },
            role_name: required(PARAMETER_ROLE_NAME)?,
            as_admin: matches.get_flag(PARAMETER_AS_ADMIN),
        })
    }
}

impl CommandOptions for FlowOwnerAddOptions {
    fn is_present(&self, option: &str) -> bool {
        match option {
            PARAMETER_USER_ID => self.principal.user_id.is_some(),
            PARAMETER_USER_NAME => self.principal.user_name.is_some(),
            PARAMETER_GROUP_ID => self.principal.group_id.is_some(),
            PARAMETER_GROUP_NAME => self.principal.group_name.is_some(),
            PARAMETER_AS_ADMIN => self.as_admin,
            PARAMETER_ENVIRONMENT_NAME | PARAMETER_FLOW_NAME | PARAMETER_ROLE_NAME => true,
            _ => false,
        }
    }
}

fn flow_name_is_guid(options: &FlowOwnerAddOptions) -> Result<(), String> {
    require_guid(&options.flow_name)
}

fn user_id_is_guid(options: &FlowOwnerAddOptions) -> Result<(), String> {
    options
        .principal
        .user_id
        .as_deref()
        .map_or(Ok(()), require_guid)
}

fn user_name_is_upn(options: &FlowOwnerAddOptions) -> Result<(), String> {
    match options.principal.user_name.as_deref() {
        Some(name) if !is_valid_user_principal_name(name) => {
            Err(format!("{} is not a valid userName.", name))
        }
        _ => Ok(()),
    }
}

fn group_id_is_guid(options: &FlowOwnerAddOptions) -> Result<(), String> {
    options
        .principal
        .group_id
        .as_deref()
        .map_or(Ok(()), require_guid)
}

fn role_name_is_allowed(options: &FlowOwnerAddOptions) -> Result<(), String> {
    require_one_of(&options.role_name, PARAMETER_ROLE_NAME, &ALLOWED_ROLE_NAMES)
}

/// `{azmgmt}providers/Microsoft.ProcessSimple/[scopes/admin/]environments/{env}/flows/{flow}/modifyPermissions`
pub fn modify_permissions_url(
    azmgmt_url: &Url,
    options: &FlowOwnerAddOptions,
) -> Result<Url, CliError> {
    let mut segments = vec!["providers", "Microsoft.ProcessSimple"];
    if options.as_admin {
        segments.extend(["scopes", "admin"]);
    }
    segments.extend([
        "environments",
        options.environment_name.as_str(),
        "flows",
        options.flow_name.as_str(),
        "modifyPermissions",
    ]);

    let mut url = endpoint(azmgmt_url, &segments)?;
    url.query_pairs_mut()
        .append_pair("api-version", FLOW_API_VERSION);
    Ok(url)
}

/// Validates the options, resolves the principal and posts the permission grant.
///
/// Nothing is printed on success.
pub async fn add_flow_owner(
    gateway: &dyn RequestGateway,
    resolver: &dyn IdentityResolver,
    azmgmt_url: &Url,
    options: &FlowOwnerAddOptions,
) -> Result<(), CliError> {
    validate(options, &OPTION_SETS, &VALIDATORS).map_err(CliError::ValidationError)?;

    info!(
        "Assigning permissions for {} with permissions {} to Power Automate flow {}",
        options.principal.display_value().unwrap_or_default(),
        options.role_name,
        options.flow_name
    );

    let principal = resolve_principal(&options.principal, resolver).await?;
    debug!("Resolved principal {} ({})", principal.id, principal.kind);

    let body = serde_json::to_value(ModifyPermissionsRequest::grant(
        principal,
        &options.role_name,
    ))?;
    let request = ApiRequest::post(
        Resource::AzureManagement,
        modify_permissions_url(azmgmt_url, options)?,
    )
    .header("accept", "application/json")
    .json(body);

    gateway.send(request).await?;
    Ok(())
}

pub async fn execute(matches: &ArgMatches, configuration: &Configuration) -> Result<(), CliError> {
    let options = FlowOwnerAddOptions::from_matches(matches)?;
    let client = HttpClient::from_configuration(configuration)?;
    let resolver = GraphIdentityResolver::new(&client, configuration.graph_url());

    add_flow_owner(&client, &resolver, configuration.azmgmt_url(), &options).await
}
