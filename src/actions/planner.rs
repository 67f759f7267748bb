//! `planner task checklistitem add`: reads a task's details, then patches a
//! new checklist entry into them using the etag from the read.

use crate::actions::CommandName;
use crate::auth::Resource;
use crate::commands::params::{PARAMETER_IS_CHECKED, PARAMETER_TASK_ID, PARAMETER_TITLE};
use crate::configuration::Configuration;
use crate::error::CliError;
use crate::error_utils::{is_not_found, RemoteError};
use crate::format::{render, OutputFormat};
use crate::http_utils::{endpoint, ApiRequest, HttpClient, RequestGateway};
use crate::model::{ChecklistItem, ChecklistItemUpdate, TaskDetails};
use crate::param_utils::get_output_format;
use crate::validation::{validate, CommandOptions, Validator};
use clap::ArgMatches;
use serde_json::{Map, Value};
use tracing::{debug, info};
use url::Url;
use uuid::Uuid;

pub const TASK_NOT_FOUND: &str = "Planner task was not found.";

/// The PATCH was sent but Planner answered without the updated details.
pub const TASK_DETAILS_NOT_RETURNED: &str =
    "Planner accepted the checklist item but did not return the updated task details.";

const ACCEPT_NO_METADATA: &str = "application/json;odata.metadata=none";

pub const VALIDATORS: [Validator<ChecklistItemAddOptions>; 2] = [task_id_is_set, title_is_set];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistItemAddOptions {
    pub task_id: String,
    pub title: String,
    pub is_checked: bool,
}

impl ChecklistItemAddOptions {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, CliError> {
        let required = |name: &str| -> Result<String, CliError> {
            matches
                .get_one::<String>(name)
                .cloned()
                .ok_or_else(|| CliError::MissingRequiredArgument(name.to_string()))
        };

        Ok(ChecklistItemAddOptions {
            task_id: required(PARAMETER_TASK_ID)?,
            title: required(PARAMETER_TITLE)?,
            is_checked: matches.get_flag(PARAMETER_IS_CHECKED),
        })
    }
}

impl CommandOptions for ChecklistItemAddOptions {
    fn is_present(&self, option: &str) -> bool {
        match option {
            PARAMETER_TASK_ID => !self.task_id.is_empty(),
            PARAMETER_TITLE => !self.title.is_empty(),
            PARAMETER_IS_CHECKED => self.is_checked,
            _ => false,
        }
    }
}

fn task_id_is_set(options: &ChecklistItemAddOptions) -> Result<(), String> {
    if options.task_id.trim().is_empty() {
        Err("Specify a valid taskId".to_string())
    } else {
        Ok(())
    }
}

fn title_is_set(options: &ChecklistItemAddOptions) -> Result<(), String> {
    if options.title.trim().is_empty() {
        Err("Specify a valid title".to_string())
    } else {
        Ok(())
    }
}

fn task_details_url(graph_url: &Url, task_id: &str) -> Result<Url, RemoteError> {
    endpoint(graph_url, &["v1.0", "planner", "tasks", task_id, "details"])
}

/// Reads the task details; a missing task becomes [`TASK_NOT_FOUND`].
async fn read_task_details(
    gateway: &dyn RequestGateway,
    url: &Url,
) -> Result<TaskDetails, CliError> {
    let request =
        ApiRequest::get(Resource::Graph, url.clone()).header("accept", ACCEPT_NO_METADATA);

    match gateway.send(request).await {
        Ok(details) => Ok(serde_json::from_value(details)?),
        Err(e) if is_not_found(&e) => {
            debug!("Task details read failed with {:?}", e);
            Err(CliError::CommandError(TASK_NOT_FOUND.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Shapes the updated checklist for the requested output mode.
///
/// JSON gets the checklist map as returned by Planner. Text and CSV get one
/// record per entry with the command's default columns.
pub fn checklist_payload(checklist: &Map<String, Value>, format: &OutputFormat) -> Value {
    if format.is_json() {
        return Value::Object(checklist.clone());
    }

    let columns = CommandName::PlannerTaskChecklistItemAdd.default_properties();
    let records = ChecklistItem::from_checklist(checklist)
        .into_iter()
        .map(|item| {
            let projected: Map<String, Value> = columns
                .iter()
                .map(|column| (column.to_string(), item.property(column)))
                .collect();
            Value::Object(projected)
        })
        .collect();

    Value::Array(records)
}

/// Adds a checklist item and returns the updated checklist shaped for `format`.
pub async fn add_checklist_item(
    gateway: &dyn RequestGateway,
    graph_url: &Url,
    options: &ChecklistItemAddOptions,
    format: &OutputFormat,
) -> Result<Value, CliError> {
    validate(options, &[], &VALIDATORS).map_err(CliError::ValidationError)?;

    let url = task_details_url(graph_url, &options.task_id)?;
    let details = read_task_details(gateway, &url).await?;
    let etag = details.etag.ok_or_else(|| {
        CliError::CommandError("Planner task details did not include an etag".to_string())
    })?;

    let key = Uuid::new_v4().to_string();
    info!("Adding checklist item {} to Planner task {}", key, options.task_id);

    let mut checklist = Map::new();
    checklist.insert(
        key,
        serde_json::to_value(ChecklistItemUpdate::new(&options.title, options.is_checked))?,
    );
    let mut body = Map::new();
    body.insert("checklist".to_string(), Value::Object(checklist));

    let request = ApiRequest::patch(Resource::Graph, url)
        .header("accept", ACCEPT_NO_METADATA)
        .header("If-Match", etag)
        .header("Prefer", "return=representation")
        .json(Value::Object(body));

    let updated = gateway.send(request).await?;
    if updated.is_null() {
        return Err(CliError::CommandError(TASK_DETAILS_NOT_RETURNED.to_string()));
    }
    let updated: TaskDetails = serde_json::from_value(updated)?;
    Ok(checklist_payload(&updated.checklist, format))
}

pub async fn execute(matches: &ArgMatches, configuration: &Configuration) -> Result<(), CliError> {
    let options = ChecklistItemAddOptions::from_matches(matches)?;
    let format = get_output_format(matches);
    let client = HttpClient::from_configuration(configuration)?;

    let payload = add_checklist_item(&client, configuration.graph_url(), &options, &format).await?;
    println!("{}", render(&payload, &format)?.trim_end());
    Ok(())
}
