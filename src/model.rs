//! Data models for the Microsoft 365 resources the commands touch.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::Display;

pub const CHECKLIST_ITEM_ODATA_TYPE: &str = "microsoft.graph.plannerChecklistItem";

/// Kind of directory object a permission is granted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum PrincipalKind {
    User,
    Group,
}

/// A directory object with its canonical identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PrincipalKind,
}

/// Body of a `modifyPermissions` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifyPermissionsRequest {
    pub put: Vec<PermissionEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionEntry {
    pub properties: PermissionProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionProperties {
    pub principal: Principal,
    pub role_name: String,
}

impl ModifyPermissionsRequest {
    pub fn grant(principal: Principal, role_name: &str) -> Self {
        ModifyPermissionsRequest {
            put: vec![PermissionEntry {
                properties: PermissionProperties {
                    principal,
                    role_name: role_name.to_string(),
                },
            }],
        }
    }
}

/// The parts of `plannerTaskDetails` the checklist commands use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDetails {
    #[serde(rename = "@odata.etag", default)]
    pub etag: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub checklist: Map<String, Value>,
}

/// New checklist entry as sent in a PATCH body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItemUpdate {
    #[serde(rename = "@odata.type")]
    pub odata_type: String,
    pub title: String,
    pub is_checked: bool,
}

impl ChecklistItemUpdate {
    pub fn new(title: &str, is_checked: bool) -> Self {
        ChecklistItemUpdate {
            odata_type: CHECKLIST_ITEM_ODATA_TYPE.to_string(),
            title: title.to_string(),
            is_checked,
        }
    }
}

/// One row of the flattened checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub title: String,
    pub is_checked: bool,
}

impl ChecklistItem {
    /// Value of one output column, `Null` for unknown names.
    pub fn property(&self, name: &str) -> Value {
        match name {
            "id" => Value::String(self.id.clone()),
            "title" => Value::String(self.title.clone()),
            "isChecked" => Value::Bool(self.is_checked),
            _ => Value::Null,
        }
    }

    /// Flattens a checklist map, keyed by item id, into records.
    pub fn from_checklist(checklist: &Map<String, Value>) -> Vec<ChecklistItem> {
        checklist
            .iter()
            .map(|(id, item)| ChecklistItem {
                id: id.clone(),
                title: item
                    .get("title")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                is_checked: item
                    .get("isChecked")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_permission_body_shape() {
        let body = ModifyPermissionsRequest::grant(
            Principal {
                id: "g-123".to_string(),
                kind: PrincipalKind::Group,
            },
            "CanView",
        );
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "put": [
                    { "properties": { "principal": { "id": "g-123", "type": "Group" }, "roleName": "CanView" } }
                ]
            })
        );
    }

    #[test]
    fn test_task_details_etag() {
        let details: TaskDetails = serde_json::from_value(json!({
            "@odata.etag": "W/\"JzEtVGFza0RldGFpbHMgQEBAQEBAQEBAQEBAQEBBTCc=\"",
            "id": "BC3L9DGJ5UG2UQn4MlEbcZcALpqb"
        }))
        .unwrap();
        assert_eq!(
            details.etag.as_deref(),
            Some("W/\"JzEtVGFza0RldGFpbHMgQEBAQEBAQEBAQEBAQEBBTCc=\"")
        );
        assert!(details.checklist.is_empty());
    }

    #[test]
    fn test_checklist_item_property() {
        let item = ChecklistItem {
            id: "00000000-0000-0000-0000-000000000000".to_string(),
            title: "Checklist item title".to_string(),
            is_checked: true,
        };
        assert_eq!(item.property("title"), json!("Checklist item title"));
        assert_eq!(item.property("isChecked"), json!(true));
        assert_eq!(item.property("orderHint"), Value::Null);
    }

    #[test]
    fn test_checklist_flattening() {
        let checklist = json!({
            "00000000-0000-0000-0000-000000000000": { "title": "Checklist item title", "isChecked": false }
        });
        let items = ChecklistItem::from_checklist(checklist.as_object().unwrap());
        assert_eq!(
            items,
            vec![ChecklistItem {
                id: "00000000-0000-0000-0000-000000000000".to_string(),
                title: "Checklist item title".to_string(),
                is_checked: false,
            }]
        );
    }
}
