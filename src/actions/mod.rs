//! Command implementations.
//!
//! Each remote command follows the same shape: build typed options from the
//! parsed arguments, validate them, resolve identifiers, then issue the
//! requests through a [`crate::http_utils::RequestGateway`].

use strum::{Display, EnumIter, EnumString};

pub mod auth;
pub mod completions;
pub mod configuration;
pub mod flow;
pub mod planner;

#[cfg(test)]
pub(crate) mod test_support;

/// Every remote command the client knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum CommandName {
    #[strum(serialize = "flow owner add")]
    FlowOwnerAdd,
    #[strum(serialize = "planner task checklistitem add")]
    PlannerTaskChecklistItemAdd,
}

impl CommandName {
    pub fn description(&self) -> &'static str {
        match self {
            CommandName::FlowOwnerAdd => "Assigns/updates permissions to a Power Automate flow",
            CommandName::PlannerTaskChecklistItemAdd => {
                "Adds a new checklist item to a Planner task"
            }
        }
    }

    /// Columns shown by the text and CSV output modes.
    pub fn default_properties(&self) -> &'static [&'static str] {
        match self {
            CommandName::FlowOwnerAdd => &[],
            CommandName::PlannerTaskChecklistItemAdd => &["id", "title", "isChecked"],
        }
    }
}
