//! The m365 CLI client library.
//!
//! This crate provides the core functionality for the m365 CLI client, which
//! manages Microsoft 365 resources through Microsoft Graph and Azure Resource
//! Manager: Power Automate flow permissions and Planner task checklists.
//!
//! # Modules
//!
//! - `actions`: Command implementations (validate, resolve, request, render)
//! - `auth`: Access token lookup
//! - `cli`: Dispatch from parsed arguments to actions
//! - `commands`: CLI command definitions
//! - `configuration`: Configuration management
//! - `error_utils`: Remote errors and message unwrapping
//! - `format`: Output rendering for json, text and csv
//! - `http_utils`: Request description and the HTTP gateway
//! - `model`: Payloads exchanged with the APIs
//! - `resolution_utils`: User and group name resolution
//! - `validation`: Option sets and validators

pub mod actions;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod error;
pub mod error_utils;
pub mod exit_codes;
pub mod format;
pub mod http_utils;
pub mod keyring;
pub mod model;
pub mod param_utils;
pub mod resolution_utils;
pub mod validation;
