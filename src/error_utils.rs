//! Remote error types and message unwrapping.
//!
//! Every failure coming back from the HTTP gateway is represented as a
//! [`RemoteError`]. Commands never look inside the provider specific error
//! envelope themselves; they call [`unwrap_remote_message`] to get the flat
//! message that is shown to the user.

use serde_json::Value;
use thiserror::Error;

/// Graph error codes that mean the addressed resource does not exist.
const NOT_FOUND_CODES: [&str; 4] = [
    "NotFound",
    "ResourceNotFound",
    "itemNotFound",
    "Request_ResourceNotFound",
];

/// Failure returned by the request gateway or by an identity lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RemoteError {
    /// The service answered with a non-success status code.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("{0}")]
    Transport(String),

    /// A successful response could not be parsed as JSON.
    #[error("Invalid JSON response: {0}")]
    InvalidResponse(String),

    /// No access token is available for the target resource.
    #[error("{0}")]
    Unauthenticated(String),

    /// A name could not be translated into a directory object identifier.
    #[error("{0}")]
    NotResolved(String),

    /// A configured API base URL cannot have path segments appended.
    #[error("{0} cannot be used as a base URL")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for RemoteError {
    fn from(error: reqwest::Error) -> Self {
        RemoteError::Transport(error.to_string())
    }
}

fn string_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Extracts the human readable message from a provider error envelope.
///
/// The lookup order is: the legacy OData envelope (`odata.error.message.value`),
/// the Graph / ARM envelope (`error.message`), a bare `message`, an OAuth style
/// `error_description`, and finally the raw body. `None` when the body is empty.
pub fn message_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(json) => {
            let candidates = [
                "/odata.error/message/value",
                "/error/message",
                "/message",
                "/error_description",
            ];
            for pointer in candidates {
                if let Some(message) = string_at(&json, pointer) {
                    return Some(message.to_string());
                }
            }
            match json {
                // A JSON string body is the message itself
                Value::String(s) if !s.is_empty() => Some(s),
                _ => Some(trimmed.to_string()),
            }
        }
        Err(_) => Some(trimmed.to_string()),
    }
}

/// Turns any remote failure into the flat message reported to the user.
pub fn unwrap_remote_message(error: &RemoteError) -> String {
    match error {
        RemoteError::Status { body, .. } => {
            message_from_body(body).unwrap_or_else(|| error.to_string())
        }
        RemoteError::Transport(message)
        | RemoteError::Unauthenticated(message)
        | RemoteError::NotResolved(message) => message.clone(),
        RemoteError::InvalidResponse(_) | RemoteError::InvalidBaseUrl(_) => error.to_string(),
    }
}

/// Returns true when the failure says the addressed resource does not exist.
pub fn is_not_found(error: &RemoteError) -> bool {
    match error {
        RemoteError::Status { status: 404, .. } => true,
        RemoteError::Status { body, .. } => serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|json| string_at(&json, "/error/code").map(str::to_owned))
            .map(|code| NOT_FOUND_CODES.contains(&code.as_str()))
            .unwrap_or(false),
        _ => false,
    }
}

/// Report an error consistently with user-facing output.
pub fn report_error<E: std::fmt::Display>(error: &E) {
    eprintln!("Error: {}", error);
}
