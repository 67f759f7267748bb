//! Fakes shared by the command tests.

use crate::error_utils::RemoteError;
use crate::http_utils::{ApiRequest, RequestGateway};
use crate::resolution_utils::IdentityResolver;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct RecordingGateway {
    responses: Mutex<VecDeque<Result<Value, RemoteError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl RecordingGateway {
    pub fn new(responses: Vec<Result<Value, RemoteError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RequestGateway for RecordingGateway {
    async fn send(&self, request: ApiRequest) -> Result<Value, RemoteError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}

/// Resolver with fixed answers that remembers what it was asked.
#[derive(Default)]
pub struct RecordingResolver {
    pub user_id: Option<String>,
    pub group_result: Option<Result<String, RemoteError>>,
    pub calls: Mutex<Vec<String>>,
}

#[async_trait]
impl IdentityResolver for RecordingResolver {
    async fn user_id_by_upn(&self, upn: &str) -> Result<String, RemoteError> {
        self.calls.lock().unwrap().push(format!("user:{}", upn));
        self.user_id.clone().ok_or_else(|| {
            RemoteError::NotResolved(format!(
                "The specified user with user name {} does not exist",
                upn
            ))
        })
    }

    async fn group_id_by_display_name(&self, display_name: &str) -> Result<String, RemoteError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("group:{}", display_name));
        self.group_result.clone().unwrap_or_else(|| {
            Err(RemoteError::NotResolved(format!(
                "The specified group '{}' does not exist.",
                display_name
            )))
        })
    }
}
