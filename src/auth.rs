//! Access token lookup.
//!
//! Tokens are acquired outside of this tool. A command only needs a bearer
//! token for the API it talks to, taken from an environment variable or,
//! failing that, from the OS keyring.

use crate::keyring::{Keyring, KeyringError};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;
use tracing::trace;

pub const ENV_GRAPH_TOKEN: &str = "M365_GRAPH_TOKEN";
pub const ENV_AZMGMT_TOKEN: &str = "M365_AZMGMT_TOKEN";

/// The API audience a request is sent to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Resource {
    /// Microsoft Graph
    #[strum(serialize = "graph")]
    #[serde(rename = "graph")]
    Graph,
    /// Azure Resource Manager
    #[strum(serialize = "azmgmt")]
    #[serde(rename = "azmgmt")]
    AzureManagement,
}

impl Resource {
    pub fn names() -> Vec<&'static str> {
        vec!["graph", "azmgmt"]
    }

    pub fn token_env_var(&self) -> &'static str {
        match self {
            Resource::Graph => ENV_GRAPH_TOKEN,
            Resource::AzureManagement => ENV_AZMGMT_TOKEN,
        }
    }

    fn keyring_key(&self) -> String {
        format!("access-token:{}", self)
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No access token for {resource}. Set {env} or run 'm365 auth token set --resource {resource}'")]
    MissingToken {
        resource: Resource,
        env: &'static str,
    },
    #[error(transparent)]
    KeyringError(#[from] KeyringError),
}

/// Supplies bearer tokens to the request gateway.
pub trait TokenProvider: Send + Sync {
    fn access_token(&self, resource: Resource) -> Result<String, AuthError>;
}

/// Environment variable first, keyring second.
#[derive(Default)]
pub struct DefaultTokenProvider {
    keyring: Keyring,
}

impl DefaultTokenProvider {
    pub fn store(&self, resource: Resource, token: &str) -> Result<(), AuthError> {
        Ok(self.keyring.put(&resource.keyring_key(), token)?)
    }

    pub fn clear(&self, resource: Resource) -> Result<(), AuthError> {
        Ok(self.keyring.delete(&resource.keyring_key())?)
    }
}

impl TokenProvider for DefaultTokenProvider {
    fn access_token(&self, resource: Resource) -> Result<String, AuthError> {
        let env = resource.token_env_var();
        if let Ok(token) = std::env::var(env) {
            if !token.trim().is_empty() {
                trace!("Using access token for {} from {}", resource, env);
                return Ok(token.trim().to_string());
            }
        }

        match self.keyring.get(&resource.keyring_key())? {
            Some(token) => {
                trace!("Using access token for {} from keyring", resource);
                Ok(token)
            }
            None => Err(AuthError::MissingToken { resource, env }),
        }
    }
}
