//! HTTP utilities for the m365 CLI client.
//!
//! Commands describe their calls as [`ApiRequest`] values and hand them to a
//! [`RequestGateway`]. The production gateway, [`HttpClient`], attaches the
//! bearer token for the request's resource and default headers, sends the
//! request with `reqwest`, and converts every failure into a [`RemoteError`].

use crate::auth::{DefaultTokenProvider, Resource, TokenProvider};
use crate::configuration::Configuration;
use crate::error_utils::RemoteError;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, error, trace};
use url::{form_urlencoded, Url};

pub const USER_AGENT: &str = "m365-rs";

/// A single outbound API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub resource: Resource,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, resource: Resource, url: Url) -> Self {
        Self {
            method,
            resource,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(resource: Resource, url: Url) -> Self {
        Self::new(Method::GET, resource, url)
    }

    pub fn post(resource: Resource, url: Url) -> Self {
        Self::new(Method::POST, resource, url)
    }

    pub fn patch(resource: Resource, url: Url) -> Self {
        Self::new(Method::PATCH, resource, url)
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Case-insensitive header lookup.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Executes authenticated API calls.
///
/// A successful call yields the parsed JSON body, or `Value::Null` when the
/// service answered without content.
#[async_trait]
pub trait RequestGateway: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Value, RemoteError>;
}

/// Percent-encodes a value for use inside a URL, spaces as `%20`.
pub fn encode_query_parameter(value: &str) -> String {
    // byte_serialize already turns a literal '+' into %2B, so every '+' left is a space
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Appends path segments to a base URL. Each segment is percent-encoded.
pub fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, RemoteError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| RemoteError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Configuration for HTTP requests with common settings
#[derive(Debug, Clone)]
pub struct HttpRequestConfig {
    /// Default headers to include with all requests
    pub default_headers: HashMap<String, String>,
    /// Request timeout in seconds
    pub timeout: u64,
}

impl Default for HttpRequestConfig {
    fn default() -> Self {
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), USER_AGENT.to_string());

        Self {
            default_headers,
            timeout: crate::configuration::DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl HttpRequestConfig {
    pub fn from_configuration(configuration: &Configuration) -> Self {
        Self {
            timeout: configuration.timeout(),
            ..Self::default()
        }
    }
}

/// HTTP client wrapper with common request handling logic
#[derive(Clone)]
pub struct HttpClient {
    client: Arc<Client>,
    config: HttpRequestConfig,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(
        config: HttpRequestConfig,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            config,
            tokens,
        })
    }

    /// Client for the configured timeout, reading tokens from the environment or the keyring.
    pub fn from_configuration(configuration: &Configuration) -> Result<Self, reqwest::Error> {
        Self::new(
            HttpRequestConfig::from_configuration(configuration),
            Arc::new(DefaultTokenProvider::default()),
        )
    }
}

#[async_trait]
impl RequestGateway for HttpClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, RemoteError> {
        let token = self
            .tokens
            .access_token(request.resource)
            .map_err(|e| RemoteError::Unauthenticated(e.to_string()))?;

        debug!("{} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .bearer_auth(token);

        for (key, value) in &self.config.default_headers {
            builder = builder.header(key, value);
        }
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }
        if let Some(body) = &request.body {
            trace!("Request body: {}", body);
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let response_text = response.text().await?;
        trace!("Raw response ({}): {}", status, response_text);

        if !status.is_success() {
            debug!("Request to {} failed with status {}", request.url, status);
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body: response_text,
            });
        }

        if response_text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str::<Value>(&response_text).map_err(|e| {
            error!(
                "Failed to deserialize response: {}. Raw response: {}",
                e, response_text
            );
            RemoteError::InvalidResponse(e.to_string())
        })
    }
}
