//! Resolution utilities for the m365 CLI client.
//!
//! This module translates human readable identifiers (user principal names,
//! group display names) into directory object ids, and turns the principal
//! options of a command into a [`Principal`].

use crate::auth::Resource;
use crate::error_utils::RemoteError;
use crate::http_utils::{encode_query_parameter, endpoint, ApiRequest, RequestGateway};
use crate::model::{Principal, PrincipalKind};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Maps names to directory object identifiers.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    async fn user_id_by_upn(&self, upn: &str) -> Result<String, RemoteError>;
    async fn group_id_by_display_name(&self, display_name: &str) -> Result<String, RemoteError>;
}

/// Resolver backed by Microsoft Graph directory queries.
pub struct GraphIdentityResolver<'a> {
    gateway: &'a dyn RequestGateway,
    graph_url: &'a Url,
}

impl<'a> GraphIdentityResolver<'a> {
    pub fn new(gateway: &'a dyn RequestGateway, graph_url: &'a Url) -> Self {
        Self { gateway, graph_url }
    }

    /// `GET /v1.0/<collection>?$filter=<property> eq '<value>'&$select=id`
    async fn ids_matching(
        &self,
        collection: &str,
        property: &str,
        value: &str,
    ) -> Result<Vec<String>, RemoteError> {
        let mut url = endpoint(self.graph_url, &["v1.0", collection])?;
        // single quotes are escaped by doubling them inside OData literals
        let filter = format!("{} eq '{}'", property, value.replace('\'', "''"));
        url.set_query(Some(&format!(
            "$filter={}&$select=id",
            encode_query_parameter(&filter)
        )));

        let request = ApiRequest::get(Resource::Graph, url)
            .header("accept", "application/json;odata.metadata=none");
        let response = self.gateway.send(request).await?;

        Ok(response
            .get("value")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|item| item.get("id").and_then(Value::as_str))
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl<'a> IdentityResolver for GraphIdentityResolver<'a> {
    async fn user_id_by_upn(&self, upn: &str) -> Result<String, RemoteError> {
        debug!("Resolving user id for {}", upn);
        let ids = self.ids_matching("users", "userPrincipalName", upn).await?;

        ids.into_iter().next().ok_or_else(|| {
            RemoteError::NotResolved(format!(
                "The specified user with user name {} does not exist",
                upn
            ))
        })
    }

    async fn group_id_by_display_name(&self, display_name: &str) -> Result<String, RemoteError> {
        debug!("Resolving group id for {}", display_name);
        let ids = self
            .ids_matching("groups", "displayName", display_name)
            .await?;

        match ids.len() {
            0 => Err(RemoteError::NotResolved(format!(
                "The specified group '{}' does not exist.",
                display_name
            ))),
            1 => Ok(ids[0].clone()),
            _ => Err(RemoteError::NotResolved(format!(
                "Multiple groups with name '{}' found: {}.",
                display_name,
                ids.join(",")
            ))),
        }
    }
}

/// The mutually exclusive ways of naming a principal on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrincipalOptions {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub group_id: Option<String>,
    pub group_name: Option<String>,
}

impl PrincipalOptions {
    /// First supplied value in precedence order, for log messages.
    pub fn display_value(&self) -> Option<&str> {
        self.user_id
            .as_deref()
            .or(self.user_name.as_deref())
            .or(self.group_id.as_deref())
            .or(self.group_name.as_deref())
    }
}

/// Resolves principal options in the order userId > userName > groupId > groupName.
///
/// Ids are trusted verbatim; names cost one directory lookup. The kind is
/// `User` when either user option was used.
pub async fn resolve_principal(
    options: &PrincipalOptions,
    resolver: &dyn IdentityResolver,
) -> Result<Principal, RemoteError> {
    let id = if let Some(user_id) = &options.user_id {
        user_id.clone()
    } else if let Some(user_name) = &options.user_name {
        resolver.user_id_by_upn(user_name).await?
    } else if let Some(group_id) = &options.group_id {
        group_id.clone()
    } else if let Some(group_name) = &options.group_name {
        resolver.group_id_by_display_name(group_name).await?
    } else {
        return Err(RemoteError::NotResolved(
            "No user or group was specified".to_string(),
        ));
    };

    let kind = if options.user_id.is_some() || options.user_name.is_some() {
        PrincipalKind::User
    } else {
        PrincipalKind::Group
    };

    Ok(Principal { id, kind })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    /// Gateway answering every call with the same response.
    struct CannedGateway {
        response: Result<Value, RemoteError>,
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl CannedGateway {
        fn new(response: Result<Value, RemoteError>) -> Self {
            Self {
                response,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl RequestGateway for CannedGateway {
        async fn send(&self, request: ApiRequest) -> Result<Value, RemoteError> {
            self.requests.lock().unwrap().push(request);
            self.response.clone()
        }
    }

    struct PanickingResolver;

    #[async_trait]
    impl IdentityResolver for PanickingResolver {
        async fn user_id_by_upn(&self, _: &str) -> Result<String, RemoteError> {
            panic!("user lookup not expected")
        }
        async fn group_id_by_display_name(&self, _: &str) -> Result<String, RemoteError> {
            panic!("group lookup not expected")
        }
    }

    fn graph_url() -> Url {
        Url::parse("https://graph.microsoft.com").unwrap()
    }

    #[tokio::test]
    async fn test_user_lookup_builds_filter_query() {
        let gateway = CannedGateway::new(Ok(json!({ "value": [ { "id": "u-1" } ] })));
        let url = graph_url();
        let resolver = GraphIdentityResolver::new(&gateway, &url);

        let id = resolver.user_id_by_upn("john.doe@contoso.com").await.unwrap();
        assert_eq!(id, "u-1");

        let requests = gateway.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url.as_str(),
            "https://graph.microsoft.com/v1.0/users?$filter=userPrincipalName%20eq%20%27john.doe%40contoso.com%27&$select=id"
        );
        assert_eq!(requests[0].resource, Resource::Graph);
    }

    #[tokio::test]
    async fn test_missing_user_is_reported() {
        let gateway = CannedGateway::new(Ok(json!({ "value": [] })));
        let url = graph_url();
        let resolver = GraphIdentityResolver::new(&gateway, &url);

        let error = resolver.user_id_by_upn("ghost@contoso.com").await.unwrap_err();
        assert_eq!(
            error.to_string(),
            "The specified user with user name ghost@contoso.com does not exist"
        );
    }

    #[tokio::test]
    async fn test_group_lookup_escapes_quotes() {
        let gateway = CannedGateway::new(Ok(json!({ "value": [ { "id": "g-1" } ] })));
        let url = graph_url();
        let resolver = GraphIdentityResolver::new(&gateway, &url);

        resolver.group_id_by_display_name("O'Neil team").await.unwrap();

        let requests = gateway.requests.lock().unwrap();
        assert!(requests[0]
            .url
            .as_str()
            .contains("displayName%20eq%20%27O%27%27Neil%20team%27"));
    }

    #[tokio::test]
    async fn test_ambiguous_group_is_rejected() {
        let gateway = CannedGateway::new(Ok(json!({
            "value": [ { "id": "g-1" }, { "id": "g-2" } ]
        })));
        let url = graph_url();
        let resolver = GraphIdentityResolver::new(&gateway, &url);

        let error = resolver.group_id_by_display_name("Team A").await.unwrap_err();
        assert_eq!(
            error.to_string(),
            "Multiple groups with name 'Team A' found: g-1,g-2."
        );
    }

    #[tokio::test]
    async fn test_lookup_failure_is_propagated() {
        let failure = RemoteError::Transport("connection reset".to_string());
        let gateway = CannedGateway::new(Err(failure.clone()));
        let url = graph_url();
        let resolver = GraphIdentityResolver::new(&gateway, &url);

        let error = resolver.group_id_by_display_name("Team A").await.unwrap_err();
        assert_eq!(error, failure);
    }

    #[tokio::test]
    async fn test_ids_are_trusted_verbatim() {
        let options = PrincipalOptions {
            group_id: Some("2c1ba4c4-cd9b-4417-832f-92a34bc34b2a".to_string()),
            ..Default::default()
        };
        let principal = resolve_principal(&options, &PanickingResolver).await.unwrap();
        assert_eq!(principal.kind, PrincipalKind::Group);
        assert_eq!(principal.id, "2c1ba4c4-cd9b-4417-832f-92a34bc34b2a");
    }

    #[tokio::test]
    async fn test_user_id_takes_precedence() {
        let options = PrincipalOptions {
            user_id: Some("u-1".to_string()),
            group_name: Some("Team A".to_string()),
            ..Default::default()
        };
        let principal = resolve_principal(&options, &PanickingResolver).await.unwrap();
        assert_eq!(
            principal,
            Principal {
                id: "u-1".to_string(),
                kind: PrincipalKind::User
            }
        );
    }
}
