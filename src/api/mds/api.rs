//! Metadata Service (MDS) API operations for Confluent Platform

use log::debug;
use serde::Serialize;

use crate::acl::{AclBinding, AclBindingFilter, AclFilterRequest, CreateAclRequest};
use crate::api::ConfluentClient;
use crate::config::api;
use crate::error::Result;
use crate::rbac::{MdsScope, ResourcePattern, ResourcesRequest, RoleBindingOptions};

use super::models::PlatformRole;

fn role_path(principal: &str, role: &str) -> String {
    format!(
        "{}/principals/{}/roles/{}",
        api::MDS,
        urlencoding::encode(principal),
        urlencoding::encode(role)
    )
}

impl ConfluentClient {
    async fn mds_post<B, T>(&self, path: &str, body: &B, error_context: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self.post(&url).json(body).send().await?;
        self.parse_api_response(response, error_context).await
    }

    pub async fn list_platform_roles(&self) -> Result<Vec<PlatformRole>> {
        let url = self.url(&format!("{}/roles", api::MDS));
        let response = self.get(&url).send().await?;
        self.parse_api_response(response, "list roles").await
    }

    pub async fn get_platform_role(&self, name: &str) -> Result<Option<PlatformRole>> {
        let path = format!("{}/roles/{}", api::MDS, urlencoding::encode(name));
        self.fetch_resource_by_path(&path, &format!("describe role \"{}\"", name))
            .await
    }

    /// Bind a role, at cluster level or on the resource pattern
    pub async fn add_platform_role_binding(&self, options: &RoleBindingOptions) -> Result<()> {
        self.change_platform_role_binding(options, false).await
    }

    pub async fn remove_platform_role_binding(&self, options: &RoleBindingOptions) -> Result<()> {
        self.change_platform_role_binding(options, true).await
    }

    async fn change_platform_role_binding(
        &self,
        options: &RoleBindingOptions,
        remove: bool,
    ) -> Result<()> {
        let base = role_path(&options.principal, &options.role);
        let verb = if remove { "delete" } else { "create" };
        let context = format!("{} role binding \"{}\"", verb, options.role);

        let request = match &options.resource {
            Some(pattern) => {
                let url = self.url(&format!("{}/bindings", base));
                let body = ResourcesRequest {
                    scope: &options.scope,
                    resource_patterns: vec![pattern],
                };
                debug!("{} resource binding at {}", verb, url);
                if remove {
                    self.delete(&url).json(&body)
                } else {
                    self.post(&url).json(&body)
                }
            }
            None => {
                let url = self.url(&base);
                debug!("{} cluster binding at {}", verb, url);
                if remove {
                    self.delete(&url).json(&options.scope)
                } else {
                    self.post(&url).json(&options.scope)
                }
            }
        };
        let response = request.send().await?;
        self.expect_success(response, &context).await
    }

    /// Role names bound to a principal within a scope
    pub async fn lookup_principal_roles(
        &self,
        principal: &str,
        scope: &MdsScope,
    ) -> Result<Vec<String>> {
        let path = format!(
            "{}/lookup/principals/{}/roleNames",
            api::MDS,
            urlencoding::encode(principal)
        );
        self.mds_post(&path, scope, &format!("list roles of \"{}\"", principal))
            .await
    }

    /// Resource patterns a principal holds a role on; empty for
    /// cluster-level bindings
    pub async fn lookup_role_resources(
        &self,
        principal: &str,
        role: &str,
        scope: &MdsScope,
    ) -> Result<Vec<ResourcePattern>> {
        let path = format!("{}/resources", role_path(principal, role));
        self.mds_post(
            &path,
            scope,
            &format!("list resources of role \"{}\" for \"{}\"", role, principal),
        )
        .await
    }

    /// Principals holding a role within a scope
    pub async fn lookup_role_principals(&self, role: &str, scope: &MdsScope) -> Result<Vec<String>> {
        let path = format!("{}/lookup/role/{}", api::MDS, urlencoding::encode(role));
        self.mds_post(&path, scope, &format!("list principals of role \"{}\"", role))
            .await
    }

    pub async fn create_acl(&self, scope: &MdsScope, binding: &AclBinding) -> Result<()> {
        let url = self.url(&format!("{}/acls", api::MDS));
        let body = CreateAclRequest {
            scope,
            acl_binding: binding,
        };
        let response = self.post(&url).json(&body).send().await?;
        self.expect_success(response, "create ACL").await
    }

    pub async fn search_acls(
        &self,
        scope: &MdsScope,
        filter: &AclBindingFilter,
    ) -> Result<Vec<AclBinding>> {
        let body = AclFilterRequest {
            scope,
            acl_binding_filter: filter,
        };
        self.mds_post(&format!("{}/acls:search", api::MDS), &body, "list ACLs")
            .await
    }

    /// Delete every binding matching the filter, returning what was removed
    pub async fn delete_acls(
        &self,
        scope: &MdsScope,
        filter: &AclBindingFilter,
    ) -> Result<Vec<AclBinding>> {
        let url = self.url(&format!("{}/acls", api::MDS));
        let body = AclFilterRequest {
            scope,
            acl_binding_filter: filter,
        };
        let response = self.delete(&url).json(&body).send().await?;
        self.parse_api_response(response, "delete ACLs").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acl::{AclFlags, AclOperation};
    use crate::rbac::MdsScopeFlags;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn scope() -> MdsScope {
        MdsScope::from_flags(&MdsScopeFlags {
            kafka_cluster: Some("testcluster".to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_cluster_level_binding_posts_scope() {
        let mock_server = MockServer::start().await;
        let client = ConfluentClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/security/1.0/principals/User%3Abob/roles/SystemAdmin"))
            .and(body_json(serde_json::json!({
                "clusters": {"kafka-cluster": "testcluster"}
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = RoleBindingOptions::new(
            "SystemAdmin",
            "User:bob",
            None,
            false,
            &MdsScopeFlags {
                kafka_cluster: Some("testcluster".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        client.add_platform_role_binding(&options).await.unwrap();
    }

    #[tokio::test]
    async fn test_resource_binding_deletes_pattern() {
        let mock_server = MockServer::start().await;
        let client = ConfluentClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path(
                "/security/1.0/principals/User%3Abob/roles/ResourceOwner/bindings",
            ))
            .and(body_json(serde_json::json!({
                "scope": {"clusters": {"kafka-cluster": "testcluster"}},
                "resourcePatterns": [
                    {"resourceType": "Topic", "name": "orders", "patternType": "PREFIXED"}
                ]
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let options = RoleBindingOptions::new(
            "ResourceOwner",
            "User:bob",
            Some("Topic:orders"),
            true,
            &MdsScopeFlags {
                kafka_cluster: Some("testcluster".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        client.remove_platform_role_binding(&options).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_acl_request_body() {
        let mock_server = MockServer::start().await;
        let client = ConfluentClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/security/1.0/acls"))
            .and(body_json(serde_json::json!({
                "scope": {"clusters": {"kafka-cluster": "testcluster"}},
                "aclBinding": {
                    "pattern": {"resourceType": "TOPIC", "name": "dan", "patternType": "LITERAL"},
                    "entry": {"principal": "User:42", "permissionType": "ALLOW", "operation": "READ", "host": "*"}
                }
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let flags = AclFlags {
            allow: true,
            principal: Some("User:42".to_string()),
            operations: vec![AclOperation::Read],
            topic: Some("dan".to_string()),
            ..Default::default()
        };
        let binding = &flags.bindings().unwrap()[0];
        client.create_acl(&scope(), binding).await.unwrap();
    }

    #[tokio::test]
    async fn test_lookup_principal_roles() {
        let mock_server = MockServer::start().await;
        let client = ConfluentClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/security/1.0/lookup/principals/User%3Abob/roleNames"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!(["DeveloperRead", "SystemAdmin"])),
            )
            .mount(&mock_server)
            .await;

        let roles = client
            .lookup_principal_roles("User:bob", &scope())
            .await
            .unwrap();
        assert_eq!(roles, vec!["DeveloperRead", "SystemAdmin"]);
    }
}
