//! Role catalog and cloud role-binding API operations

use log::debug;

use crate::api::ConfluentClient;
use crate::config::api;
use crate::error::Result;
use crate::rbac::{CreateRoleBindingRequest, Role, RoleBinding, RoleCatalog};

use super::models::RoleBindingFilter;

impl ConfluentClient {
    /// Fetch every public role; the endpoint is not paginated
    pub async fn fetch_role_catalog(&self) -> Result<RoleCatalog> {
        let url = format!(
            "{}?namespace={}",
            self.url(api::ROLES),
            urlencoding::encode(api::ROLE_NAMESPACES)
        );
        debug!("Fetching role catalog from: {}", url);
        let response = self.get(&url).send().await?;
        let roles: Vec<Role> = self.parse_api_response(response, "list roles").await?;
        Ok(RoleCatalog::new(roles))
    }

    pub async fn list_role_bindings(&self, filter: &RoleBindingFilter<'_>) -> Result<Vec<RoleBinding>> {
        let mut path = format!(
            "{}?crn_pattern={}",
            api::ROLE_BINDINGS,
            urlencoding::encode(filter.crn_pattern)
        );
        if let Some(principal) = filter.principal {
            path.push_str(&format!("&principal={}", urlencoding::encode(principal)));
        }
        if let Some(role) = filter.role_name {
            path.push_str(&format!("&role_name={}", urlencoding::encode(role)));
        }
        self.fetch_all_pages(&path, "list role bindings").await
    }

    pub async fn create_role_binding(
        &self,
        request: &CreateRoleBindingRequest<'_>,
    ) -> Result<RoleBinding> {
        let url = self.url(api::ROLE_BINDINGS);
        debug!(
            "Binding {} to {} on {}",
            request.role_name, request.principal, request.crn_pattern
        );
        let response = self.post(&url).json(request).send().await?;
        self.parse_api_response(response, "create role binding").await
    }

    pub async fn delete_role_binding(&self, id: &str) -> Result<()> {
        let path = format!("{}/{}", api::ROLE_BINDINGS, urlencoding::encode(id));
        self.delete_by_path(&path, &format!("role binding \"{}\"", id))
            .await
    }
}
