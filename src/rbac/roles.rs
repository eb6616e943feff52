//! Role catalog models

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::output::Tabular;

use super::crn::normalize_resource_type;

/// A role as returned by the role catalog
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Role {
    pub name: String,
    #[serde(default)]
    pub policies: Vec<Policy>,
}

/// Permissions a role grants at one binding scope
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Policy {
    #[serde(rename = "bindingScope")]
    pub binding_scope: String,
    #[serde(rename = "allowedActions", default)]
    pub allowed_actions: Vec<Action>,
}

/// A single allowed operation on a resource type
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Action {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    pub operation: String,
}

impl Role {
    /// Normalized resource types this role can be bound to
    pub fn resource_types(&self) -> BTreeSet<String> {
        self.policies
            .iter()
            .flat_map(|p| p.allowed_actions.iter())
            .map(|a| normalize_resource_type(&a.resource_type))
            .collect()
    }

    /// Distinct binding scopes, in catalog order
    pub fn binding_scopes(&self) -> Vec<&str> {
        let mut scopes: Vec<&str> = Vec::new();
        for p in &self.policies {
            if !scopes.contains(&p.binding_scope.as_str()) {
                scopes.push(&p.binding_scope);
            }
        }
        scopes
    }
}

impl Tabular for Role {
    fn headers() -> &'static [&'static str] {
        &["Name", "Binding Scopes", "Resource Types"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.binding_scopes().join(", "),
            self.resource_types()
                .into_iter()
                .collect::<Vec<_>>()
                .join(", "),
        ]
    }
}

/// Snapshot of every role the backend knows about
#[derive(Debug, Clone, Default)]
pub struct RoleCatalog {
    roles: Vec<Role>,
}

impl RoleCatalog {
    pub fn new(roles: Vec<Role>) -> Self {
        Self { roles }
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn find(&self, name: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.name == name)
    }

    /// Normalized resource types accepted by at least one role
    pub fn resource_types(&self) -> BTreeSet<String> {
        self.roles.iter().flat_map(|r| r.resource_types()).collect()
    }

    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.name.as_str()).collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_resource_types_normalized() {
        let catalog = fixtures::catalog();
        let role = catalog.find("DeveloperRead").unwrap();
        let types: Vec<String> = role.resource_types().into_iter().collect();
        assert_eq!(types, vec!["group", "kafka", "topic"]);
    }

    #[test]
    fn test_catalog_resource_types_union() {
        let types = fixtures::catalog().resource_types();
        assert!(types.contains("service-account"));
        assert!(types.contains("compute-pool"));
        assert!(types.contains("topic"));
        assert!(!types.contains("subject"));
    }

    #[test]
    fn test_find_is_exact() {
        let catalog = fixtures::catalog();
        assert!(catalog.find("EnvironmentAdmin").is_some());
        assert!(catalog.find("environmentadmin").is_none());
    }

    #[test]
    fn test_role_deserialize() {
        let role: Role = serde_json::from_value(serde_json::json!({
            "name": "DeveloperWrite",
            "policies": [{
                "bindingScope": "cluster",
                "allowedActions": [
                    {"resourceType": "Topic", "operation": "Write"},
                    {"resourceType": "TransactionalId", "operation": "Write"}
                ]
            }]
        }))
        .unwrap();
        assert_eq!(role.binding_scopes(), vec!["cluster"]);
        assert!(role.resource_types().contains("transactionalid"));
    }

    #[test]
    fn test_role_row() {
        let catalog = fixtures::catalog();
        let row = catalog.find("EnvironmentAdmin").unwrap().row();
        assert_eq!(row, vec!["EnvironmentAdmin", "environment", "environment"]);
    }
}
