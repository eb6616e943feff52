//! Cloud role-binding data models

use serde::{Deserialize, Serialize};

use crate::output::Tabular;

/// A role binding from the IAM v2 API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RoleBinding {
    pub id: String,
    pub principal: String,
    pub role_name: String,
    pub crn_pattern: String,
}

impl Tabular for RoleBinding {
    fn headers() -> &'static [&'static str] {
        &["ID", "Principal", "Role", "CRN Pattern"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.principal.clone(),
            self.role_name.clone(),
            self.crn_pattern.clone(),
        ]
    }
}

/// Request payload for creating a role binding
#[derive(Serialize, Debug)]
pub struct CreateRoleBindingRequest<'a> {
    pub principal: &'a str,
    pub role_name: &'a str,
    pub crn_pattern: &'a str,
}

/// A Platform role binding flattened for display
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PlatformRoleBinding {
    pub principal: String,
    pub role: String,
    pub resource_type: String,
    pub name: String,
    pub pattern_type: String,
}

impl Tabular for PlatformRoleBinding {
    fn headers() -> &'static [&'static str] {
        &["Principal", "Role", "Resource Type", "Name", "Pattern Type"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.principal.clone(),
            self.role.clone(),
            self.resource_type.clone(),
            self.name.clone(),
            self.pattern_type.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_binding_deserialize() {
        let rb: RoleBinding = serde_json::from_value(serde_json::json!({
            "api_version": "iam/v2",
            "kind": "RoleBinding",
            "id": "rb-abc",
            "principal": "User:sa-1",
            "role_name": "EnvironmentAdmin",
            "crn_pattern": "crn://confluent.cloud/organization=o-1/environment=env-1"
        }))
        .unwrap();
        assert_eq!(rb.id, "rb-abc");
        assert_eq!(rb.row()[2], "EnvironmentAdmin");
    }

    #[test]
    fn test_create_request_serialize() {
        let req = CreateRoleBindingRequest {
            principal: "User:sa-1",
            role_name: "CloudClusterAdmin",
            crn_pattern: "crn://confluent.cloud/organization=o-1",
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["role_name"], "CloudClusterAdmin");
        assert_eq!(json["principal"], "User:sa-1");
    }
}
