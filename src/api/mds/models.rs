//! MDS role models

use serde::{Deserialize, Serialize};

use crate::output::Tabular;

/// Role definition as served by MDS
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PlatformRole {
    pub name: String,
    #[serde(rename = "accessPolicy", default)]
    pub access_policy: AccessPolicy,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct AccessPolicy {
    #[serde(rename = "scopeType", default)]
    pub scope_type: String,
    #[serde(rename = "allowedOperations", default)]
    pub allowed_operations: Vec<AllowedOperations>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AllowedOperations {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    #[serde(default)]
    pub operations: Vec<String>,
}

impl Tabular for PlatformRole {
    fn headers() -> &'static [&'static str] {
        &["Name", "Scope Type", "Resource Types"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.access_policy.scope_type.clone(),
            self.access_policy
                .allowed_operations
                .iter()
                .map(|o| o.resource_type.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        ]
    }
}
