//! Environment data models

use serde::{Deserialize, Serialize};

use crate::api::traits::ApiResource;
use crate::output::Tabular;

/// Environment from the org v2 API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Environment {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_governance_config: Option<StreamGovernanceConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct StreamGovernanceConfig {
    pub package: String,
}

impl Environment {
    pub fn governance_package(&self) -> &str {
        self.stream_governance_config
            .as_ref()
            .map(|c| c.package.as_str())
            .unwrap_or("")
    }
}

impl ApiResource for Environment {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.display_name
    }
}

impl Tabular for Environment {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Stream Governance Package"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.display_name.clone(),
            self.governance_package().to_string(),
        ]
    }
}
