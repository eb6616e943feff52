//! Service account data models

use serde::{Deserialize, Serialize};

use crate::api::traits::ApiResource;
use crate::output::Tabular;

/// Service account from the IAM v2 API
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ServiceAccount {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
}

impl ApiResource for ServiceAccount {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.display_name
    }
}

impl Tabular for ServiceAccount {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Description"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.display_name.clone(),
            self.description.clone(),
        ]
    }
}

#[derive(Serialize, Debug)]
pub struct CreateServiceAccountRequest<'a> {
    pub display_name: &'a str,
    pub description: &'a str,
}

#[derive(Serialize, Debug)]
pub struct UpdateServiceAccountRequest<'a> {
    pub description: &'a str,
}
