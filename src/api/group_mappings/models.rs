//! SSO group mapping data models

use serde::{Deserialize, Serialize};

use crate::api::traits::ApiResource;
use crate::output::Tabular;

/// Maps SSO group claims to role bindings
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GroupMapping {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub filter: String,
}

impl ApiResource for GroupMapping {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.display_name
    }
}

impl Tabular for GroupMapping {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Description", "Filter"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.display_name.clone(),
            self.description.clone(),
            self.filter.clone(),
        ]
    }
}
