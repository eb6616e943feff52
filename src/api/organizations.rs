//! Organization lookup

use serde::{Deserialize, Serialize};

use crate::config::api;
use crate::error::Result;

use super::ConfluentClient;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Organization {
    pub id: String,
    #[serde(default)]
    pub display_name: String,
}

impl ConfluentClient {
    /// Organizations visible to the current credentials
    pub async fn list_organizations(&self) -> Result<Vec<Organization>> {
        self.fetch_all_pages(api::ORGANIZATIONS, "list organizations")
            .await
    }
}
