//! Group mapping API operations

use crate::api::ConfluentClient;
use crate::config::api;
use crate::error::Result;

use super::models::GroupMapping;

impl ConfluentClient {
    pub async fn list_group_mappings(&self) -> Result<Vec<GroupMapping>> {
        self.fetch_all_pages(api::GROUP_MAPPINGS, "list group mappings")
            .await
    }

    pub async fn get_group_mapping(&self, id: &str) -> Result<Option<GroupMapping>> {
        let path = format!("{}/{}", api::GROUP_MAPPINGS, urlencoding::encode(id));
        self.fetch_resource_by_path(&path, &format!("describe group mapping \"{}\"", id))
            .await
    }

    pub async fn delete_group_mapping(&self, id: &str) -> Result<()> {
        let path = format!("{}/{}", api::GROUP_MAPPINGS, urlencoding::encode(id));
        self.delete_by_path(&path, &format!("group mapping \"{}\"", id))
            .await
    }
}
