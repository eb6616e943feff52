//! Service account API operations

use log::debug;

use crate::api::ConfluentClient;
use crate::config::api;
use crate::error::Result;

use super::models::{CreateServiceAccountRequest, ServiceAccount, UpdateServiceAccountRequest};

impl ConfluentClient {
    pub async fn list_service_accounts(&self) -> Result<Vec<ServiceAccount>> {
        self.fetch_all_pages(api::SERVICE_ACCOUNTS, "list service accounts")
            .await
    }

    pub async fn get_service_account(&self, id: &str) -> Result<Option<ServiceAccount>> {
        let path = format!("{}/{}", api::SERVICE_ACCOUNTS, urlencoding::encode(id));
        self.fetch_resource_by_path(&path, &format!("describe service account \"{}\"", id))
            .await
    }

    pub async fn create_service_account(
        &self,
        display_name: &str,
        description: &str,
    ) -> Result<ServiceAccount> {
        let url = self.url(api::SERVICE_ACCOUNTS);
        debug!("Creating service account '{}'", display_name);
        let request = CreateServiceAccountRequest {
            display_name,
            description,
        };
        let response = self.post(&url).json(&request).send().await?;
        self.parse_api_response(
            response,
            &format!("create service account \"{}\"", display_name),
        )
        .await
    }

    pub async fn update_service_account(
        &self,
        id: &str,
        description: &str,
    ) -> Result<ServiceAccount> {
        let url = self.url(&format!(
            "{}/{}",
            api::SERVICE_ACCOUNTS,
            urlencoding::encode(id)
        ));
        let request = UpdateServiceAccountRequest { description };
        let response = self.patch(&url).json(&request).send().await?;
        self.parse_api_response(response, &format!("update service account \"{}\"", id))
            .await
    }

    pub async fn delete_service_account(&self, id: &str) -> Result<()> {
        let path = format!("{}/{}", api::SERVICE_ACCOUNTS, urlencoding::encode(id));
        self.delete_by_path(&path, &format!("service account \"{}\"", id))
            .await
    }
}
