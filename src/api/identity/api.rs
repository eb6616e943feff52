//! Identity provider and pool API operations

use log::debug;

use crate::api::ConfluentClient;
use crate::config::api;
use crate::error::Result;

use super::models::{CreateIdentityPoolRequest, IdentityPool, IdentityProvider};

fn pools_path(provider: &str) -> String {
    format!(
        "{}/{}/identity-pools",
        api::IDENTITY_PROVIDERS,
        urlencoding::encode(provider)
    )
}

impl ConfluentClient {
    pub async fn list_identity_providers(&self) -> Result<Vec<IdentityProvider>> {
        self.fetch_all_pages(api::IDENTITY_PROVIDERS, "list identity providers")
            .await
    }

    pub async fn list_identity_pools(&self, provider: &str) -> Result<Vec<IdentityPool>> {
        self.fetch_all_pages(
            &pools_path(provider),
            &format!("list identity pools of \"{}\"", provider),
        )
        .await
    }

    pub async fn get_identity_pool(
        &self,
        provider: &str,
        id: &str,
    ) -> Result<Option<IdentityPool>> {
        let path = format!("{}/{}", pools_path(provider), urlencoding::encode(id));
        self.fetch_resource_by_path(&path, &format!("describe identity pool \"{}\"", id))
            .await
    }

    pub async fn create_identity_pool(
        &self,
        provider: &str,
        request: &CreateIdentityPoolRequest<'_>,
    ) -> Result<IdentityPool> {
        let url = self.url(&pools_path(provider));
        debug!(
            "Creating identity pool '{}' under {}",
            request.display_name, provider
        );
        let response = self.post(&url).json(request).send().await?;
        self.parse_api_response(
            response,
            &format!("create identity pool \"{}\"", request.display_name),
        )
        .await
    }

    pub async fn delete_identity_pool(&self, provider: &str, id: &str) -> Result<()> {
        let path = format!("{}/{}", pools_path(provider), urlencoding::encode(id));
        self.delete_by_path(&path, &format!("identity pool \"{}\"", id))
            .await
    }
}
