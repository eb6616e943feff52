//! Connect and log search API operations

use std::collections::BTreeMap;

use log::debug;

use crate::api::traits::ApiListResponse;
use crate::api::ConfluentClient;
use crate::config::api;
use crate::error::Result;

use super::models::{
    AlterOffsetsRequest, ConnectorOffsets, ExpandedConnector, LogEntry, LogSearchRequest,
    OffsetRequestStatus,
};

/// Environment and Kafka cluster a connector runs in
#[derive(Debug, Clone)]
pub struct ConnectScope {
    pub environment: String,
    pub cluster: String,
}

impl ConnectScope {
    fn connectors_path(&self) -> String {
        format!(
            "{}/{}/clusters/{}/connectors",
            api::CONNECT,
            urlencoding::encode(&self.environment),
            urlencoding::encode(&self.cluster)
        )
    }

    fn connector_path(&self, name: &str) -> String {
        format!("{}/{}", self.connectors_path(), urlencoding::encode(name))
    }
}

impl ConfluentClient {
    /// All connectors of a cluster, with IDs and status
    pub async fn list_connectors(&self, scope: &ConnectScope) -> Result<Vec<ExpandedConnector>> {
        let url = format!(
            "{}?expand=id,status,info",
            self.url(&scope.connectors_path())
        );
        debug!("Fetching connectors from: {}", url);
        let response = self.get(&url).send().await?;
        let listing: BTreeMap<String, ExpandedConnector> =
            self.parse_api_response(response, "list connectors").await?;
        Ok(listing.into_values().collect())
    }

    pub async fn delete_connector(&self, scope: &ConnectScope, name: &str) -> Result<()> {
        self.delete_by_path(&scope.connector_path(name), &format!("connector \"{}\"", name))
            .await
    }

    pub async fn get_connector_offsets(
        &self,
        scope: &ConnectScope,
        name: &str,
    ) -> Result<ConnectorOffsets> {
        let url = self.url(&format!("{}/offsets", scope.connector_path(name)));
        let response = self.get(&url).send().await?;
        self.parse_api_response(response, &format!("describe offsets of \"{}\"", name))
            .await
    }

    /// Submit an offset PATCH request; completion is reported by
    /// [`ConfluentClient::get_offset_request_status`]
    pub async fn alter_connector_offsets(
        &self,
        scope: &ConnectScope,
        name: &str,
        offsets: &[serde_json::Value],
    ) -> Result<OffsetRequestStatus> {
        let url = self.url(&format!("{}/offsets/request", scope.connector_path(name)));
        let body = AlterOffsetsRequest {
            kind: "PATCH",
            offsets,
        };
        debug!("Altering {} offset(s) of {}", offsets.len(), name);
        let response = self.post(&url).json(&body).send().await?;
        self.parse_api_response(response, &format!("alter offsets of \"{}\"", name))
            .await
    }

    pub async fn get_offset_request_status(
        &self,
        scope: &ConnectScope,
        name: &str,
    ) -> Result<OffsetRequestStatus> {
        let url = self.url(&format!(
            "{}/offsets/request/status",
            scope.connector_path(name)
        ));
        let response = self.get(&url).send().await?;
        self.parse_api_response(response, &format!("describe offset status of \"{}\"", name))
            .await
    }

    /// One page of connector logs; `page_token` continues a previous query
    pub async fn search_logs(
        &self,
        request: &LogSearchRequest<'_>,
        page_token: Option<&str>,
    ) -> Result<(Vec<LogEntry>, Option<String>)> {
        let mut url = format!(
            "{}?page_size={}",
            self.url(api::LOG_SEARCH),
            api::LOGS_PAGE_SIZE
        );
        if let Some(token) = page_token {
            url.push_str(&format!("&page_token={}", urlencoding::encode(token)));
        }
        debug!("Searching logs: {}", url);
        let response = self.post(&url).json(request).send().await?;
        let page: ApiListResponse<LogEntry> =
            self.parse_api_response(response, "search connector logs").await?;
        let next = page.next_page_token();
        Ok((page.data, next))
    }
}
