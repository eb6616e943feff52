//! Kafka cluster API operations

use crate::api::ConfluentClient;
use crate::config::api;
use crate::error::Result;

use super::models::KafkaCluster;

impl ConfluentClient {
    pub async fn list_kafka_clusters(&self, environment: &str) -> Result<Vec<KafkaCluster>> {
        let path = format!(
            "{}?environment={}",
            api::KAFKA_CLUSTERS,
            urlencoding::encode(environment)
        );
        self.fetch_all_pages(&path, "list Kafka clusters").await
    }

    pub async fn get_kafka_cluster(
        &self,
        environment: &str,
        id: &str,
    ) -> Result<Option<KafkaCluster>> {
        let path = format!(
            "{}/{}?environment={}",
            api::KAFKA_CLUSTERS,
            urlencoding::encode(id),
            urlencoding::encode(environment)
        );
        self.fetch_resource_by_path(&path, &format!("describe Kafka cluster \"{}\"", id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_kafka_clusters_by_environment() {
        let mock_server = MockServer::start().await;
        let client = ConfluentClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/cmk/v2/clusters"))
            .and(query_param("environment", "env-1"))
            .and(query_param("page_size", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [
                    {"id": "lkc-1", "spec": {"display_name": "a"}},
                    {"id": "lkc-2", "spec": {"display_name": "b"}}
                ]
            })))
            .mount(&mock_server)
            .await;

        let clusters = client.list_kafka_clusters("env-1").await.unwrap();
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[1].id, "lkc-2");
    }
}
