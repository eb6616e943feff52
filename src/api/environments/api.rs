//! Environment API operations

use crate::api::ConfluentClient;
use crate::config::api;
use crate::error::Result;

use super::models::Environment;

impl ConfluentClient {
    pub async fn list_environments(&self) -> Result<Vec<Environment>> {
        self.fetch_all_pages(api::ENVIRONMENTS, "list environments")
            .await
    }

    pub async fn get_environment(&self, id: &str) -> Result<Option<Environment>> {
        let path = format!("{}/{}", api::ENVIRONMENTS, urlencoding::encode(id));
        self.fetch_resource_by_path(&path, &format!("describe environment \"{}\"", id))
            .await
    }

    pub async fn delete_environment(&self, id: &str) -> Result<()> {
        let path = format!("{}/{}", api::ENVIRONMENTS, urlencoding::encode(id));
        self.delete_by_path(&path, &format!("environment \"{}\"", id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_environment() {
        let mock_server = MockServer::start().await;
        let client = ConfluentClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/org/v2/environments/env-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "env-1",
                "display_name": "prod"
            })))
            .mount(&mock_server)
            .await;

        let env = client.get_environment("env-1").await.unwrap().unwrap();
        assert_eq!(env.display_name, "prod");
    }

    #[tokio::test]
    async fn test_delete_environment() {
        let mock_server = MockServer::start().await;
        let client = ConfluentClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/org/v2/environments/env-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        client.delete_environment("env-1").await.unwrap();
    }
}
