//! Certificate authority API operations

use crate::api::ConfluentClient;
use crate::config::api;
use crate::error::Result;

use super::models::CertificateAuthority;

impl ConfluentClient {
    pub async fn list_certificate_authorities(&self) -> Result<Vec<CertificateAuthority>> {
        self.fetch_all_pages(api::CERTIFICATE_AUTHORITIES, "list certificate authorities")
            .await
    }

    pub async fn get_certificate_authority(&self, id: &str) -> Result<Option<CertificateAuthority>> {
        let path = format!("{}/{}", api::CERTIFICATE_AUTHORITIES, urlencoding::encode(id));
        self.fetch_resource_by_path(&path, &format!("describe certificate authority \"{}\"", id))
            .await
    }

    pub async fn delete_certificate_authority(&self, id: &str) -> Result<()> {
        let path = format!("{}/{}", api::CERTIFICATE_AUTHORITIES, urlencoding::encode(id));
        self.delete_by_path(&path, &format!("certificate authority \"{}\"", id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_certificate_authorities() {
        let mock_server = MockServer::start().await;
        let client = ConfluentClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/iam/v2/certificate-authorities"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{
                    "id": "op-ca1",
                    "display_name": "corp ca",
                    "fingerprints": ["AB:CD"],
                    "expiration_dates": ["2030-01-01T00:00:00Z"],
                    "state": "READY"
                }]
            })))
            .mount(&mock_server)
            .await;

        let cas = client.list_certificate_authorities().await.unwrap();
        assert_eq!(cas[0].fingerprints, vec!["AB:CD".to_string()]);
    }

    #[tokio::test]
    async fn test_get_missing_certificate_authority() {
        let mock_server = MockServer::start().await;
        let client = ConfluentClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/iam/v2/certificate-authorities/op-none"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        assert!(client
            .get_certificate_authority("op-none")
            .await
            .unwrap()
            .is_none());
    }
}
