//! HTTP client for the Confluent Cloud and MDS REST APIs

use std::time::Duration;

use log::debug;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::config::api;
use crate::error::{CliError, Result};

use super::traits::ApiListResponse;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Confluent API client; both backends authenticate with HTTP basic auth
pub struct ConfluentClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl ConfluentClient {
    pub fn new(base_url: &str, username: String, password: String) -> Self {
        let client = Client::builder()
            .user_agent(concat!("confluent-cli/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            password,
        }
    }

    /// Base URL without trailing slash
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Authenticated JSON request; every call goes through here
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, "application/json")
    }

    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    pub(crate) fn patch(&self, url: &str) -> RequestBuilder {
        self.request(Method::PATCH, url)
    }

    pub(crate) fn delete(&self, url: &str) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }

    /// Decode a 2xx body as `T`; anything else becomes `CliError::Api`
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(api_error(response, error_context).await);
        }
        Ok(response.json().await?)
    }

    /// Check a response that carries no body of interest
    pub(crate) async fn expect_success(&self, response: Response, error_context: &str) -> Result<()> {
        match response.status().is_success() {
            true => Ok(()),
            false => Err(api_error(response, error_context).await),
        }
    }

    /// Fetch all pages of a cursor-paginated list endpoint.
    ///
    /// Pages are fetched one after another: each response names the next
    /// page in `metadata.next`, whose `page_token` query parameter is
    /// carried into the following request.
    pub async fn fetch_all_pages<T>(&self, path: &str, error_context: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let separator = if path.contains('?') { "&" } else { "?" };
        let first_page_url = format!(
            "{}{}{}page_size={}",
            self.base_url,
            path,
            separator,
            api::DEFAULT_PAGE_SIZE
        );

        let mut items = Vec::new();
        let mut url = first_page_url.clone();
        let mut page = 1;

        loop {
            debug!("Fetching page {} from: {}", page, url);
            let response = self.get(&url).send().await?;
            let page_context = format!("{} (page {})", error_context, page);
            let resp: ApiListResponse<T> = self.parse_api_response(response, &page_context).await?;

            let next = resp.next_page_token();
            items.extend(resp.data);

            match next {
                Some(token) => {
                    url = format!(
                        "{}&page_token={}",
                        first_page_url,
                        urlencoding::encode(&token)
                    );
                    page += 1;
                }
                None => break,
            }
        }

        debug!("Fetched {} total items for {}", items.len(), error_context);
        Ok(items)
    }

    /// Fetch a single resource by API path; `None` for 404
    pub async fn fetch_resource_by_path<T>(&self, path: &str, resource_label: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        self.parse_api_response(response, resource_label)
            .await
            .map(Some)
    }

    /// DELETE a resource by API path
    pub async fn delete_by_path(&self, path: &str, resource_label: &str) -> Result<()> {
        let url = self.url(path);
        debug!("Deleting {} at: {}", resource_label, url);

        let response = self.delete(&url).send().await?;
        self.expect_success(response, &format!("delete {}", resource_label))
            .await
    }
}

/// Value of the `page_token` query parameter of a `metadata.next` URL
pub fn page_token_from_url(next: &str) -> Option<String> {
    let url = Url::parse(next).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page_token")
        .map(|(_, value)| value.into_owned())
        .filter(|token| !token.is_empty())
}

/// Turn a failed response into an `Api` error, keeping the backend's own
/// message when the body carries one
pub(crate) async fn api_error(response: Response, error_context: &str) -> CliError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    debug!("{} <- HTTP {}: {}", error_context, status, body);

    let mut message = format!("Failed to {}", error_context);
    if let Some(detail) = error_detail(&body) {
        message.push_str(": ");
        message.push_str(&detail);
    }
    CliError::Api { status, message }
}

/// Extract the human-readable message from the error bodies both backends
/// return: `{"errors":[{"detail":..}]}`, `{"error":{"message":..}}` or
/// `{"message":..}`
fn error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let candidates = [
        &value["errors"][0]["detail"],
        &value["error"]["message"],
        &value["message"],
    ];
    candidates
        .iter()
        .find_map(|v| v.as_str())
        .map(str::to_string)
}

#[cfg(test)]
impl ConfluentClient {
    /// Create a test client pointing at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(base_url, "test-key".to_string(), "test-secret".to_string())
    }
}
