//! Common traits and wrappers for API resources

use serde::Deserialize;

use super::client::page_token_from_url;

/// Common trait for resources that can be looked up and deleted by ID
pub trait ApiResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name typed to confirm a single delete
    fn name(&self) -> &str;

    /// Check if the resource matches by name or ID
    fn matches(&self, input: &str) -> bool {
        self.id() == input || self.name() == input
    }
}

/// List metadata of cursor-paginated endpoints
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ListMetadata {
    /// URL of the next page, absent on the last page
    #[serde(default)]
    pub next: Option<String>,
}

/// Generic list response: `{"data": [...], "metadata": {"next": ...}}`
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub metadata: Option<ListMetadata>,
}

impl<T> ApiListResponse<T> {
    /// Page token for the following request, if there is another page
    pub fn next_page_token(&self) -> Option<String> {
        self.metadata
            .as_ref()
            .and_then(|m| m.next.as_deref())
            .and_then(page_token_from_url)
    }
}
