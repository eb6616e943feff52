//! Shape of `~/.confluent/config.json`

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The whole config file: named contexts plus the selected one
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ContextConfig {
    #[serde(rename = "current-context", skip_serializing_if = "Option::is_none")]
    pub current_context: Option<String>,
    #[serde(default)]
    pub contexts: BTreeMap<String, Context>,
}

/// Which backend a context talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContextKind {
    #[default]
    Cloud,
    Platform,
}

impl std::fmt::Display for ContextKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextKind::Cloud => write!(f, "cloud"),
            ContextKind::Platform => write!(f, "platform"),
        }
    }
}

/// A named context: connection parameters plus the active resources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    #[serde(default)]
    pub kind: ContextKind,
    /// API endpoint; cloud contexts default to the public endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "api-key", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(rename = "api-secret", skip_serializing_if = "Option::is_none")]
    pub api_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(rename = "kafka-cluster", skip_serializing_if = "Option::is_none")]
    pub kafka_cluster: Option<String>,
    #[serde(rename = "service-account", skip_serializing_if = "Option::is_none")]
    pub service_account: Option<String>,
    #[serde(rename = "identity-pool", skip_serializing_if = "Option::is_none")]
    pub identity_pool: Option<String>,
    #[serde(rename = "connect-logs", skip_serializing_if = "Option::is_none")]
    pub connect_logs: Option<LogsCursor>,
}

/// Parameters of a `connect logs` query; a stored page token is only valid
/// for the exact same query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogsQuery {
    pub connector: String,
    #[serde(default)]
    pub levels: Vec<String>,
    #[serde(rename = "search-text", skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,
    #[serde(rename = "start-time")]
    pub start_time: String,
    #[serde(rename = "end-time")]
    pub end_time: String,
}

/// Last `connect logs` query and the token of its next page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogsCursor {
    pub query: LogsQuery,
    #[serde(rename = "next-page-token")]
    pub next_page_token: String,
}
