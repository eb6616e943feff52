//! Connector, offset and log data models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::traits::ApiResource;
use crate::output::Tabular;

/// One entry of the `expand=id,status,info` connector listing
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ExpandedConnector {
    pub id: ConnectorId,
    pub info: ConnectorInfo,
    #[serde(default)]
    pub status: ConnectorStatus,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ConnectorId {
    pub id: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ConnectorInfo {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ConnectorStatus {
    #[serde(default)]
    pub connector: ConnectorState,
    #[serde(default)]
    pub tasks: Vec<TaskState>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct ConnectorState {
    #[serde(default)]
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TaskState {
    pub id: u32,
    #[serde(default)]
    pub state: String,
}

impl ApiResource for ExpandedConnector {
    fn id(&self) -> &str {
        &self.id.id
    }

    fn name(&self) -> &str {
        &self.info.name
    }
}

impl Tabular for ExpandedConnector {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Status", "Type", "Trace"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.id.clone(),
            self.info.name.clone(),
            self.status.connector.state.clone(),
            self.info.kind.clone(),
            self.status.connector.trace.clone().unwrap_or_default(),
        ]
    }
}

/// Current offsets of a connector
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ConnectorOffsets {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub offsets: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<OffsetsMetadata>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OffsetsMetadata {
    #[serde(default)]
    pub observed_at: String,
}

impl Tabular for ConnectorOffsets {
    fn headers() -> &'static [&'static str] {
        &["Name", "Offsets", "Observed At"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            serde_json::to_string(&self.offsets).unwrap_or_default(),
            self.metadata
                .as_ref()
                .map(|m| m.observed_at.clone())
                .unwrap_or_default(),
        ]
    }
}

/// Body of an offset alter request
#[derive(Serialize, Debug)]
pub struct AlterOffsetsRequest<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub offsets: &'a [serde_json::Value],
}

/// `offsets` section of an alter config file
#[derive(Deserialize, Debug)]
pub struct OffsetsFile {
    pub offsets: Vec<serde_json::Value>,
}

/// Outcome of the most recent offset request
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OffsetRequestStatus {
    #[serde(default)]
    pub name: String,
    pub status: OffsetPhase,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous_offsets: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OffsetPhase {
    pub phase: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub const PHASE_PENDING: &str = "PENDING";
pub const PHASE_FAILED: &str = "FAILED";

impl OffsetRequestStatus {
    pub fn is_pending(&self) -> bool {
        self.status.phase == PHASE_PENDING
    }
}

impl Tabular for OffsetRequestStatus {
    fn headers() -> &'static [&'static str] {
        &["Name", "Phase", "Message", "Applied At"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.status.phase.clone(),
            self.status.message.clone().unwrap_or_default(),
            self.applied_at.clone().unwrap_or_default(),
        ]
    }
}

/// Log search request
#[derive(Serialize, Debug)]
pub struct LogSearchRequest<'a> {
    pub crn: String,
    pub search: LogSearch<'a>,
    pub sort: &'static str,
    pub start_time: &'a str,
    pub end_time: &'a str,
}

#[derive(Serialize, Debug)]
pub struct LogSearch<'a> {
    pub level: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<&'a str>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LogEntry {
    pub timestamp: String,
    #[serde(default)]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default)]
    pub message: String,
}

impl Tabular for LogEntry {
    fn headers() -> &'static [&'static str] {
        &["Timestamp", "Level", "Task ID", "Message"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.timestamp.clone(),
            self.level.clone(),
            self.task_id.clone().unwrap_or_default(),
            self.message.clone(),
        ]
    }
}
