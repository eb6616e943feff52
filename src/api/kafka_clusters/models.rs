//! Kafka cluster data models

use serde::{Deserialize, Serialize};

use crate::api::traits::ApiResource;
use crate::output::Tabular;

/// Kafka cluster from the cmk v2 API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct KafkaCluster {
    pub id: String,
    #[serde(default)]
    pub spec: KafkaClusterSpec,
    #[serde(default)]
    pub status: KafkaClusterStatus,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct KafkaClusterSpec {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub cloud: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub kafka_bootstrap_endpoint: String,
    #[serde(default)]
    pub http_endpoint: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct KafkaClusterStatus {
    #[serde(default)]
    pub phase: String,
}

impl ApiResource for KafkaCluster {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.spec.display_name
    }
}

impl Tabular for KafkaCluster {
    fn headers() -> &'static [&'static str] {
        &["ID", "Name", "Availability", "Provider", "Region", "Status", "Endpoint"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.spec.display_name.clone(),
            self.spec.availability.to_lowercase(),
            self.spec.cloud.to_lowercase(),
            self.spec.region.clone(),
            self.status.phase.clone(),
            self.spec.kafka_bootstrap_endpoint.clone(),
        ]
    }
}
