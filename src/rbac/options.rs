//! Role-binding options for Confluent Platform (MDS)

use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

use super::crn::parse_resource;
use super::principal::validate_principal;

/// How a resource name is matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatternType {
    Literal,
    Prefixed,
}

/// A resource pattern as MDS expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePattern {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    pub name: String,
    #[serde(rename = "patternType")]
    pub pattern_type: PatternType,
}

impl ResourcePattern {
    /// Parse `<Type>:<Name>`; `prefix` selects `PREFIXED` matching
    pub fn parse(resource: &str, prefix: bool) -> Result<Self> {
        let (resource_type, name) = parse_resource(resource)?;
        Ok(Self {
            resource_type,
            name,
            pattern_type: if prefix {
                PatternType::Prefixed
            } else {
                PatternType::Literal
            },
        })
    }
}

/// Cluster identifiers of an MDS scope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeClusters {
    #[serde(rename = "kafka-cluster", skip_serializing_if = "Option::is_none")]
    pub kafka_cluster: Option<String>,
    #[serde(
        rename = "schema-registry-cluster",
        skip_serializing_if = "Option::is_none"
    )]
    pub schema_registry_cluster: Option<String>,
    #[serde(rename = "ksql-cluster", skip_serializing_if = "Option::is_none")]
    pub ksql_cluster: Option<String>,
    #[serde(rename = "connect-cluster", skip_serializing_if = "Option::is_none")]
    pub connect_cluster: Option<String>,
}

/// An MDS scope: either explicit cluster IDs or a registered cluster name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MdsScope {
    #[serde(default)]
    pub clusters: ScopeClusters,
    #[serde(rename = "clusterName", skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
}

/// Scope flags shared by Platform role-binding and ACL commands
#[derive(Debug, Clone, Default)]
pub struct MdsScopeFlags {
    pub kafka_cluster: Option<String>,
    pub schema_registry_cluster: Option<String>,
    pub ksql_cluster: Option<String>,
    pub connect_cluster: Option<String>,
    pub cluster_name: Option<String>,
}

impl MdsScope {
    /// Validate and assemble the scope.
    ///
    /// A cluster name excludes cluster IDs. Without one, a Kafka cluster is
    /// required and at most one non-Kafka cluster may be added.
    pub fn from_flags(flags: &MdsScopeFlags) -> Result<Self> {
        let non_kafka = [
            &flags.schema_registry_cluster,
            &flags.ksql_cluster,
            &flags.connect_cluster,
        ]
        .iter()
        .filter(|f| f.is_some())
        .count();

        if let Some(name) = &flags.cluster_name {
            if flags.kafka_cluster.is_some() || non_kafka > 0 {
                return Err(CliError::usage(
                    "cannot specify both cluster name and cluster scope",
                ));
            }
            return Ok(Self {
                clusters: ScopeClusters::default(),
                cluster_name: Some(name.clone()),
            });
        }

        if flags.kafka_cluster.is_none() {
            if non_kafka > 0 {
                return Err(CliError::usage(
                    "must also specify a `--kafka-cluster` to uniquely identify the scope",
                ));
            }
            return Err(CliError::usage_with_suggestion(
                "must specify either cluster ID to indicate role binding scope or the cluster name",
                "Use `--kafka-cluster` or `--cluster-name`.",
            ));
        }

        if non_kafka > 1 {
            return Err(CliError::usage(
                "cannot specify more than one non-Kafka cluster ID for a scope",
            ));
        }

        Ok(Self {
            clusters: ScopeClusters {
                kafka_cluster: flags.kafka_cluster.clone(),
                schema_registry_cluster: flags.schema_registry_cluster.clone(),
                ksql_cluster: flags.ksql_cluster.clone(),
                connect_cluster: flags.connect_cluster.clone(),
            },
            cluster_name: None,
        })
    }
}

/// Everything a Platform role-binding call needs, validated once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleBindingOptions {
    pub role: String,
    pub resource: Option<ResourcePattern>,
    pub principal: String,
    pub scope: MdsScope,
}

impl RoleBindingOptions {
    pub fn new(
        role: &str,
        principal: &str,
        resource: Option<&str>,
        prefix: bool,
        scope: &MdsScopeFlags,
    ) -> Result<Self> {
        validate_principal(principal)?;
        if prefix && resource.is_none() {
            return Err(CliError::usage("`--prefix` requires `--resource`"));
        }
        let resource = resource
            .map(|r| ResourcePattern::parse(r, prefix))
            .transpose()?;
        Ok(Self {
            role: role.to_string(),
            resource,
            principal: principal.to_string(),
            scope: MdsScope::from_flags(scope)?,
        })
    }
}

/// Request body for resource-scoped bindings
#[derive(Debug, Serialize)]
pub struct ResourcesRequest<'a> {
    pub scope: &'a MdsScope,
    #[serde(rename = "resourcePatterns")]
    pub resource_patterns: Vec<&'a ResourcePattern>,
}
