//! Kafka ACL bindings for Confluent Platform

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};
use crate::output::Tabular;
use crate::rbac::{validate_principal, MdsScope, PatternType};

/// Kafka resource types that ACLs apply to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AclResourceType {
    Topic,
    Group,
    Cluster,
    TransactionalId,
}

/// Kafka ACL operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AclOperation {
    All,
    Read,
    Write,
    Create,
    Delete,
    Alter,
    Describe,
    ClusterAction,
    DescribeConfigs,
    AlterConfigs,
    IdempotentWrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AclPermission {
    Allow,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclPattern {
    #[serde(rename = "resourceType")]
    pub resource_type: AclResourceType,
    pub name: String,
    #[serde(rename = "patternType")]
    pub pattern_type: PatternType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclEntry {
    pub principal: String,
    #[serde(rename = "permissionType")]
    pub permission_type: AclPermission,
    pub operation: AclOperation,
    pub host: String,
}

/// Pattern plus entry, the unit MDS creates and returns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclBinding {
    pub pattern: AclPattern,
    pub entry: AclEntry,
}

impl Tabular for AclBinding {
    fn headers() -> &'static [&'static str] {
        &[
            "Principal",
            "Permission",
            "Operation",
            "Host",
            "Resource Type",
            "Resource Name",
            "Pattern Type",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.entry.principal.clone(),
            enum_text(&self.entry.permission_type),
            enum_text(&self.entry.operation),
            self.entry.host.clone(),
            enum_text(&self.pattern.resource_type),
            self.pattern.name.clone(),
            enum_text(&self.pattern.pattern_type),
        ]
    }
}

/// Wire name of a unit enum variant ("TRANSACTIONAL_ID")
fn enum_text<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

/// Request body for creating one binding
#[derive(Debug, Serialize)]
pub struct CreateAclRequest<'a> {
    pub scope: &'a MdsScope,
    #[serde(rename = "aclBinding")]
    pub acl_binding: &'a AclBinding,
}

/// Partial pattern used when searching or deleting
#[derive(Debug, Clone, Default, Serialize)]
pub struct AclPatternFilter {
    #[serde(rename = "resourceType", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<AclResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "patternType", skip_serializing_if = "Option::is_none")]
    pub pattern_type: Option<PatternType>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AclEntryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
    #[serde(rename = "permissionType", skip_serializing_if = "Option::is_none")]
    pub permission_type: Option<AclPermission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<AclOperation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AclBindingFilter {
    #[serde(rename = "patternFilter")]
    pub pattern_filter: AclPatternFilter,
    #[serde(rename = "entryFilter")]
    pub entry_filter: AclEntryFilter,
}

/// Request body for searching or deleting bindings
#[derive(Debug, Serialize)]
pub struct AclFilterRequest<'a> {
    pub scope: &'a MdsScope,
    #[serde(rename = "aclBindingFilter")]
    pub acl_binding_filter: &'a AclBindingFilter,
}

/// ACL flags of `kafka acl create|delete|list`
#[derive(Debug, Clone, Default)]
pub struct AclFlags {
    pub allow: bool,
    pub deny: bool,
    pub principal: Option<String>,
    pub operations: Vec<AclOperation>,
    pub host: Option<String>,
    pub cluster_scope: bool,
    pub topic: Option<String>,
    pub consumer_group: Option<String>,
    pub transactional_id: Option<String>,
    pub prefix: bool,
}

const RESOURCE_FLAGS_MESSAGE: &str =
    "exactly one of `--cluster-scope`, `--consumer-group`, `--topic`, or `--transactional-id` must be set";
const PERMISSION_FLAGS_MESSAGE: &str = "exactly one of `--allow` or `--deny` must be set";

/// Name MDS uses for the cluster resource
const CLUSTER_RESOURCE_NAME: &str = "kafka-cluster";

impl AclFlags {
    /// The single resource selected by the flags, if any
    fn resource(&self) -> Result<Option<(AclResourceType, String)>> {
        let mut selected = Vec::new();
        if self.cluster_scope {
            selected.push((AclResourceType::Cluster, CLUSTER_RESOURCE_NAME.to_string()));
        }
        if let Some(t) = &self.topic {
            selected.push((AclResourceType::Topic, t.clone()));
        }
        if let Some(g) = &self.consumer_group {
            selected.push((AclResourceType::Group, g.clone()));
        }
        if let Some(t) = &self.transactional_id {
            selected.push((AclResourceType::TransactionalId, t.clone()));
        }
        match selected.len() {
            0 => Ok(None),
            1 => Ok(selected.pop()),
            _ => Err(CliError::usage(RESOURCE_FLAGS_MESSAGE)),
        }
    }

    fn permission(&self) -> Result<Option<AclPermission>> {
        match (self.allow, self.deny) {
            (true, true) => Err(CliError::usage(PERMISSION_FLAGS_MESSAGE)),
            (true, false) => Ok(Some(AclPermission::Allow)),
            (false, true) => Ok(Some(AclPermission::Deny)),
            (false, false) => Ok(None),
        }
    }

    fn pattern_type(&self) -> PatternType {
        if self.prefix {
            PatternType::Prefixed
        } else {
            PatternType::Literal
        }
    }

    /// Fully specified bindings for `create`, one per operation
    pub fn bindings(&self) -> Result<Vec<AclBinding>> {
        let (resource_type, name) = self
            .resource()?
            .ok_or_else(|| CliError::usage(RESOURCE_FLAGS_MESSAGE))?;
        let permission_type = self
            .permission()?
            .ok_or_else(|| CliError::usage(PERMISSION_FLAGS_MESSAGE))?;
        let principal = self
            .principal
            .as_deref()
            .ok_or_else(|| CliError::usage("`--principal` is required"))?;
        validate_principal(principal)?;
        if self.operations.is_empty() {
            return Err(CliError::usage("at least one `--operation` is required"));
        }

        let pattern = AclPattern {
            resource_type,
            name,
            pattern_type: self.pattern_type(),
        };
        let host = self.host.clone().unwrap_or_else(|| "*".to_string());

        Ok(self
            .operations
            .iter()
            .map(|op| AclBinding {
                pattern: pattern.clone(),
                entry: AclEntry {
                    principal: principal.to_string(),
                    permission_type,
                    operation: *op,
                    host: host.clone(),
                },
            })
            .collect())
    }

    /// Filters for `list` and `delete`; unset flags match anything.
    /// Several operations produce one filter each.
    pub fn filters(&self) -> Result<Vec<AclBindingFilter>> {
        if let Some(principal) = &self.principal {
            validate_principal(principal)?;
        }
        let resource = self.resource()?;
        let permission_type = self.permission()?;

        let pattern_filter = AclPatternFilter {
            pattern_type: resource.as_ref().map(|_| self.pattern_type()),
            resource_type: resource.as_ref().map(|(t, _)| *t),
            name: resource.map(|(_, n)| n),
        };
        let entry = |operation: Option<AclOperation>| AclBindingFilter {
            pattern_filter: pattern_filter.clone(),
            entry_filter: AclEntryFilter {
                principal: self.principal.clone(),
                permission_type,
                operation,
                host: self.host.clone(),
            },
        };

        if self.operations.is_empty() {
            Ok(vec![entry(None)])
        } else {
            Ok(self.operations.iter().map(|op| entry(Some(*op))).collect())
        }
    }
}
