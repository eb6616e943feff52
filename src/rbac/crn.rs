//! CRN pattern construction for cloud role bindings
//!
//! A CRN pattern scopes a role binding, for example
//! `crn://confluent.cloud/organization=o-1/environment=env-1/cloud-cluster=lkc-1/kafka=lkc-1/topic=orders*`.

use crate::error::{CliError, Result};

use super::roles::RoleCatalog;

/// Root of every cloud CRN
pub const CRN_ROOT: &str = "crn://confluent.cloud";

/// Roles that are bound to a single cloud cluster
pub const CLUSTER_SCOPED_ROLES: &[&str] = &["CloudClusterAdmin", "Operator"];

/// Roles that are bound to an environment
pub const ENVIRONMENT_SCOPED_ROLES: &[&str] = &["EnvironmentAdmin", "DataSteward", "DataDiscovery"];

pub const SPECIFY_CLOUD_CLUSTER: &str =
    "must specify `--cloud-cluster` flag to indicate role binding scope";
pub const SPECIFY_ENVIRONMENT: &str =
    "must specify `--environment` flag to indicate role binding scope";

const RESOURCE_FORMAT_MESSAGE: &str = "incorrect resource format specified";
const RESOURCE_FORMAT_SUGGESTION: &str =
    "Resource must be specified in this format: \"<Resource Type>:<Resource Name>\".";

/// Scope flags of a role-binding command, one field per flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeFlags {
    pub role: Option<String>,
    pub current_environment: bool,
    pub environment: Option<String>,
    pub flink_region: Option<String>,
    pub cloud_cluster: Option<String>,
    pub schema_registry_cluster: Option<String>,
    pub ksql_cluster: Option<String>,
    pub kafka_cluster: Option<String>,
    pub resource: Option<String>,
    pub prefix: bool,
}

impl ScopeFlags {
    fn has_environment(&self) -> bool {
        self.current_environment || self.environment.is_some()
    }

    /// Whether building the pattern consults the role catalog
    pub fn needs_catalog(&self) -> bool {
        self.role.is_some() || self.resource.is_some()
    }
}

/// Split `<Type>:<Name>` at the first colon
pub fn parse_resource(resource: &str) -> Result<(String, String)> {
    match resource.split_once(':') {
        Some((kind, name)) if !kind.is_empty() && !name.is_empty() => {
            Ok((kind.to_string(), name.to_string()))
        }
        _ => Err(CliError::format(
            RESOURCE_FORMAT_MESSAGE,
            RESOURCE_FORMAT_SUGGESTION,
        )),
    }
}

/// Map a resource type to its CRN segment key
pub fn normalize_resource_type(resource_type: &str) -> String {
    match resource_type {
        "Cluster" => "kafka".to_string(),
        "ServiceAccount" => "service-account".to_string(),
        "ComputePool" => "compute-pool".to_string(),
        other => other.to_lowercase(),
    }
}

/// Enforce flag combinations that do not depend on the catalog
pub fn validate_scope_flags(flags: &ScopeFlags) -> Result<()> {
    let has_env = flags.has_environment();

    for (flag, set) in [
        ("--cloud-cluster", flags.cloud_cluster.is_some()),
        ("--schema-registry-cluster", flags.schema_registry_cluster.is_some()),
        ("--ksql-cluster", flags.ksql_cluster.is_some()),
    ] {
        if set && !has_env {
            return Err(CliError::usage(format!(
                "must specify `--environment` or `--current-environment` flag with `{}`",
                flag
            )));
        }
    }

    let Some(role) = flags.role.as_deref() else {
        return Ok(());
    };

    if CLUSTER_SCOPED_ROLES.contains(&role) {
        if flags.cloud_cluster.is_none() {
            return Err(CliError::usage(SPECIFY_CLOUD_CLUSTER));
        }
        if !has_env {
            return Err(CliError::usage(SPECIFY_ENVIRONMENT));
        }
    }

    if ENVIRONMENT_SCOPED_ROLES.contains(&role) && !has_env {
        return Err(CliError::usage(SPECIFY_ENVIRONMENT));
    }

    Ok(())
}

/// Check the resource type against the catalog: against the role's own
/// types if a role was given, against every role's types otherwise
fn validate_resource_type(
    resource_type: &str,
    role: Option<&str>,
    catalog: &RoleCatalog,
) -> Result<()> {
    let valid = match role {
        Some(name) => match catalog.find(name) {
            Some(r) => r.resource_types(),
            None => return Err(role_not_found(name)),
        },
        None => catalog.resource_types(),
    };

    if valid.contains(resource_type) {
        return Ok(());
    }

    let valid: Vec<String> = valid.into_iter().collect();
    let message = match role {
        Some(name) => format!(
            "invalid resource type \"{}\" for role \"{}\"",
            resource_type, name
        ),
        None => format!("invalid resource type \"{}\"", resource_type),
    };
    Err(CliError::format(
        message,
        format!("Valid resource types: {}.", valid.join(", ")),
    ))
}

fn role_not_found(name: &str) -> CliError {
    CliError::usage_with_suggestion(
        format!("role \"{}\" not found", name),
        "List available roles with `confluent iam rbac role list`.",
    )
}

/// Assemble the CRN pattern for a cloud role binding.
///
/// `current_environment` is the environment of the active context and is
/// only read when `--current-environment` was given.
pub fn build_crn_pattern(
    flags: &ScopeFlags,
    organization: &str,
    current_environment: Option<&str>,
    catalog: &RoleCatalog,
) -> Result<String> {
    validate_scope_flags(flags)?;

    if let Some(role) = flags.role.as_deref() {
        if catalog.find(role).is_none() {
            return Err(role_not_found(role));
        }
    }

    let mut crn = format!("{}/organization={}", CRN_ROOT, organization);

    if flags.current_environment {
        let env = current_environment.ok_or_else(|| {
            CliError::usage_with_suggestion(
                "no environment is set in the current context",
                "Set one with `confluent environment use <id>`.",
            )
        })?;
        crn.push_str(&format!("/environment={}", env));
    } else if let Some(env) = &flags.environment {
        crn.push_str(&format!("/environment={}", env));
    }

    let segments = [
        ("flink-region", &flags.flink_region),
        ("cloud-cluster", &flags.cloud_cluster),
        ("schema-registry", &flags.schema_registry_cluster),
        ("ksql", &flags.ksql_cluster),
        ("kafka", &flags.kafka_cluster),
    ];
    for (key, value) in segments {
        if let Some(v) = value {
            crn.push_str(&format!("/{}={}", key, v));
        }
    }

    if let Some(resource) = &flags.resource {
        let (resource_type, name) = parse_resource(resource)?;
        let resource_type = normalize_resource_type(&resource_type);
        validate_resource_type(&resource_type, flags.role.as_deref(), catalog)?;
        crn.push_str(&format!("/{}={}", resource_type, name));
        if flags.prefix {
            crn.push('*');
        }
    }

    Ok(crn)
}
