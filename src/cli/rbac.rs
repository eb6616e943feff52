//! RBAC CLI arguments

use clap::{Args, Subcommand};

use crate::rbac::{MdsScopeFlags, ScopeFlags};

use super::common::OutputArgs;

/// `confluent iam rbac` resources
#[derive(Subcommand, Debug)]
pub enum RbacCommand {
    /// Inspect predefined roles
    Role {
        #[command(subcommand)]
        action: RoleAction,
    },

    /// Manage role bindings
    #[command(name = "role-binding")]
    RoleBinding {
        #[command(subcommand)]
        action: RoleBindingAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum RoleAction {
    /// List roles
    List(OutputArgs),
    /// Describe a role
    Describe(RoleDescribeArgs),
}

#[derive(Args, Debug)]
pub struct RoleDescribeArgs {
    /// Role name
    pub name: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Subcommand, Debug)]
pub enum RoleBindingAction {
    /// Create a role binding
    #[command(after_help = "EXAMPLES:\n  \
        confluent iam rbac role-binding create --principal User:u-123 --role EnvironmentAdmin --environment env-1\n  \
        confluent iam rbac role-binding create --principal User:u-123 --role DeveloperRead \\\n    \
        --environment env-1 --cloud-cluster lkc-1 --kafka-cluster lkc-1 --resource Topic:orders --prefix")]
    Create(RoleBindingCreateArgs),

    /// List role bindings
    List(RoleBindingListArgs),

    /// Delete a role binding
    Delete(RoleBindingDeleteArgs),
}

/// Scope flags shared by every role-binding command.
///
/// Cloud contexts turn them into a CRN pattern, Platform contexts into an
/// MDS scope.
#[derive(Args, Debug, Clone, Default)]
pub struct RoleBindingScopeArgs {
    /// Resource as "<Resource Type>:<Resource Name>"
    #[arg(long)]
    pub resource: Option<String>,

    /// Match the resource name as a prefix
    #[arg(long, default_value_t = false)]
    pub prefix: bool,

    /// Use the environment of the current context
    #[arg(long, default_value_t = false, conflicts_with = "environment")]
    pub current_environment: bool,

    /// Environment ID
    #[arg(long)]
    pub environment: Option<String>,

    /// Flink region ID
    #[arg(long)]
    pub flink_region: Option<String>,

    /// Cloud cluster ID
    #[arg(long)]
    pub cloud_cluster: Option<String>,

    /// Schema Registry cluster ID
    #[arg(long)]
    pub schema_registry_cluster: Option<String>,

    /// ksqlDB cluster ID
    #[arg(long)]
    pub ksql_cluster: Option<String>,

    /// Kafka cluster ID
    #[arg(long)]
    pub kafka_cluster: Option<String>,

    /// Connect cluster ID (Platform)
    #[arg(long)]
    pub connect_cluster: Option<String>,

    /// Registered cluster name (Platform)
    #[arg(long)]
    pub cluster_name: Option<String>,
}

impl RoleBindingScopeArgs {
    pub fn scope_flags(&self, role: Option<&str>) -> ScopeFlags {
        ScopeFlags {
            role: role.map(str::to_string),
            current_environment: self.current_environment,
            environment: self.environment.clone(),
            flink_region: self.flink_region.clone(),
            cloud_cluster: self.cloud_cluster.clone(),
            schema_registry_cluster: self.schema_registry_cluster.clone(),
            ksql_cluster: self.ksql_cluster.clone(),
            kafka_cluster: self.kafka_cluster.clone(),
            resource: self.resource.clone(),
            prefix: self.prefix,
        }
    }

    pub fn mds_scope_flags(&self) -> MdsScopeFlags {
        MdsScopeFlags {
            kafka_cluster: self.kafka_cluster.clone(),
            schema_registry_cluster: self.schema_registry_cluster.clone(),
            ksql_cluster: self.ksql_cluster.clone(),
            connect_cluster: self.connect_cluster.clone(),
            cluster_name: self.cluster_name.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct RoleBindingCreateArgs {
    /// Role name
    #[arg(long)]
    pub role: String,

    /// Principal as "<Principal Type>:<Principal Name>"
    #[arg(long)]
    pub principal: String,

    #[command(flatten)]
    pub scope: RoleBindingScopeArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct RoleBindingListArgs {
    /// Only bindings of this principal
    #[arg(long)]
    pub principal: Option<String>,

    /// Only bindings of this role
    #[arg(long)]
    pub role: Option<String>,

    #[command(flatten)]
    pub scope: RoleBindingScopeArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct RoleBindingDeleteArgs {
    /// Role name
    #[arg(long)]
    pub role: String,

    /// Principal as "<Principal Type>:<Principal Name>"
    #[arg(long)]
    pub principal: String,

    #[command(flatten)]
    pub scope: RoleBindingScopeArgs,

    /// Skip the confirmation prompt
    #[arg(long, default_value_t = false)]
    pub force: bool,
}
