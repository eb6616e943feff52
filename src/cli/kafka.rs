//! Kafka CLI arguments

use clap::{Args, Subcommand};

use crate::acl::{AclFlags, AclOperation};
use crate::rbac::MdsScopeFlags;

use super::common::{IdArg, OutputArgs};

/// `confluent kafka` resources
#[derive(Subcommand, Debug)]
pub enum KafkaCommand {
    /// Manage Kafka clusters
    Cluster {
        #[command(subcommand)]
        action: KafkaClusterAction,
    },

    /// Manage Kafka ACLs (Confluent Platform)
    Acl {
        #[command(subcommand)]
        action: AclAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum KafkaClusterAction {
    /// List Kafka clusters of an environment
    List(ClusterListArgs),
    /// Describe a Kafka cluster
    Describe(ClusterDescribeArgs),
    /// Use a Kafka cluster in subsequent commands
    Use(IdArg),
    /// Stop using the current Kafka cluster
    Unset,
}

/// `--environment` override of the context environment
#[derive(Args, Debug, Clone, Default)]
pub struct EnvironmentArg {
    /// Environment ID (defaults to the current environment)
    #[arg(long)]
    pub environment: Option<String>,
}

#[derive(Args, Debug)]
pub struct ClusterListArgs {
    #[command(flatten)]
    pub environment: EnvironmentArg,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct ClusterDescribeArgs {
    /// Kafka cluster ID
    pub id: String,

    #[command(flatten)]
    pub environment: EnvironmentArg,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Subcommand, Debug)]
pub enum AclAction {
    /// Create ACLs, one per operation
    #[command(after_help = "EXAMPLES:\n  \
        confluent kafka acl create --kafka-cluster testcluster --allow --principal User:42 \\\n    \
        --operation read --topic dan")]
    Create(AclArgs),

    /// List ACLs matching the given flags
    List(AclListArgs),

    /// Delete ACLs matching the given flags
    Delete(AclDeleteArgs),
}

/// MDS scope of an ACL command
#[derive(Args, Debug, Clone, Default)]
pub struct AclScopeArgs {
    /// Kafka cluster ID
    #[arg(long)]
    pub kafka_cluster: Option<String>,

    /// Registered cluster name
    #[arg(long)]
    pub cluster_name: Option<String>,
}

impl AclScopeArgs {
    pub fn mds_scope_flags(&self) -> MdsScopeFlags {
        MdsScopeFlags {
            kafka_cluster: self.kafka_cluster.clone(),
            cluster_name: self.cluster_name.clone(),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct AclArgs {
    #[command(flatten)]
    pub scope: AclScopeArgs,

    /// Grant access
    #[arg(long, default_value_t = false)]
    pub allow: bool,

    /// Deny access
    #[arg(long, default_value_t = false)]
    pub deny: bool,

    /// Principal as "<Principal Type>:<Principal Name>"
    #[arg(long)]
    pub principal: Option<String>,

    /// Operations (repeat or comma-separate)
    #[arg(long = "operation", value_enum, value_delimiter = ',')]
    pub operations: Vec<AclOperation>,

    /// Host the principal connects from
    #[arg(long)]
    pub host: Option<String>,

    /// ACL applies to the cluster itself
    #[arg(long, default_value_t = false)]
    pub cluster_scope: bool,

    /// Topic name
    #[arg(long)]
    pub topic: Option<String>,

    /// Consumer group ID
    #[arg(long)]
    pub consumer_group: Option<String>,

    /// Transactional ID
    #[arg(long)]
    pub transactional_id: Option<String>,

    /// Match the resource name as a prefix
    #[arg(long, default_value_t = false)]
    pub prefix: bool,
}

impl AclArgs {
    pub fn acl_flags(&self) -> AclFlags {
        AclFlags {
            allow: self.allow,
            deny: self.deny,
            principal: self.principal.clone(),
            operations: self.operations.clone(),
            host: self.host.clone(),
            cluster_scope: self.cluster_scope,
            topic: self.topic.clone(),
            consumer_group: self.consumer_group.clone(),
            transactional_id: self.transactional_id.clone(),
            prefix: self.prefix,
        }
    }
}

#[derive(Args, Debug)]
pub struct AclListArgs {
    #[command(flatten)]
    pub acl: AclArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct AclDeleteArgs {
    #[command(flatten)]
    pub acl: AclArgs,

    /// Skip the confirmation prompt
    #[arg(long, default_value_t = false)]
    pub force: bool,
}
