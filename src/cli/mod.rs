//! CLI argument parsing

mod common;
mod connect;
mod context;
mod environment;
mod iam;
mod kafka;
mod rbac;

use clap::{Parser, Subcommand};

use crate::config::defaults;

pub use common::{DeleteArgs, DescribeArgs, IdArg, OutputArgs, OutputFormat};
pub use connect::{
    ConnectCommand, ConnectScopeArgs, ConnectorAction, ConnectorDeleteArgs, ConnectorDescribeArgs,
    ConnectorListArgs, LogsArgs, OffsetAction, OffsetAlterArgs,
};
pub use context::{ContextAction, ContextNameArgs, SetContextArgs};
pub use environment::EnvironmentAction;
pub use iam::{
    IamCommand, InviteArgs, PoolAction, PoolCreateArgs, PoolDeleteArgs, PoolDescribeArgs,
    PoolListArgs, ProviderAction, ProviderArg, ReadDeleteAction, ServiceAccountAction,
    ServiceAccountCreateArgs, ServiceAccountUpdateArgs, UserAction,
};
pub use kafka::{
    AclAction, AclArgs, AclDeleteArgs, AclListArgs, AclScopeArgs, ClusterDescribeArgs,
    ClusterListArgs, EnvironmentArg, KafkaClusterAction, KafkaCommand,
};
pub use rbac::{
    RbacCommand, RoleAction, RoleBindingAction, RoleBindingCreateArgs, RoleBindingDeleteArgs,
    RoleBindingListArgs, RoleBindingScopeArgs, RoleDescribeArgs,
};

/// Manage Confluent Cloud and Confluent Platform resources
#[derive(Parser, Debug)]
#[command(name = "confluent")]
#[command(version)]
#[command(about = "Manage Confluent Cloud and Confluent Platform resources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Context to use (overrides CONFLUENT_CONTEXT and the current context)
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// API endpoint (overrides the context URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Cloud API key or Platform username
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Cloud API secret or Platform password
    #[arg(long, global = true)]
    pub api_secret: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Batch mode: no interactive prompts, no spinners
    #[arg(long, global = true, default_value_t = false)]
    pub batch: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage named contexts
    Context {
        #[command(subcommand)]
        action: ContextAction,
    },

    /// Manage environments
    #[command(visible_alias = "env")]
    Environment {
        #[command(subcommand)]
        action: EnvironmentAction,
    },

    /// Manage identity and access
    Iam {
        #[command(subcommand)]
        command: IamCommand,
    },

    /// Manage Kafka clusters and ACLs
    Kafka {
        #[command(subcommand)]
        command: KafkaCommand,
    },

    /// Manage connectors
    Connect {
        #[command(subcommand)]
        command: ConnectCommand,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acl::AclOperation;

    #[test]
    fn test_cli_global_defaults() {
        let cli = Cli::parse_from(["confluent", "environment", "list"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert!(!cli.batch);
        assert!(cli.context.is_none());
        assert!(matches!(
            cli.command,
            Command::Environment {
                action: EnvironmentAction::List(OutputArgs {
                    output: OutputFormat::Human
                })
            }
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "confluent",
            "iam",
            "sa",
            "list",
            "--context",
            "prod",
            "--batch",
            "-o",
            "json",
        ]);
        assert_eq!(cli.context.as_deref(), Some("prod"));
        assert!(cli.batch);
        let Command::Iam {
            command:
                IamCommand::ServiceAccount {
                    action: ServiceAccountAction::List(out),
                },
        } = cli.command
        else {
            panic!("expected service-account list");
        };
        assert_eq!(out.output, OutputFormat::Json);
    }

    #[test]
    fn test_delete_multiple_ids_with_force() {
        let cli = Cli::parse_from([
            "confluent",
            "iam",
            "service-account",
            "delete",
            "sa-1",
            "sa-2",
            "--force",
        ]);
        let Command::Iam {
            command:
                IamCommand::ServiceAccount {
                    action: ServiceAccountAction::Delete(args),
                },
        } = cli.command
        else {
            panic!("expected service-account delete");
        };
        assert_eq!(args.ids, vec!["sa-1", "sa-2"]);
        assert!(args.force);
    }

    #[test]
    fn test_delete_requires_an_id() {
        assert!(Cli::try_parse_from(["confluent", "environment", "delete"]).is_err());
    }

    #[test]
    fn test_acl_create_flags() {
        let cli = Cli::parse_from([
            "confluent",
            "kafka",
            "acl",
            "create",
            "--kafka-cluster",
            "testcluster",
            "--allow",
            "--principal",
            "User:42",
            "--operation",
            "read,describe",
            "--topic",
            "dan",
        ]);
        let Command::Kafka {
            command:
                KafkaCommand::Acl {
                    action: AclAction::Create(args),
                },
        } = cli.command
        else {
            panic!("expected kafka acl create");
        };
        assert_eq!(args.scope.kafka_cluster.as_deref(), Some("testcluster"));
        assert_eq!(
            args.operations,
            vec![AclOperation::Read, AclOperation::Describe]
        );
        assert!(args.acl_flags().allow);
    }

    #[test]
    fn test_role_binding_current_environment_conflicts_with_environment() {
        let result = Cli::try_parse_from([
            "confluent",
            "iam",
            "rbac",
            "role-binding",
            "create",
            "--role",
            "EnvironmentAdmin",
            "--principal",
            "User:u-1",
            "--environment",
            "env-1",
            "--current-environment",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_logs_levels_split_on_pipe() {
        let cli = Cli::parse_from([
            "confluent",
            "connect",
            "logs",
            "lcc-1",
            "--level",
            "ERROR|WARN",
            "--next",
        ]);
        let Command::Connect {
            command: ConnectCommand::Logs(args),
        } = cli.command
        else {
            panic!("expected connect logs");
        };
        assert_eq!(args.level, vec!["ERROR", "WARN"]);
        assert!(args.next);
    }

    #[test]
    fn test_context_set_kind() {
        let cli = Cli::parse_from([
            "confluent",
            "context",
            "set",
            "onprem",
            "--kind",
            "platform",
            "--url",
            "https://mds:8090",
        ]);
        let Command::Context {
            action: ContextAction::Set(args),
        } = cli.command
        else {
            panic!("expected context set");
        };
        assert_eq!(args.kind, Some(crate::context::ContextKind::Platform));
    }
}
