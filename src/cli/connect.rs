//! Connect CLI arguments

use std::path::PathBuf;

use clap::{Args, Subcommand};

use super::common::{DeleteArgs, OutputArgs};

/// `confluent connect` resources
#[derive(Subcommand, Debug)]
pub enum ConnectCommand {
    /// Manage connectors
    Cluster {
        #[command(subcommand)]
        action: ConnectorAction,
    },

    /// Manage connector offsets
    Offset {
        #[command(subcommand)]
        action: OffsetAction,
    },

    /// Query connector logs
    #[command(after_help = "EXAMPLES:\n  \
        confluent connect logs lcc-123 --level \"ERROR|WARN\"\n  \
        confluent connect logs lcc-123 --level ERROR --next")]
    Logs(LogsArgs),
}

/// Environment and Kafka cluster a connector runs in; both fall back to the
/// current context
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectScopeArgs {
    /// Environment ID
    #[arg(long)]
    pub environment: Option<String>,

    /// Kafka cluster ID
    #[arg(long)]
    pub cluster: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ConnectorAction {
    /// List connectors
    List(ConnectorListArgs),
    /// Describe a connector
    Describe(ConnectorDescribeArgs),
    /// Delete one or more connectors
    Delete(ConnectorDeleteArgs),
}

#[derive(Args, Debug)]
pub struct ConnectorListArgs {
    #[command(flatten)]
    pub scope: ConnectScopeArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct ConnectorDescribeArgs {
    /// Connector ID
    pub id: String,

    #[command(flatten)]
    pub scope: ConnectScopeArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct ConnectorDeleteArgs {
    #[command(flatten)]
    pub scope: ConnectScopeArgs,

    #[command(flatten)]
    pub delete: DeleteArgs,
}

#[derive(Subcommand, Debug)]
pub enum OffsetAction {
    /// Show the current offsets of a connector
    Describe(ConnectorDescribeArgs),

    /// Replace connector offsets and wait for the request to settle
    Alter(OffsetAlterArgs),

    /// Show the status of the last offset request
    Status(ConnectorDescribeArgs),
}

#[derive(Args, Debug)]
pub struct OffsetAlterArgs {
    /// Connector ID
    pub id: String,

    /// JSON file with an "offsets" array
    #[arg(long)]
    pub config_file: PathBuf,

    #[command(flatten)]
    pub scope: ConnectScopeArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct LogsArgs {
    /// Connector ID
    pub id: String,

    /// Log levels separated by "|", e.g. "ERROR|WARN"
    #[arg(long, value_delimiter = '|', default_value = "ERROR")]
    pub level: Vec<String>,

    /// Only entries containing this text
    #[arg(long)]
    pub search_text: Option<String>,

    /// Start of the window (RFC 3339, defaults to one hour ago)
    #[arg(long)]
    pub start_time: Option<String>,

    /// End of the window (RFC 3339, defaults to now)
    #[arg(long)]
    pub end_time: Option<String>,

    /// Fetch the page after the previous query
    #[arg(long, default_value_t = false)]
    pub next: bool,

    #[command(flatten)]
    pub scope: ConnectScopeArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}
