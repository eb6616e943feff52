//! Environment CLI arguments

use clap::Subcommand;

use super::common::{DeleteArgs, DescribeArgs, IdArg, OutputArgs};

/// `confluent environment` subcommands
#[derive(Subcommand, Debug)]
pub enum EnvironmentAction {
    /// List environments
    List(OutputArgs),

    /// Describe an environment
    Describe(DescribeArgs),

    /// Use an environment in subsequent commands
    Use(IdArg),

    /// Stop using the current environment
    Unset,

    /// Delete one or more environments
    Delete(DeleteArgs),
}
