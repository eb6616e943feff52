//! Context management CLI arguments

use clap::{Parser, Subcommand};

use crate::context::ContextKind;

/// Context subcommands for managing named connection profiles
#[derive(Subcommand, Debug)]
pub enum ContextAction {
    /// List all contexts
    List,

    /// Show the current context
    Current,

    /// Create or update a context
    Set(SetContextArgs),

    /// Make a context the current one
    Use(ContextNameArgs),

    /// Delete a context
    Delete(ContextNameArgs),
}

/// Arguments for 'context set'
///
/// URL and credentials come from the global `--url`, `--api-key` and
/// `--api-secret` flags.
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        confluent context set prod --api-key KEY --api-secret SECRET\n  \
        confluent context set onprem --kind platform --url https://mds.corp:8090\n  \
        confluent context set prod --organization 0a1b2c3d   # update existing context")]
pub struct SetContextArgs {
    /// Context name
    pub name: String,

    /// Backend kind (only applied when creating the context)
    #[arg(long, value_enum)]
    pub kind: Option<ContextKind>,

    /// Organization ID
    #[arg(long)]
    pub organization: Option<String>,
}

/// A context name
#[derive(Parser, Debug)]
pub struct ContextNameArgs {
    /// Context name
    pub name: String,
}
