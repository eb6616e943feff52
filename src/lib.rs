//! confluent - Manage Confluent Cloud and Confluent Platform resources
//!
//! # Features
//!
//! - Named contexts for Cloud organizations and Platform MDS endpoints
//! - Environments, service accounts, identity pools, users, Kafka clusters
//! - Role bindings scoped by CRN pattern (Cloud) or MDS scope (Platform)
//! - Kafka ACLs on Confluent Platform
//! - Connector lifecycle, offsets and paginated logs
//! - Human tables or JSON/YAML output
//!
//! # Example
//!
//! ```bash
//! # Store credentials in a context
//! confluent context set prod --api-key KEY --api-secret SECRET
//!
//! # Select an environment and list its clusters
//! confluent environment use env-123
//! confluent kafka cluster list
//!
//! # Delete several service accounts without prompting
//! confluent iam service-account delete sa-1 sa-2 --force
//! ```

pub mod acl;
pub mod api;
pub mod cli;
pub mod config;
pub mod context;
pub mod deletion;
pub mod error;
pub mod output;
pub mod rbac;
pub mod resource;
pub mod retry;
pub mod session;
pub mod ui;
pub mod validate;

use log::debug;

pub use api::{ConfluentClient, CredentialResolver, Credentials};
pub use cli::{Cli, Command, OutputFormat};
pub use context::{ConnectionFlags, ContextStore};
pub use error::{CliError, Result};
pub use session::Session;

/// Run a parsed command line to completion
pub async fn run(cli: &Cli) -> Result<()> {
    if let Command::Context { action } = &cli.command {
        let connection = ConnectionFlags {
            url: cli.url.clone(),
            api_key: cli.api_key.clone(),
            api_secret: cli.api_secret.clone(),
        };
        return context::run_context_command(&ContextStore::new(), action, &connection);
    }

    let session = Session::from_cli(cli)?;
    debug!(
        "Using context {:?} ({})",
        session.context_name,
        session.kind()
    );

    match &cli.command {
        Command::Context { .. } => Ok(()),
        Command::Environment { action } => api::run_environment_command(&session, action).await,
        Command::Iam { command } => api::run_iam_command(&session, command).await,
        Command::Kafka { command } => api::run_kafka_command(&session, command).await,
        Command::Connect { command } => api::run_connect_command(&session, command).await,
    }
}
