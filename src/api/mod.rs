//! Confluent REST API client and per-resource command handlers
//!
//! Each resource directory holds its models, the `ConfluentClient` methods
//! that call the API and the handlers behind its subcommands.

mod certificate_authorities;
mod client;
mod connect;
mod credentials;
mod environments;
mod group_mappings;
pub mod helpers;
mod identity;
mod kafka_clusters;
mod mds;
mod organizations;
mod role_bindings;
mod service_accounts;
pub mod traits;
mod users;

pub use certificate_authorities::run_certificate_authority_command;
pub use client::{page_token_from_url, ConfluentClient};
pub use connect::run_connect_command;
pub use credentials::{CredentialResolver, Credentials};
pub use environments::{run_environment_command, Environment};
pub use group_mappings::run_group_mapping_command;
pub use identity::{run_pool_command, run_provider_command, IdentityPool, IdentityProvider};
pub use kafka_clusters::{run_kafka_cluster_command, KafkaCluster};
pub use mds::run_acl_command;
pub use organizations::Organization;
pub use role_bindings::run_rbac_command;
pub use service_accounts::{run_service_account_command, ServiceAccount};
pub use traits::{ApiListResponse, ApiResource, ListMetadata};
pub use users::{run_user_command, User};

use crate::cli::{IamCommand, KafkaCommand};
use crate::error::Result;
use crate::session::Session;

/// Dispatch `confluent iam` subcommands
pub async fn run_iam_command(session: &Session, command: &IamCommand) -> Result<()> {
    match command {
        IamCommand::ServiceAccount { action } => run_service_account_command(session, action).await,
        IamCommand::Pool { action } => run_pool_command(session, action).await,
        IamCommand::Provider { action } => run_provider_command(session, action).await,
        IamCommand::GroupMapping { action } => run_group_mapping_command(session, action).await,
        IamCommand::CertificateAuthority { action } => {
            run_certificate_authority_command(session, action).await
        }
        IamCommand::User { action } => run_user_command(session, action).await,
        IamCommand::Rbac { command } => run_rbac_command(session, command).await,
    }
}

/// Dispatch `confluent kafka` subcommands
pub async fn run_kafka_command(session: &Session, command: &KafkaCommand) -> Result<()> {
    match command {
        KafkaCommand::Cluster { action } => run_kafka_cluster_command(session, action).await,
        KafkaCommand::Acl { action } => run_acl_command(session, action).await,
    }
}
