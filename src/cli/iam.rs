//! IAM CLI arguments

use clap::{Args, Subcommand};

use super::common::{DeleteArgs, DescribeArgs, IdArg, OutputArgs};
use super::rbac::RbacCommand;

/// `confluent iam` resources
#[derive(Subcommand, Debug)]
pub enum IamCommand {
    /// Manage service accounts
    #[command(name = "service-account", visible_alias = "sa")]
    ServiceAccount {
        #[command(subcommand)]
        action: ServiceAccountAction,
    },

    /// Manage identity pools
    Pool {
        #[command(subcommand)]
        action: PoolAction,
    },

    /// Manage identity providers
    Provider {
        #[command(subcommand)]
        action: ProviderAction,
    },

    /// Manage SSO group mappings
    #[command(name = "group-mapping")]
    GroupMapping {
        #[command(subcommand)]
        action: ReadDeleteAction,
    },

    /// Manage certificate authorities
    #[command(name = "certificate-authority")]
    CertificateAuthority {
        #[command(subcommand)]
        action: ReadDeleteAction,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage role-based access control
    Rbac {
        #[command(subcommand)]
        command: RbacCommand,
    },
}

/// Service account subcommands
#[derive(Subcommand, Debug)]
pub enum ServiceAccountAction {
    /// Create a service account
    Create(ServiceAccountCreateArgs),
    /// List service accounts
    List(OutputArgs),
    /// Describe a service account
    Describe(DescribeArgs),
    /// Update a service account's description
    Update(ServiceAccountUpdateArgs),
    /// Use a service account in subsequent commands
    Use(IdArg),
    /// Stop using the current service account
    Unset,
    /// Delete one or more service accounts
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct ServiceAccountCreateArgs {
    /// Display name
    pub name: String,

    /// Description
    #[arg(long)]
    pub description: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct ServiceAccountUpdateArgs {
    /// Service account ID
    pub id: String,

    /// New description
    #[arg(long)]
    pub description: String,
}

/// Identity pool subcommands; pools belong to an identity provider
#[derive(Subcommand, Debug)]
pub enum PoolAction {
    /// Create an identity pool
    Create(PoolCreateArgs),
    /// List identity pools of a provider
    List(PoolListArgs),
    /// Describe an identity pool
    Describe(PoolDescribeArgs),
    /// Use an identity pool in subsequent commands
    Use(IdArg),
    /// Stop using the current identity pool
    Unset,
    /// Delete one or more identity pools
    Delete(PoolDeleteArgs),
}

#[derive(Args, Debug)]
pub struct ProviderArg {
    /// Identity provider ID
    #[arg(long)]
    pub provider: String,
}

#[derive(Args, Debug)]
pub struct PoolCreateArgs {
    /// Display name
    pub name: String,

    #[command(flatten)]
    pub provider: ProviderArg,

    /// Claim used as the identity, e.g. "claims.sub"
    #[arg(long)]
    pub identity_claim: String,

    /// CEL filter selecting which tokens belong to the pool
    #[arg(long)]
    pub filter: String,

    /// Description
    #[arg(long, default_value = "")]
    pub description: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct PoolListArgs {
    #[command(flatten)]
    pub provider: ProviderArg,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct PoolDescribeArgs {
    #[command(flatten)]
    pub provider: ProviderArg,

    #[command(flatten)]
    pub describe: DescribeArgs,
}

#[derive(Args, Debug)]
pub struct PoolDeleteArgs {
    #[command(flatten)]
    pub provider: ProviderArg,

    #[command(flatten)]
    pub delete: DeleteArgs,
}

/// Identity provider subcommands
#[derive(Subcommand, Debug)]
pub enum ProviderAction {
    /// List identity providers
    List(OutputArgs),
}

/// list/describe/delete for resources without create or update
#[derive(Subcommand, Debug)]
pub enum ReadDeleteAction {
    /// List resources
    List(OutputArgs),
    /// Describe a resource
    Describe(DescribeArgs),
    /// Delete one or more resources
    Delete(DeleteArgs),
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserAction {
    /// List users
    List(OutputArgs),
    /// Describe a user
    Describe(DescribeArgs),
    /// Invite a user to the organization
    Invite(InviteArgs),
    /// Delete one or more users
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct InviteArgs {
    /// Email address of the user
    pub email: String,
}
