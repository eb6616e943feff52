//! Identity provider and pool command handlers

use crate::api::helpers::{confirm_and_delete, not_found};
use crate::cli::{PoolAction, PoolCreateArgs, PoolDeleteArgs, ProviderAction};
use crate::deletion::{validate_prefixes, DeletionRequest};
use crate::error::Result;
use crate::output::{output_describe, output_list};
use crate::resource::ResourceKind;
use crate::session::Session;
use crate::ui::{create_spinner, finish_spinner};

use super::models::CreateIdentityPoolRequest;

/// Dispatch `confluent iam provider` subcommands
pub async fn run_provider_command(session: &Session, action: &ProviderAction) -> Result<()> {
    match action {
        ProviderAction::List(args) => {
            let client = session.client()?;
            let spinner = create_spinner("Fetching identity providers...", session.batch);
            let providers = client.list_identity_providers().await;
            finish_spinner(spinner);
            output_list(&providers?, args.output)
        }
    }
}

/// Dispatch `confluent iam pool` subcommands
pub async fn run_pool_command(session: &Session, action: &PoolAction) -> Result<()> {
    match action {
        PoolAction::Create(args) => run_create(session, args).await,
        PoolAction::List(args) => {
            let provider = &args.provider.provider;
            validate_prefixes(ResourceKind::IdentityProvider, std::slice::from_ref(provider))?;
            let client = session.client()?;
            let spinner = create_spinner("Fetching identity pools...", session.batch);
            let pools = client.list_identity_pools(provider).await;
            finish_spinner(spinner);
            output_list(&pools?, args.output.output)
        }
        PoolAction::Describe(args) => {
            let provider = &args.provider.provider;
            let id = &args.describe.id;
            validate_prefixes(ResourceKind::IdentityProvider, std::slice::from_ref(provider))?;
            validate_prefixes(ResourceKind::IdentityPool, std::slice::from_ref(id))?;
            let client = session.client()?;
            let pool = client
                .get_identity_pool(provider, id)
                .await?
                .ok_or_else(|| not_found(ResourceKind::IdentityPool, id))?;
            output_describe(&pool, args.describe.output.output)
        }
        PoolAction::Use(args) => {
            validate_prefixes(ResourceKind::IdentityPool, std::slice::from_ref(&args.id))?;
            session.update_context(|ctx| ctx.identity_pool = Some(args.id.clone()))?;
            println!("Using identity pool \"{}\".", args.id);
            Ok(())
        }
        PoolAction::Unset => {
            session.update_context(|ctx| ctx.identity_pool = None)?;
            println!("Unset current identity pool.");
            Ok(())
        }
        PoolAction::Delete(args) => run_delete(session, args).await,
    }
}

async fn run_create(session: &Session, args: &PoolCreateArgs) -> Result<()> {
    let provider = &args.provider.provider;
    validate_prefixes(ResourceKind::IdentityProvider, std::slice::from_ref(provider))?;
    let client = session.client()?;
    let request = CreateIdentityPoolRequest {
        display_name: &args.name,
        description: &args.description,
        identity_claim: &args.identity_claim,
        filter: &args.filter,
    };
    let pool = client.create_identity_pool(provider, &request).await?;
    output_describe(&pool, args.output.output)
}

async fn run_delete(session: &Session, args: &PoolDeleteArgs) -> Result<()> {
    let provider = &args.provider.provider;
    validate_prefixes(ResourceKind::IdentityProvider, std::slice::from_ref(provider))?;
    let request = DeletionRequest::new(ResourceKind::IdentityPool, &args.delete.ids, args.delete.force);
    request.validate_prefixes()?;

    let client = session.client()?;
    let existing = client.list_identity_pools(provider).await?;

    let client = &client;
    confirm_and_delete(session, &request, &existing, move |id| async move {
        client.delete_identity_pool(provider, &id).await
    })
    .await?;

    if let Some(current) = session.context.identity_pool.as_deref() {
        if args.delete.ids.iter().any(|id| id == current) {
            session.update_context(|ctx| ctx.identity_pool = None)?;
        }
    }
    Ok(())
}
