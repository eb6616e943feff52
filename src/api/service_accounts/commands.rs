//! Service account command handlers

use crate::api::helpers::{confirm_and_delete, not_found};
use crate::cli::{DeleteArgs, ServiceAccountAction};
use crate::deletion::{validate_prefixes, DeletionRequest};
use crate::error::Result;
use crate::output::{output_describe, output_list};
use crate::resource::ResourceKind;
use crate::session::Session;
use crate::ui::{create_spinner, finish_spinner};

use super::models::ServiceAccount;

const KIND: ResourceKind = ResourceKind::ServiceAccount;

/// Dispatch `confluent iam service-account` subcommands
pub async fn run_service_account_command(
    session: &Session,
    action: &ServiceAccountAction,
) -> Result<()> {
    match action {
        ServiceAccountAction::Create(args) => {
            let client = session.client()?;
            let sa = client
                .create_service_account(&args.name, &args.description)
                .await?;
            output_describe(&sa, args.output.output)
        }
        ServiceAccountAction::List(args) => {
            let client = session.client()?;
            let spinner = create_spinner("Fetching service accounts...", session.batch);
            let accounts = client.list_service_accounts().await;
            finish_spinner(spinner);
            output_list(&accounts?, args.output)
        }
        ServiceAccountAction::Describe(args) => {
            let sa = describe(session, &args.id).await?;
            output_describe(&sa, args.output.output)
        }
        ServiceAccountAction::Update(args) => {
            validate_prefixes(KIND, std::slice::from_ref(&args.id))?;
            let client = session.client()?;
            client
                .update_service_account(&args.id, &args.description)
                .await?;
            println!("Updated the description of service account \"{}\".", args.id);
            Ok(())
        }
        ServiceAccountAction::Use(args) => {
            let sa = describe(session, &args.id).await?;
            session.update_context(|ctx| ctx.service_account = Some(sa.id.clone()))?;
            println!("Using service account \"{}\".", sa.id);
            Ok(())
        }
        ServiceAccountAction::Unset => {
            session.update_context(|ctx| ctx.service_account = None)?;
            println!("Unset current service account.");
            Ok(())
        }
        ServiceAccountAction::Delete(args) => run_delete(session, args).await,
    }
}

async fn describe(session: &Session, id: &str) -> Result<ServiceAccount> {
    validate_prefixes(KIND, &[id.to_string()])?;
    let client = session.client()?;
    client
        .get_service_account(id)
        .await?
        .ok_or_else(|| not_found(KIND, id))
}

async fn run_delete(session: &Session, args: &DeleteArgs) -> Result<()> {
    let request = DeletionRequest::new(KIND, &args.ids, args.force);
    request.validate_prefixes()?;

    let client = session.client()?;
    let existing = client.list_service_accounts().await?;

    let client = &client;
    confirm_and_delete(session, &request, &existing, move |id| async move {
        client.delete_service_account(&id).await
    })
    .await
}
