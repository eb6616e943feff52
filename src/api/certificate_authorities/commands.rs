//! Certificate authority command handlers

use crate::api::helpers::{confirm_and_delete, not_found};
use crate::cli::ReadDeleteAction;
use crate::deletion::{validate_prefixes, DeletionRequest};
use crate::error::Result;
use crate::output::{output_describe, output_list};
use crate::resource::ResourceKind;
use crate::session::Session;
use crate::ui::{create_spinner, finish_spinner};

const KIND: ResourceKind = ResourceKind::CertificateAuthority;

/// Dispatch `confluent iam certificate-authority` subcommands
pub async fn run_certificate_authority_command(
    session: &Session,
    action: &ReadDeleteAction,
) -> Result<()> {
    match action {
        ReadDeleteAction::List(args) => {
            let client = session.client()?;
            let spinner = create_spinner("Fetching certificate authorities...", session.batch);
            let cas = client.list_certificate_authorities().await;
            finish_spinner(spinner);
            output_list(&cas?, args.output)
        }
        ReadDeleteAction::Describe(args) => {
            validate_prefixes(KIND, std::slice::from_ref(&args.id))?;
            let client = session.client()?;
            let ca = client
                .get_certificate_authority(&args.id)
                .await?
                .ok_or_else(|| not_found(KIND, &args.id))?;
            output_describe(&ca, args.output.output)
        }
        ReadDeleteAction::Delete(args) => {
            let request = DeletionRequest::new(KIND, &args.ids, args.force);
            request.validate_prefixes()?;

            let client = session.client()?;
            let existing = client.list_certificate_authorities().await?;

            let client = &client;
            confirm_and_delete(session, &request, &existing, move |id| async move {
                client.delete_certificate_authority(&id).await
            })
            .await
        }
    }
}
