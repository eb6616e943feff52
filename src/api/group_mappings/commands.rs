//! Group mapping command handlers

use crate::api::helpers::{confirm_and_delete, not_found};
use crate::cli::ReadDeleteAction;
use crate::deletion::DeletionRequest;
use crate::error::Result;
use crate::output::{output_describe, output_list};
use crate::resource::ResourceKind;
use crate::session::Session;
use crate::ui::{create_spinner, finish_spinner};

const KIND: ResourceKind = ResourceKind::GroupMapping;

/// Dispatch `confluent iam group-mapping` subcommands.
///
/// IDs are not prefix-checked: mappings created before the rename keep
/// their `pool-` IDs.
pub async fn run_group_mapping_command(session: &Session, action: &ReadDeleteAction) -> Result<()> {
    match action {
        ReadDeleteAction::List(args) => {
            let client = session.client()?;
            let spinner = create_spinner("Fetching group mappings...", session.batch);
            let mappings = client.list_group_mappings().await;
            finish_spinner(spinner);
            output_list(&mappings?, args.output)
        }
        ReadDeleteAction::Describe(args) => {
            let client = session.client()?;
            let mapping = client
                .get_group_mapping(&args.id)
                .await?
                .ok_or_else(|| not_found(KIND, &args.id))?;
            output_describe(&mapping, args.output.output)
        }
        ReadDeleteAction::Delete(args) => {
            let request = DeletionRequest::new(KIND, &args.ids, args.force);
            request.validate_prefixes()?;

            let client = session.client()?;
            let existing = client.list_group_mappings().await?;

            let client = &client;
            confirm_and_delete(session, &request, &existing, move |id| async move {
                client.delete_group_mapping(&id).await
            })
            .await
        }
    }
}
