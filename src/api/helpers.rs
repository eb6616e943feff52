//! Helpers shared by resource command handlers

use std::collections::HashMap;
use std::future::Future;

use log::debug;

use crate::deletion::DeletionRequest;
use crate::error::{CliError, Result};
use crate::resource::ResourceKind;
use crate::session::Session;

use super::traits::ApiResource;

/// Existence check, confirmation and sequential delete for a batch of IDs.
///
/// `existing` is the listing the IDs are checked against; its names are
/// what the user types to confirm a single delete. Prefix validation is
/// the caller's job and must happen before the listing is fetched.
pub async fn confirm_and_delete<T, F, Fut>(
    session: &Session,
    request: &DeletionRequest,
    existing: &[T],
    delete_fn: F,
) -> Result<()>
where
    T: ApiResource,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let names: HashMap<&str, &str> = existing.iter().map(|r| (r.id(), r.name())).collect();
    let display_name = match request.ids.as_slice() {
        [id] => names.get(id.as_str()).copied().filter(|n| !n.is_empty()),
        _ => None,
    };

    let prompt = session.prompt();
    let confirmed = request
        .validate_and_confirm(
            &prompt,
            |id| {
                let found = names.contains_key(id.as_str());
                async move { found }
            },
            display_name,
        )
        .await?;

    if !confirmed {
        debug!("Deletion of {} declined", request.kind);
        return Ok(());
    }

    request.execute(delete_fn).await.finish().map(|_| ())
}

/// Not-found error for a describe/use of a single ID
pub fn not_found(kind: ResourceKind, id: &str) -> CliError {
    CliError::NotFound {
        resource: kind.singular().to_string(),
        ids: vec![id.to_string()],
        list_command: kind.list_command().to_string(),
    }
}
