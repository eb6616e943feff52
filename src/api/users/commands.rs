//! User command handlers

use crate::api::helpers::{confirm_and_delete, not_found};
use crate::cli::UserAction;
use crate::deletion::{validate_prefixes, DeletionRequest};
use crate::error::Result;
use crate::output::{output_describe, output_list};
use crate::resource::ResourceKind;
use crate::session::Session;
use crate::ui::{create_spinner, finish_spinner};
use crate::validate::validate_email;

const KIND: ResourceKind = ResourceKind::User;

/// Dispatch `confluent iam user` subcommands
pub async fn run_user_command(session: &Session, action: &UserAction) -> Result<()> {
    match action {
        UserAction::List(args) => {
            let client = session.client()?;
            let spinner = create_spinner("Fetching users...", session.batch);
            let users = client.list_users().await;
            finish_spinner(spinner);
            output_list(&users?, args.output)
        }
        UserAction::Describe(args) => {
            validate_prefixes(KIND, std::slice::from_ref(&args.id))?;
            let client = session.client()?;
            let user = client
                .get_user(&args.id)
                .await?
                .ok_or_else(|| not_found(KIND, &args.id))?;
            output_describe(&user, args.output.output)
        }
        UserAction::Invite(args) => {
            validate_email(&args.email)?;
            let client = session.client()?;
            let invitation = client.invite_user(&args.email).await?;
            println!("An invitation has been sent to \"{}\".", invitation.email);
            Ok(())
        }
        UserAction::Delete(args) => {
            let request = DeletionRequest::new(KIND, &args.ids, args.force);
            request.validate_prefixes()?;

            let client = session.client()?;
            let existing = client.list_users().await?;

            let client = &client;
            confirm_and_delete(session, &request, &existing, move |id| async move {
                client.delete_user(&id).await
            })
            .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command, IamCommand};
    use crate::context::ContextStore;
    use clap::Parser;
    use tempfile::TempDir;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_invite_rejects_bad_email_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let uri = server.uri();
        let cli = Cli::parse_from([
            "confluent", "--url", &uri, "--api-key", "k", "--api-secret", "s", "iam", "user",
            "invite", "google.com",
        ]);
        let session =
            Session::with_store(&cli, ContextStore::with_path(dir.path().join("c.json"))).unwrap();
        let Command::Iam {
            command: IamCommand::User { action },
        } = cli.command
        else {
            unreachable!()
        };

        let err = run_user_command(&session, &action).await.unwrap_err();
        assert!(err.to_string().contains("google.com"));
    }
}
