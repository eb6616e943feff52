//! Environment command handlers

use log::debug;

use crate::api::helpers::{confirm_and_delete, not_found};
use crate::cli::{DeleteArgs, EnvironmentAction};
use crate::deletion::DeletionRequest;
use crate::error::Result;
use crate::output::{output_describe, output_list};
use crate::resource::ResourceKind;
use crate::session::Session;
use crate::ui::{create_spinner, finish_spinner};

use super::models::Environment;

/// Dispatch `confluent environment` subcommands
pub async fn run_environment_command(session: &Session, action: &EnvironmentAction) -> Result<()> {
    match action {
        EnvironmentAction::List(args) => {
            let client = session.client()?;
            let spinner = create_spinner("Fetching environments...", session.batch);
            let environments = client.list_environments().await;
            finish_spinner(spinner);
            output_list(&environments?, args.output)
        }
        EnvironmentAction::Describe(args) => {
            let environment = describe(session, &args.id).await?;
            output_describe(&environment, args.output.output)
        }
        EnvironmentAction::Use(args) => {
            let environment = describe(session, &args.id).await?;
            session.update_context(|ctx| {
                if ctx.environment.as_deref() != Some(environment.id.as_str()) {
                    // Clusters belong to the previous environment
                    ctx.kafka_cluster = None;
                }
                ctx.environment = Some(environment.id.clone());
            })?;
            println!("Using environment \"{}\".", environment.id);
            Ok(())
        }
        EnvironmentAction::Unset => {
            session.update_context(|ctx| {
                ctx.environment = None;
                ctx.kafka_cluster = None;
            })?;
            println!("Unset current environment.");
            Ok(())
        }
        EnvironmentAction::Delete(args) => run_delete(session, args).await,
    }
}

async fn describe(session: &Session, id: &str) -> Result<Environment> {
    crate::deletion::validate_prefixes(ResourceKind::Environment, &[id.to_string()])?;
    let client = session.client()?;
    client
        .get_environment(id)
        .await?
        .ok_or_else(|| not_found(ResourceKind::Environment, id))
}

async fn run_delete(session: &Session, args: &DeleteArgs) -> Result<()> {
    let request = DeletionRequest::new(ResourceKind::Environment, &args.ids, args.force);
    request.validate_prefixes()?;

    let client = session.client()?;
    let existing = client.list_environments().await?;
    debug!("{} environments visible", existing.len());

    let client = &client;
    confirm_and_delete(session, &request, &existing, move |id| async move {
        client.delete_environment(&id).await
    })
    .await?;

    // Forget the environment if it was the active one
    if let Some(current) = &session.context.environment {
        if args.ids.contains(current) && session.context_name.is_some() {
            let current = current.clone();
            session.update_context(|ctx| {
                if ctx.environment.as_deref() == Some(current.as_str()) {
                    ctx.environment = None;
                    ctx.kafka_cluster = None;
                }
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use crate::context::ContextStore;
    use clap::Parser;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session_for(server: &MockServer, dir: &TempDir, extra: &[&str]) -> (Session, EnvironmentAction) {
        let uri = server.uri();
        let mut argv = vec![
            "confluent",
            "--url",
            uri.as_str(),
            "--api-key",
            "k",
            "--api-secret",
            "s",
            "--batch",
            "environment",
        ];
        argv.extend_from_slice(extra);
        let cli = Cli::parse_from(argv);
        let store = ContextStore::with_path(dir.path().join("config.json"));
        let session = Session::with_store(&cli, store).unwrap();
        let Command::Environment { action } = cli.command else {
            unreachable!()
        };
        (session, action)
    }

    fn list_body() -> serde_json::Value {
        serde_json::json!({
            "data": [
                {"id": "env-1", "display_name": "prod"},
                {"id": "env-2", "display_name": "dev"}
            ]
        })
    }

    #[tokio::test]
    async fn test_delete_rejects_bad_prefix_before_any_request() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body()))
            .expect(0)
            .mount(&server)
            .await;

        let (session, action) = session_for(&server, &dir, &["delete", "lkc-1", "--force"]);
        let err = run_environment_command(&session, &action).await.unwrap_err();
        assert_eq!(err.to_string(), "invalid environment ID \"lkc-1\"");
    }

    #[tokio::test]
    async fn test_delete_missing_ids_fail_before_delete() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .and(path("/org/v2/environments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body()))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let (session, action) =
            session_for(&server, &dir, &["delete", "env-1", "env-9", "--force"]);
        let err = run_environment_command(&session, &action).await.unwrap_err();
        assert_eq!(err.to_string(), "Environment \"env-9\" not found");
    }

    #[tokio::test]
    async fn test_delete_partial_failure_reports_batch() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .and(path("/org/v2/environments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(list_body()))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/org/v2/environments/env-1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/org/v2/environments/env-2"))
            .respond_with(ResponseTemplate::new(409).set_body_json(serde_json::json!({
                "errors": [{"detail": "environment has active clusters"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (session, action) =
            session_for(&server, &dir, &["delete", "env-1", "env-2", "--force"]);
        let err = run_environment_command(&session, &action).await.unwrap_err();
        assert_eq!(err.count(), 1);
        assert!(err.to_string().starts_with("1 of 2 operations failed:"));
        assert!(err.to_string().contains("active clusters"));
    }

    #[tokio::test]
    async fn test_describe_not_found() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .and(path("/org/v2/environments/env-404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let (session, action) = session_for(&server, &dir, &["describe", "env-404"]);
        let err = run_environment_command(&session, &action).await.unwrap_err();
        assert_eq!(
            err.suggestion().as_deref(),
            Some("List available environment with `confluent environment list`.")
        );
    }
}
