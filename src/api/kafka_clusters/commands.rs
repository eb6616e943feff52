//! Kafka cluster command handlers

use crate::api::helpers::not_found;
use crate::cli::KafkaClusterAction;
use crate::deletion::validate_prefixes;
use crate::error::Result;
use crate::output::{output_describe, output_list};
use crate::resource::ResourceKind;
use crate::session::Session;
use crate::ui::{create_spinner, finish_spinner};

use super::models::KafkaCluster;

const KIND: ResourceKind = ResourceKind::KafkaCluster;

/// Dispatch `confluent kafka cluster` subcommands
pub async fn run_kafka_cluster_command(
    session: &Session,
    action: &KafkaClusterAction,
) -> Result<()> {
    match action {
        KafkaClusterAction::List(args) => {
            let environment = session.environment(args.environment.environment.as_deref())?;
            let client = session.client()?;
            let spinner = create_spinner("Fetching Kafka clusters...", session.batch);
            let clusters = client.list_kafka_clusters(&environment).await;
            finish_spinner(spinner);
            output_list(&clusters?, args.output.output)
        }
        KafkaClusterAction::Describe(args) => {
            let cluster =
                describe(session, args.environment.environment.as_deref(), &args.id).await?;
            output_describe(&cluster, args.output.output)
        }
        KafkaClusterAction::Use(args) => {
            let cluster = describe(session, None, &args.id).await?;
            session.update_context(|ctx| ctx.kafka_cluster = Some(cluster.id.clone()))?;
            println!("Set Kafka cluster \"{}\" as the active cluster.", cluster.id);
            Ok(())
        }
        KafkaClusterAction::Unset => {
            session.update_context(|ctx| ctx.kafka_cluster = None)?;
            println!("Unset current Kafka cluster.");
            Ok(())
        }
    }
}

async fn describe(session: &Session, environment: Option<&str>, id: &str) -> Result<KafkaCluster> {
    validate_prefixes(KIND, &[id.to_string()])?;
    let environment = session.environment(environment)?;
    let client = session.client()?;
    client
        .get_kafka_cluster(&environment, id)
        .await?
        .ok_or_else(|| not_found(KIND, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command, KafkaCommand};
    use crate::context::{Context, ContextConfig, ContextStore};
    use clap::Parser;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_without_environment_is_usage_error() {
        let dir = TempDir::new().unwrap();
        let cli = Cli::parse_from([
            "confluent", "--url", "http://127.0.0.1:9", "--api-key", "k", "--api-secret", "s",
            "kafka", "cluster", "list",
        ]);
        let session =
            Session::with_store(&cli, ContextStore::with_path(dir.path().join("c.json"))).unwrap();
        let Command::Kafka {
            command: KafkaCommand::Cluster { action },
        } = cli.command
        else {
            unreachable!()
        };

        let err = run_kafka_cluster_command(&session, &action)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "no environment selected");
        assert!(err.suggestion().unwrap().contains("confluent environment use"));
    }

    #[tokio::test]
    async fn test_use_stores_cluster_in_context() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .and(path("/cmk/v2/clusters/lkc-9"))
            .and(query_param("environment", "env-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "lkc-9", "spec": {"display_name": "orders"}
            })))
            .mount(&server)
            .await;

        let store = ContextStore::with_path(dir.path().join("c.json"));
        let mut config = ContextConfig {
            current_context: Some("dev".to_string()),
            ..Default::default()
        };
        config.contexts.insert(
            "dev".to_string(),
            Context {
                url: Some(server.uri()),
                api_key: Some("k".to_string()),
                api_secret: Some("s".to_string()),
                environment: Some("env-1".to_string()),
                ..Default::default()
            },
        );
        store.save(&config).unwrap();

        let cli = Cli::parse_from(["confluent", "kafka", "cluster", "use", "lkc-9"]);
        let session =
            Session::with_store(&cli, ContextStore::with_path(dir.path().join("c.json"))).unwrap();
        let Command::Kafka {
            command: KafkaCommand::Cluster { action },
        } = cli.command
        else {
            unreachable!()
        };

        run_kafka_cluster_command(&session, &action).await.unwrap();
        let saved = store.load().unwrap();
        assert_eq!(saved.contexts["dev"].kafka_cluster.as_deref(), Some("lkc-9"));
    }
}
