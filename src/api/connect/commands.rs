//! Connector, offset and log command handlers

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use log::{debug, warn};

use crate::api::helpers::{confirm_and_delete, not_found};
use crate::api::ConfluentClient;
use crate::cli::{
    ConnectCommand, ConnectScopeArgs, ConnectorAction, ConnectorDeleteArgs, LogsArgs,
    OffsetAction, OffsetAlterArgs,
};
use crate::config::{defaults, poll};
use crate::context::{LogsCursor, LogsQuery};
use crate::deletion::{validate_prefixes, DeletionRequest};
use crate::error::{CliError, Result};
use crate::output::{output_describe, output_list};
use crate::resource::ResourceKind;
use crate::retry;
use crate::session::Session;
use crate::ui::{create_spinner, finish_spinner};

use super::api::ConnectScope;
use super::models::{
    ExpandedConnector, LogSearch, LogSearchRequest, OffsetRequestStatus, OffsetsFile,
    PHASE_FAILED,
};

const KIND: ResourceKind = ResourceKind::Connector;

/// Dispatch `confluent connect` subcommands
pub async fn run_connect_command(session: &Session, command: &ConnectCommand) -> Result<()> {
    match command {
        ConnectCommand::Cluster { action } => match action {
            ConnectorAction::List(args) => {
                let scope = connect_scope(session, &args.scope)?;
                let client = session.client()?;
                let spinner = create_spinner("Fetching connectors...", session.batch);
                let connectors = client.list_connectors(&scope).await;
                finish_spinner(spinner);
                output_list(&connectors?, args.output.output)
            }
            ConnectorAction::Describe(args) => {
                let scope = connect_scope(session, &args.scope)?;
                let client = session.client()?;
                let connector = find_connector(&client, &scope, &args.id).await?;
                output_describe(&connector, args.output.output)
            }
            ConnectorAction::Delete(args) => run_delete(session, args).await,
        },
        ConnectCommand::Offset { action } => match action {
            OffsetAction::Describe(args) => {
                let scope = connect_scope(session, &args.scope)?;
                let client = session.client()?;
                let connector = find_connector(&client, &scope, &args.id).await?;
                let offsets = client
                    .get_connector_offsets(&scope, &connector.info.name)
                    .await?;
                output_describe(&offsets, args.output.output)
            }
            OffsetAction::Alter(args) => run_alter(session, args).await,
            OffsetAction::Status(args) => {
                let scope = connect_scope(session, &args.scope)?;
                let client = session.client()?;
                let connector = find_connector(&client, &scope, &args.id).await?;
                let status = client
                    .get_offset_request_status(&scope, &connector.info.name)
                    .await?;
                output_describe(&status, args.output.output)
            }
        },
        ConnectCommand::Logs(args) => run_logs(session, args).await,
    }
}

fn connect_scope(session: &Session, args: &ConnectScopeArgs) -> Result<ConnectScope> {
    Ok(ConnectScope {
        environment: session.environment(args.environment.as_deref())?,
        cluster: session.kafka_cluster(args.cluster.as_deref())?,
    })
}

/// Connectors are addressed by `lcc-` ID but the API keys them by name
async fn find_connector(
    client: &ConfluentClient,
    scope: &ConnectScope,
    id: &str,
) -> Result<ExpandedConnector> {
    validate_prefixes(KIND, &[id.to_string()])?;
    client
        .list_connectors(scope)
        .await?
        .into_iter()
        .find(|c| c.id.id == id)
        .ok_or_else(|| not_found(KIND, id))
}

async fn run_delete(session: &Session, args: &ConnectorDeleteArgs) -> Result<()> {
    let request = DeletionRequest::new(KIND, &args.delete.ids, args.delete.force);
    request.validate_prefixes()?;

    let scope = connect_scope(session, &args.scope)?;
    let client = session.client()?;
    let existing = client.list_connectors(&scope).await?;

    let client = &client;
    let scope = &scope;
    let existing_ref = &existing;
    confirm_and_delete(session, &request, &existing, move |id| async move {
        let name = existing_ref
            .iter()
            .find(|c| c.id.id == id)
            .map(|c| c.info.name.clone())
            .ok_or_else(|| not_found(KIND, &id))?;
        client.delete_connector(scope, &name).await
    })
    .await
}

async fn run_alter(session: &Session, args: &OffsetAlterArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.config_file).map_err(|e| {
        CliError::usage(format!(
            "failed to read offsets file \"{}\": {}",
            args.config_file.display(),
            e
        ))
    })?;
    // YAML is a superset of JSON, so both file formats parse here
    let file: OffsetsFile = serde_yml::from_str(&contents)?;

    let scope = connect_scope(session, &args.scope)?;
    let client = session.client()?;
    let connector = find_connector(&client, &scope, &args.id).await?;
    let name = connector.info.name.as_str();

    let submitted = client
        .alter_connector_offsets(&scope, name, &file.offsets)
        .await?;
    debug!("Offset request for {} is {}", name, submitted.status.phase);

    let spinner = create_spinner("Waiting for the offsets to be applied...", session.batch);
    let (client, scope) = (&client, &scope);
    let settled = retry::poll(
        &format!("offsets of connector \"{}\"", name),
        poll::TICK,
        poll::TIMEOUT,
        || async move {
            let status = client.get_offset_request_status(scope, name).await?;
            Ok((!status.is_pending()).then_some(status))
        },
    )
    .await;
    finish_spinner(spinner);

    let status = check_phase(settled?)?;
    output_describe(&status, args.output.output)
}

fn check_phase(status: OffsetRequestStatus) -> Result<OffsetRequestStatus> {
    if status.status.phase == PHASE_FAILED {
        let message = status
            .status
            .message
            .unwrap_or_else(|| "the request failed".to_string());
        return Err(CliError::Api {
            status: 400,
            message: format!("Failed to alter offsets of \"{}\": {}", status.name, message),
        });
    }
    Ok(status)
}

fn format_time(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn validate_time(flag: &str, value: &str) -> Result<()> {
    DateTime::parse_from_rfc3339(value).map(|_| ()).map_err(|_| {
        CliError::format(
            format!("invalid `{}` \"{}\"", flag, value),
            "Use an RFC 3339 timestamp such as \"2024-01-01T00:00:00Z\".",
        )
    })
}

/// Query for a fresh first page: explicit times, else the last hour
fn fresh_query(args: &LogsArgs, now: DateTime<Utc>) -> LogsQuery {
    let end = args.end_time.clone().unwrap_or_else(|| format_time(now));
    let start = args
        .start_time
        .clone()
        .unwrap_or_else(|| format_time(now - Duration::hours(defaults::LOGS_WINDOW_HOURS)));
    LogsQuery {
        connector: args.id.clone(),
        levels: args.level.clone(),
        search_text: args.search_text.clone(),
        start_time: start,
        end_time: end,
    }
}

/// Decide which query and page token a `connect logs` call uses.
///
/// `--next` continues the stored cursor only when the query is the same
/// one that produced it; missing times are taken from the stored window.
fn plan_logs_query(
    args: &LogsArgs,
    stored: Option<&LogsCursor>,
    now: DateTime<Utc>,
) -> (LogsQuery, Option<String>) {
    if !args.next {
        return (fresh_query(args, now), None);
    }
    let Some(cursor) = stored else {
        warn!("No previous page of logs is stored; showing the first page");
        return (fresh_query(args, now), None);
    };

    let query = LogsQuery {
        connector: args.id.clone(),
        levels: args.level.clone(),
        search_text: args.search_text.clone(),
        start_time: args
            .start_time
            .clone()
            .unwrap_or_else(|| cursor.query.start_time.clone()),
        end_time: args
            .end_time
            .clone()
            .unwrap_or_else(|| cursor.query.end_time.clone()),
    };
    if query == cursor.query {
        (query, Some(cursor.next_page_token.clone()))
    } else {
        warn!("The query differs from the previous one; showing the first page");
        (fresh_query(args, now), None)
    }
}

async fn run_logs(session: &Session, args: &LogsArgs) -> Result<()> {
    validate_prefixes(KIND, std::slice::from_ref(&args.id))?;
    for (flag, value) in [("--start-time", &args.start_time), ("--end-time", &args.end_time)] {
        if let Some(v) = value {
            validate_time(flag, v)?;
        }
    }

    let (query, page_token) = plan_logs_query(args, session.context.connect_logs.as_ref(), Utc::now());

    let scope = connect_scope(session, &args.scope)?;
    let client = session.client()?;
    let connector = find_connector(&client, &scope, &args.id).await?;
    let organization = session.organization(&client).await?;

    let crn = format!(
        "crn://confluent.cloud/organization={}/environment={}/cloud-cluster={}/connector={}",
        organization, scope.environment, scope.cluster, connector.info.name
    );
    let request = LogSearchRequest {
        crn,
        search: LogSearch {
            level: &query.levels,
            search_text: query.search_text.as_deref(),
        },
        sort: "desc",
        start_time: &query.start_time,
        end_time: &query.end_time,
    };

    let spinner = create_spinner("Searching logs...", session.batch);
    let page = client.search_logs(&request, page_token.as_deref()).await;
    finish_spinner(spinner);
    let (entries, next) = page?;

    if entries.is_empty() && page_token.is_some() {
        println!("No more logs for connector \"{}\".", args.id);
    } else {
        output_list(&entries, args.output.output)?;
    }

    let cursor = next.map(|next_page_token| LogsCursor {
        query,
        next_page_token,
    });
    if session.context_name.is_some() {
        session.update_context(|ctx| ctx.connect_logs = cursor)?;
    } else {
        debug!("No active context; the logs cursor is not stored");
    }
    Ok(())
}
