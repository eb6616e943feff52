//! Role and role-binding command handlers
//!
//! Cloud contexts bind roles through CRN patterns; Platform contexts are
//! routed to the MDS handlers.

use std::collections::HashMap;

use log::debug;

use crate::api::mds;
use crate::api::ConfluentClient;
use crate::cli::{
    RbacCommand, RoleAction, RoleBindingAction, RoleBindingCreateArgs, RoleBindingDeleteArgs,
    RoleBindingListArgs, RoleBindingScopeArgs,
};
use crate::deletion::{confirm_deletion_yes_no, DeletionRequest};
use crate::error::{CliError, Result};
use crate::output::{output_describe, output_list};
use crate::rbac::{
    build_crn_pattern, validate_principal, CreateRoleBindingRequest, RoleBinding, RoleCatalog,
    ScopeFlags,
};
use crate::resource::ResourceKind;
use crate::session::Session;
use crate::ui::{create_spinner, finish_spinner};

use super::models::{RoleBindingFilter, RoleBindingRow};

/// Dispatch `confluent iam rbac` subcommands
pub async fn run_rbac_command(session: &Session, command: &RbacCommand) -> Result<()> {
    match command {
        RbacCommand::Role { action } => run_role_command(session, action).await,
        RbacCommand::RoleBinding { action } if session.is_platform() => {
            mds::run_platform_role_binding_command(session, action).await
        }
        RbacCommand::RoleBinding { action } => match action {
            RoleBindingAction::Create(args) => run_create(session, args).await,
            RoleBindingAction::List(args) => run_list(session, args).await,
            RoleBindingAction::Delete(args) => run_delete(session, args).await,
        },
    }
}

async fn run_role_command(session: &Session, action: &RoleAction) -> Result<()> {
    if session.is_platform() {
        return mds::run_platform_role_command(session, action).await;
    }

    let client = session.client()?;
    let spinner = create_spinner("Fetching roles...", session.batch);
    let catalog = client.fetch_role_catalog().await;
    finish_spinner(spinner);
    let catalog = catalog?;

    match action {
        RoleAction::List(args) => output_list(catalog.roles(), args.output),
        RoleAction::Describe(args) => {
            let role = catalog.find(&args.name).ok_or_else(|| {
                CliError::usage_with_suggestion(
                    format!("unknown role \"{}\"", args.name),
                    format!("The available roles are: {}.", catalog.role_names().join(", ")),
                )
            })?;
            output_describe(role, args.output.output)
        }
    }
}

/// Build the CRN pattern, fetching the role catalog only when the flags
/// need it
async fn crn_pattern(
    session: &Session,
    client: &ConfluentClient,
    flags: &ScopeFlags,
) -> Result<String> {
    let organization = session.organization(client).await?;
    let catalog = if flags.needs_catalog() {
        client.fetch_role_catalog().await?
    } else {
        RoleCatalog::default()
    };
    let crn = build_crn_pattern(
        flags,
        &organization,
        session.context.environment.as_deref(),
        &catalog,
    )?;
    debug!("Role binding scope: {}", crn);
    Ok(crn)
}

async fn run_create(session: &Session, args: &RoleBindingCreateArgs) -> Result<()> {
    validate_principal(&args.principal)?;
    let flags = args.scope.scope_flags(Some(&args.role));

    let client = session.client()?;
    let crn = crn_pattern(session, &client, &flags).await?;
    let binding = client
        .create_role_binding(&CreateRoleBindingRequest {
            principal: &args.principal,
            role_name: &args.role,
            crn_pattern: &crn,
        })
        .await?;
    output_describe(&binding, args.output.output)
}

async fn run_list(session: &Session, args: &RoleBindingListArgs) -> Result<()> {
    if let Some(principal) = &args.principal {
        validate_principal(principal)?;
    }
    let flags = args.scope.scope_flags(args.role.as_deref());

    let client = session.client()?;
    let crn = crn_pattern(session, &client, &flags).await?;
    let filter = RoleBindingFilter {
        crn_pattern: &crn,
        principal: args.principal.as_deref(),
        role_name: args.role.as_deref(),
    };

    let spinner = create_spinner("Fetching role bindings...", session.batch);
    let bindings = client.list_role_bindings(&filter).await;
    finish_spinner(spinner);
    let bindings = bindings?;

    let rows = resolve_principals(&client, &bindings).await?;
    output_list(&rows, args.output.output)
}

/// Attach the name and email of user and service-account principals
async fn resolve_principals(
    client: &ConfluentClient,
    bindings: &[RoleBinding],
) -> Result<Vec<RoleBindingRow>> {
    let kinds: Vec<Option<ResourceKind>> = bindings
        .iter()
        .map(|b| principal_id(&b.principal).and_then(ResourceKind::from_id))
        .collect();

    let mut names: HashMap<String, (String, String)> = HashMap::new();
    if kinds.contains(&Some(ResourceKind::User)) {
        for user in client.list_users().await? {
            names.insert(user.id, (user.full_name, user.email));
        }
    }
    if kinds.contains(&Some(ResourceKind::ServiceAccount)) {
        for sa in client.list_service_accounts().await? {
            names.insert(sa.id, (sa.display_name, String::new()));
        }
    }

    Ok(bindings
        .iter()
        .map(|b| {
            let (name, email) = principal_id(&b.principal)
                .and_then(|id| names.get(id))
                .map(|(n, e)| (n.as_str(), e.as_str()))
                .unwrap_or(("", ""));
            RoleBindingRow::new(b, name, email)
        })
        .collect())
}

/// `User:u-1` -> `u-1`
fn principal_id(principal: &str) -> Option<&str> {
    principal.split_once(':').map(|(_, id)| id)
}

async fn run_delete(session: &Session, args: &RoleBindingDeleteArgs) -> Result<()> {
    validate_principal(&args.principal)?;
    let flags = args.scope.scope_flags(Some(&args.role));

    let client = session.client()?;
    let crn = crn_pattern(session, &client, &flags).await?;
    let filter = RoleBindingFilter {
        crn_pattern: &crn,
        principal: Some(&args.principal),
        role_name: Some(&args.role),
    };
    let binding = client
        .list_role_bindings(&filter)
        .await?
        .into_iter()
        .find(|b| b.crn_pattern == crn)
        .ok_or_else(|| missing_binding(&args.scope))?;

    let message = format!(
        "Are you sure you want to delete the role binding of \"{}\" for principal \"{}\" on \"{}\"?",
        args.role, args.principal, crn
    );
    if !confirm_deletion_yes_no(&session.prompt(), args.force, &message)? {
        return Ok(());
    }

    let request = DeletionRequest::new(ResourceKind::RoleBinding, &[binding.id], true);
    let client = &client;
    request
        .execute(move |id| async move { client.delete_role_binding(&id).await })
        .await
        .finish()
        .map(|_| ())
}

fn missing_binding(scope: &RoleBindingScopeArgs) -> CliError {
    let hint = if scope.resource.is_some() {
        "Check the `--resource` and `--prefix` flags against `confluent iam rbac role-binding list`."
    } else {
        "List the existing bindings with `confluent iam rbac role-binding list`."
    };
    CliError::usage_with_suggestion("the role binding does not exist", hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command, IamCommand};
    use crate::context::{Context, ContextConfig, ContextStore};
    use clap::Parser;
    use tempfile::TempDir;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn cloud_session(server: &MockServer, dir: &TempDir, extra: &[&str]) -> (Session, RbacCommand) {
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
                organization: Some("o-1".to_string()),
                environment: Some("env-ctx".to_string()),
                ..Default::default()
            },
        );
        store.save(&config).unwrap();

        let mut argv = vec!["confluent", "--batch", "iam", "rbac"];
        argv.extend_from_slice(extra);
        let cli = Cli::parse_from(argv);
        let session = Session::with_store(&cli, store).unwrap();
        let Command::Iam {
            command: IamCommand::Rbac { command },
        } = cli.command
        else {
            unreachable!()
        };
        (session, command)
    }

    #[test]
    fn test_principal_id() {
        assert_eq!(principal_id("User:u-1"), Some("u-1"));
        assert_eq!(principal_id("User:sa-1"), Some("sa-1"));
        assert_eq!(principal_id("nocolon"), None);
    }

    #[tokio::test]
    async fn test_create_with_bad_principal_makes_no_request() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let (session, command) = cloud_session(
            &server,
            &dir,
            &[
                "role-binding", "create", "--role", "EnvironmentAdmin", "--principal", "u-1",
                "--environment", "env-1",
            ],
        );
        let err = run_rbac_command(&session, &command).await.unwrap_err();
        assert_eq!(err.to_string(), "incorrect principal format specified");
    }

    #[tokio::test]
    async fn test_create_uses_current_environment() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .and(path("/api/metadata/security/v2alpha1/roles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "EnvironmentAdmin", "policies": [{
                    "bindingScope": "environment",
                    "allowedActions": [{"resourceType": "Environment", "operation": "Alter"}]
                }]}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/iam/v2/role-bindings"))
            .and(wiremock::matchers::body_json(serde_json::json!({
                "principal": "User:u-1",
                "role_name": "EnvironmentAdmin",
                "crn_pattern": "crn://confluent.cloud/organization=o-1/environment=env-ctx"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": "rb-1",
                "principal": "User:u-1",
                "role_name": "EnvironmentAdmin",
                "crn_pattern": "crn://confluent.cloud/organization=o-1/environment=env-ctx"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (session, command) = cloud_session(
            &server,
            &dir,
            &[
                "role-binding", "create", "--role", "EnvironmentAdmin", "--principal", "User:u-1",
                "--current-environment",
            ],
        );
        run_rbac_command(&session, &command).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_without_role_or_resource_skips_catalog() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .and(path("/api/metadata/security/v2alpha1/roles"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/iam/v2/role-bindings"))
            .and(query_param(
                "crn_pattern",
                "crn://confluent.cloud/organization=o-1/environment=env-1",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{
                    "id": "rb-1",
                    "principal": "User:sa-1",
                    "role_name": "EnvironmentAdmin",
                    "crn_pattern": "crn://confluent.cloud/organization=o-1/environment=env-1"
                }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/iam/v2/service-accounts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"id": "sa-1", "display_name": "payments"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (session, command) =
            cloud_session(&server, &dir, &["role-binding", "list", "--environment", "env-1"]);
        run_rbac_command(&session, &command).await.unwrap();
    }

    #[tokio::test]
    async fn test_failed_catalog_fetch_fails_command() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .and(path("/api/metadata/security/v2alpha1/roles"))
            .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
                "error": {"message": "catalog unavailable"}
            })))
            .mount(&server)
            .await;

        let (session, command) = cloud_session(
            &server,
            &dir,
            &["role-binding", "list", "--role", "DeveloperRead", "--environment", "env-1"],
        );
        let err = run_rbac_command(&session, &command).await.unwrap_err();
        assert!(matches!(err, CliError::Api { status: 503, .. }));
    }

    async fn mount_catalog_and_forbid_listing(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/api/metadata/security/v2alpha1/roles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "CloudClusterAdmin", "policies": [{
                    "bindingScope": "cluster",
                    "allowedActions": [{"resourceType": "CloudCluster", "operation": "Alter"}]
                }]}
            ])))
            .expect(1)
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/iam/v2/role-bindings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
            .expect(0)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_list_cluster_role_requires_cloud_cluster() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        mount_catalog_and_forbid_listing(&server).await;

        let (session, command) = cloud_session(
            &server,
            &dir,
            &["role-binding", "list", "--role", "CloudClusterAdmin", "--environment", "env-1"],
        );
        let err = run_rbac_command(&session, &command).await.unwrap_err();
        assert_eq!(err.to_string(), crate::rbac::crn::SPECIFY_CLOUD_CLUSTER);
    }

    #[tokio::test]
    async fn test_list_unknown_role_is_rejected() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        mount_catalog_and_forbid_listing(&server).await;

        let (session, command) = cloud_session(
            &server,
            &dir,
            &["role-binding", "list", "--role", "NoSuchRole", "--environment", "env-1"],
        );
        let err = run_rbac_command(&session, &command).await.unwrap_err();
        assert_eq!(err.to_string(), "role \"NoSuchRole\" not found");
    }

    #[tokio::test]
    async fn test_delete_missing_binding() {
        let server = MockServer::start().await;
        let dir = TempDir::new().unwrap();
        Mock::given(method("GET"))
            .and(path("/api/metadata/security/v2alpha1/roles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"name": "EnvironmentAdmin", "policies": []}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/iam/v2/role-bindings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;

        let (session, command) = cloud_session(
            &server,
            &dir,
            &[
                "role-binding", "delete", "--role", "EnvironmentAdmin", "--principal", "User:u-1",
                "--environment", "env-1", "--force",
            ],
        );
        let err = run_rbac_command(&session, &command).await.unwrap_err();
        assert_eq!(err.to_string(), "the role binding does not exist");
    }
}
