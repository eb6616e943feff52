//! Confluent Platform command handlers: roles, role bindings and ACLs

use log::debug;

use crate::acl::AclBinding;
use crate::cli::{AclAction, AclArgs, RoleAction, RoleBindingAction, RoleBindingListArgs};
use crate::deletion::confirm_deletion_yes_no;
use crate::error::{CliError, Result};
use crate::output::{output_describe, output_list};
use crate::rbac::{validate_principal, MdsScope, PatternType, PlatformRoleBinding, RoleBindingOptions};
use crate::session::Session;
use crate::ui::{create_spinner, finish_spinner};

/// `confluent iam rbac role` against MDS
pub async fn run_platform_role_command(session: &Session, action: &RoleAction) -> Result<()> {
    let client = session.client()?;
    match action {
        RoleAction::List(args) => {
            let spinner = create_spinner("Fetching roles...", session.batch);
            let roles = client.list_platform_roles().await;
            finish_spinner(spinner);
            output_list(&roles?, args.output)
        }
        RoleAction::Describe(args) => {
            let role = client.get_platform_role(&args.name).await?.ok_or_else(|| {
                CliError::usage_with_suggestion(
                    format!("unknown role \"{}\"", args.name),
                    "List available roles with `confluent iam rbac role list`.",
                )
            })?;
            output_describe(&role, args.output.output)
        }
    }
}

/// `confluent iam rbac role-binding` against MDS
pub async fn run_platform_role_binding_command(
    session: &Session,
    action: &RoleBindingAction,
) -> Result<()> {
    match action {
        RoleBindingAction::Create(args) => {
            let options = RoleBindingOptions::new(
                &args.role,
                &args.principal,
                args.scope.resource.as_deref(),
                args.scope.prefix,
                &args.scope.mds_scope_flags(),
            )?;
            let client = session.client()?;
            client.add_platform_role_binding(&options).await?;
            output_list(&binding_rows(&options), args.output.output)
        }
        RoleBindingAction::List(args) => run_list(session, args).await,
        RoleBindingAction::Delete(args) => {
            let options = RoleBindingOptions::new(
                &args.role,
                &args.principal,
                args.scope.resource.as_deref(),
                args.scope.prefix,
                &args.scope.mds_scope_flags(),
            )?;
            let message = format!(
                "Are you sure you want to delete the role binding of \"{}\" for principal \"{}\"?",
                options.role, options.principal
            );
            if !confirm_deletion_yes_no(&session.prompt(), args.force, &message)? {
                return Ok(());
            }
            let client = session.client()?;
            client.remove_platform_role_binding(&options).await?;
            println!(
                "Deleted role binding \"{}\" for principal \"{}\".",
                options.role, options.principal
            );
            Ok(())
        }
    }
}

/// Rows describing a single binding just created
fn binding_rows(options: &RoleBindingOptions) -> Vec<PlatformRoleBinding> {
    let (resource_type, name, pattern_type) = match &options.resource {
        Some(p) => (
            p.resource_type.clone(),
            p.name.clone(),
            pattern_text(p.pattern_type),
        ),
        None => ("Cluster".to_string(), String::new(), String::new()),
    };
    vec![PlatformRoleBinding {
        principal: options.principal.clone(),
        role: options.role.clone(),
        resource_type,
        name,
        pattern_type,
    }]
}

fn pattern_text(pattern_type: PatternType) -> String {
    match pattern_type {
        PatternType::Literal => "LITERAL".to_string(),
        PatternType::Prefixed => "PREFIXED".to_string(),
    }
}

async fn run_list(session: &Session, args: &RoleBindingListArgs) -> Result<()> {
    let scope = MdsScope::from_flags(&args.scope.mds_scope_flags())?;
    let client = session.client()?;

    let rows = match (&args.principal, &args.role) {
        (Some(principal), role) => {
            validate_principal(principal)?;
            let roles = match role {
                Some(r) => vec![r.clone()],
                None => client.lookup_principal_roles(principal, &scope).await?,
            };
            let mut rows = Vec::new();
            for role in roles {
                let patterns = client
                    .lookup_role_resources(principal, &role, &scope)
                    .await?;
                debug!("{} holds {} on {} resources", principal, role, patterns.len());
                if patterns.is_empty() {
                    rows.push(PlatformRoleBinding {
                        principal: principal.clone(),
                        role: role.clone(),
                        resource_type: "Cluster".to_string(),
                        name: String::new(),
                        pattern_type: String::new(),
                    });
                }
                for p in patterns {
                    rows.push(PlatformRoleBinding {
                        principal: principal.clone(),
                        role: role.clone(),
                        resource_type: p.resource_type,
                        name: p.name,
                        pattern_type: pattern_text(p.pattern_type),
                    });
                }
            }
            rows
        }
        (None, Some(role)) => client
            .lookup_role_principals(role, &scope)
            .await?
            .into_iter()
            .map(|principal| PlatformRoleBinding {
                principal,
                role: role.clone(),
                resource_type: String::new(),
                name: String::new(),
                pattern_type: String::new(),
            })
            .collect(),
        (None, None) => {
            return Err(CliError::usage_with_suggestion(
                "must specify either `--principal` or `--role`",
                "Pass `--principal <Type>:<id>` to list one principal's bindings, or `--role` to list who holds a role.",
            ))
        }
    };

    output_list(&rows, args.output.output)
}

/// Dispatch `confluent kafka acl` subcommands (Platform only)
pub async fn run_acl_command(session: &Session, action: &AclAction) -> Result<()> {
    if !session.is_platform() {
        return Err(CliError::usage_with_suggestion(
            "`kafka acl` requires a Confluent Platform context",
            "Create one with `confluent context set <name> --kind platform --url <mds-url>`.",
        ));
    }

    match action {
        AclAction::Create(args) => {
            let (scope, bindings) = (acl_scope(args)?, args.acl_flags().bindings()?);
            let client = session.client()?;
            for binding in &bindings {
                client.create_acl(&scope, binding).await?;
            }
            output_list(&bindings, Default::default())
        }
        AclAction::List(args) => {
            let scope = acl_scope(&args.acl)?;
            let filters = args.acl.acl_flags().filters()?;
            let client = session.client()?;
            let mut found: Vec<AclBinding> = Vec::new();
            for filter in &filters {
                found.extend(client.search_acls(&scope, filter).await?);
            }
            output_list(&found, args.output.output)
        }
        AclAction::Delete(args) => {
            let scope = acl_scope(&args.acl)?;
            let filters = args.acl.acl_flags().filters()?;
            let client = session.client()?;

            let mut matching = 0;
            for filter in &filters {
                matching += client.search_acls(&scope, filter).await?.len();
            }
            if matching == 0 {
                return Err(CliError::usage_with_suggestion(
                    "no ACLs match the given flags",
                    "List the existing ACLs with `confluent kafka acl list`.",
                ));
            }

            let noun = if matching == 1 { "ACL" } else { "ACLs" };
            let message = format!("Are you sure you want to delete {} {}?", matching, noun);
            if !confirm_deletion_yes_no(&session.prompt(), args.force, &message)? {
                return Ok(());
            }

            let mut deleted: Vec<AclBinding> = Vec::new();
            for filter in &filters {
                deleted.extend(client.delete_acls(&scope, filter).await?);
            }
            let noun = if deleted.len() == 1 { "ACL" } else { "ACLs" };
            println!("Deleted {} {}.", deleted.len(), noun);
            Ok(())
        }
    }
}

fn acl_scope(args: &AclArgs) -> Result<MdsScope> {
    MdsScope::from_flags(&args.scope.mds_scope_flags())
}
