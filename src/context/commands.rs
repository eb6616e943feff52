//! `confluent context` handlers

use serde::Serialize;

use crate::cli::{ContextAction, SetContextArgs};
use crate::config::api;
use crate::error::{CliError, Result};
use crate::output::{quoted_list, render_describe, render_list, Tabular};

use super::models::{Context, ContextConfig, ContextKind};
use super::store::ContextStore;

const UNSET: &str = "<not set>";

/// Connection settings passed through the global flags
#[derive(Debug, Clone, Default)]
pub struct ConnectionFlags {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
}

pub fn run_context_command(
    store: &ContextStore,
    action: &ContextAction,
    connection: &ConnectionFlags,
) -> Result<()> {
    match action {
        ContextAction::List => {
            let config = store.load()?;
            if config.contexts.is_empty() {
                println!("No contexts configured. Create one with `confluent context set <name>`.");
            } else {
                println!("{}", render_list(&views(&config)));
            }
            Ok(())
        }
        ContextAction::Current => {
            let config = store.load()?;
            let view = views(&config)
                .into_iter()
                .find(|v| v.current)
                .ok_or_else(|| {
                    CliError::usage_with_suggestion(
                        "no current context",
                        "Select one with `confluent context use <name>`.",
                    )
                })?;
            println!("{}", render_describe(&view));
            Ok(())
        }
        ContextAction::Set(args) => {
            let mut config = store.load()?;
            let created = set_context(&mut config, args, connection)?;
            store.save(&config)?;
            let verb = if created { "Created" } else { "Updated" };
            println!("{} context \"{}\".", verb, args.name);
            Ok(())
        }
        ContextAction::Use(args) => {
            let mut config = store.load()?;
            ensure_exists(&config, &args.name)?;
            config.current_context = Some(args.name.clone());
            store.save(&config)?;
            println!("Using context \"{}\".", args.name);
            Ok(())
        }
        ContextAction::Delete(args) => {
            let mut config = store.load()?;
            ensure_exists(&config, &args.name)?;
            config.contexts.remove(&args.name);
            if config.current_context.as_deref() == Some(args.name.as_str()) {
                config.current_context = None;
            }
            store.save(&config)?;
            println!("Deleted context \"{}\".", args.name);
            Ok(())
        }
    }
}

/// Create `args.name` or merge the given fields into it. Returns true on create.
fn set_context(
    config: &mut ContextConfig,
    args: &SetContextArgs,
    connection: &ConnectionFlags,
) -> Result<bool> {
    if let Some(ctx) = config.contexts.get_mut(&args.name) {
        // kind is fixed once the context exists
        merge(&mut ctx.url, &connection.url);
        merge(&mut ctx.api_key, &connection.api_key);
        merge(&mut ctx.api_secret, &connection.api_secret);
        merge(&mut ctx.organization, &args.organization);
        return Ok(false);
    }

    let kind = args.kind.unwrap_or_default();
    if kind == ContextKind::Platform && connection.url.is_none() {
        return Err(CliError::usage_with_suggestion(
            "a platform context needs `--url`",
            format!(
                "confluent context set {} --kind platform --url <MDS URL>",
                args.name
            ),
        ));
    }

    config.contexts.insert(
        args.name.clone(),
        Context {
            kind,
            url: connection.url.clone(),
            api_key: connection.api_key.clone(),
            api_secret: connection.api_secret.clone(),
            organization: args.organization.clone(),
            ..Default::default()
        },
    );
    if config.current_context.is_none() {
        config.current_context = Some(args.name.clone());
    }
    Ok(true)
}

fn merge(slot: &mut Option<String>, value: &Option<String>) {
    if value.is_some() {
        slot.clone_from(value);
    }
}

fn ensure_exists(config: &ContextConfig, name: &str) -> Result<()> {
    if config.contexts.contains_key(name) {
        return Ok(());
    }
    let known: Vec<&String> = config.contexts.keys().collect();
    let suggestion = if known.is_empty() {
        "No contexts are configured.".to_string()
    } else {
        format!("Known contexts: {}.", quoted_list(&known))
    };
    Err(CliError::usage_with_suggestion(
        format!("context \"{}\" does not exist", name),
        suggestion,
    ))
}

/// Display form of a context; the secret is masked
#[derive(Serialize, Debug)]
struct ContextView {
    current: bool,
    name: String,
    kind: ContextKind,
    url: String,
    api_key: String,
    api_secret: String,
    organization: String,
    environment: String,
    kafka_cluster: String,
    service_account: String,
    identity_pool: String,
}

fn views(config: &ContextConfig) -> Vec<ContextView> {
    let text = |v: &Option<String>| v.clone().unwrap_or_else(|| UNSET.to_string());
    config
        .contexts
        .iter()
        .map(|(name, ctx)| ContextView {
            current: config.current_context.as_deref() == Some(name.as_str()),
            name: name.clone(),
            kind: ctx.kind,
            url: endpoint(ctx).to_string(),
            api_key: text(&ctx.api_key),
            api_secret: mask_secret(ctx.api_secret.as_deref()),
            organization: text(&ctx.organization),
            environment: text(&ctx.environment),
            kafka_cluster: text(&ctx.kafka_cluster),
            service_account: text(&ctx.service_account),
            identity_pool: text(&ctx.identity_pool),
        })
        .collect()
}

impl Tabular for ContextView {
    fn headers() -> &'static [&'static str] {
        &[
            "Current",
            "Name",
            "Kind",
            "URL",
            "API Key",
            "API Secret",
            "Organization",
            "Environment",
            "Kafka Cluster",
            "Service Account",
            "Identity Pool",
        ]
    }

    fn row(&self) -> Vec<String> {
        vec![
            if self.current { "*" } else { "" }.to_string(),
            self.name.clone(),
            self.kind.to_string(),
            self.url.clone(),
            self.api_key.clone(),
            self.api_secret.clone(),
            self.organization.clone(),
            self.environment.clone(),
            self.kafka_cluster.clone(),
            self.service_account.clone(),
            self.identity_pool.clone(),
        ]
    }
}

fn endpoint(ctx: &Context) -> &str {
    match (ctx.url.as_deref(), ctx.kind) {
        (Some(url), _) => url,
        (None, ContextKind::Cloud) => api::CLOUD_URL,
        (None, ContextKind::Platform) => UNSET,
    }
}

/// Keep only the last four characters visible
fn mask_secret(secret: Option<&str>) -> String {
    let Some(secret) = secret else {
        return UNSET.to_string();
    };
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() < 4 {
        return "****".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{}", tail)
}
