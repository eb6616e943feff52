//! Per-invocation state shared by every command handler
//!
//! A `Session` is built once from the global flags and the context file.
//! Handlers read from it and never mutate it; changes to the active context
//! (`use`, `unset`, the logs cursor) are written back through
//! [`Session::update_context`] after the command succeeded.

use log::debug;

use crate::api::{ConfluentClient, CredentialResolver, Credentials};
use crate::cli::Cli;
use crate::config::api;
use crate::context::{resolve_active_context, Context, ContextKind, ContextStore};
use crate::error::{CliError, Result};
use crate::ui::TerminalPrompt;

pub struct Session {
    /// Name of the active context, if one resolved
    pub context_name: Option<String>,
    /// Snapshot of the active context (default when none resolved)
    pub context: Context,
    pub batch: bool,
    url: Option<String>,
    api_key: Option<String>,
    api_secret: Option<String>,
    store: ContextStore,
}

impl Session {
    /// Build the session from CLI flags and the default context store
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Self::with_store(cli, ContextStore::new())
    }

    /// Build the session against a specific store
    pub fn with_store(cli: &Cli, store: ContextStore) -> Result<Self> {
        let config = store.load()?;
        let resolved = resolve_active_context(cli.context.as_deref(), &config);

        if resolved.is_none() {
            if let Some(name) = &cli.context {
                return Err(CliError::usage_with_suggestion(
                    format!("context \"{}\" does not exist", name),
                    format!("Create it with `confluent context set {}`.", name),
                ));
            }
        }

        let (context_name, context) = match resolved {
            Some((name, ctx)) => (Some(name), ctx),
            None => (None, Context::default()),
        };

        Ok(Self {
            context_name,
            context,
            batch: cli.batch,
            url: cli.url.clone(),
            api_key: cli.api_key.clone(),
            api_secret: cli.api_secret.clone(),
            store,
        })
    }

    pub fn kind(&self) -> ContextKind {
        self.context.kind
    }

    pub fn is_platform(&self) -> bool {
        self.kind() == ContextKind::Platform
    }

    /// Endpoint: `--url`, then the context URL, then the public Cloud API
    pub fn base_url(&self) -> Result<String> {
        if let Some(url) = self.url.as_ref().or(self.context.url.as_ref()) {
            return Ok(url.clone());
        }
        match self.kind() {
            ContextKind::Cloud => Ok(api::CLOUD_URL.to_string()),
            ContextKind::Platform => Err(CliError::usage_with_suggestion(
                "no MDS URL configured for this context",
                "Pass `--url` or store it with `confluent context set <name> --url <URL>`.",
            )),
        }
    }

    pub fn credentials(&self) -> Result<Credentials> {
        CredentialResolver::new(self.kind()).resolve(
            (self.api_key.as_deref(), self.api_secret.as_deref()),
            (
                self.context.api_key.as_deref(),
                self.context.api_secret.as_deref(),
            ),
        )
    }

    /// Authenticated client for the active backend
    pub fn client(&self) -> Result<ConfluentClient> {
        let url = self.base_url()?;
        let creds = self.credentials()?;
        debug!("Connecting to {} as {}", url, creds.key);
        Ok(ConfluentClient::new(&url, creds.key, creds.secret))
    }

    /// Confirmation prompt honouring `--batch`
    pub fn prompt(&self) -> TerminalPrompt {
        TerminalPrompt::new(self.batch)
    }

    /// Organization ID: from the context, else the first organization the
    /// credentials can see
    pub async fn organization(&self, client: &ConfluentClient) -> Result<String> {
        if let Some(org) = &self.context.organization {
            return Ok(org.clone());
        }
        let orgs = client.list_organizations().await?;
        orgs.into_iter().next().map(|o| o.id).ok_or_else(|| {
            CliError::Config("the credentials do not belong to any organization".to_string())
        })
    }

    /// Environment ID: explicit flag, else the context environment
    pub fn environment(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.context.environment.clone())
            .ok_or_else(|| {
                CliError::usage_with_suggestion(
                    "no environment selected",
                    "Pass `--environment` or run `confluent environment use <id>`.",
                )
            })
    }

    /// Kafka cluster ID: explicit flag, else the context cluster
    pub fn kafka_cluster(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.context.kafka_cluster.clone())
            .ok_or_else(|| {
                CliError::usage_with_suggestion(
                    "no Kafka cluster selected",
                    "Pass `--cluster` or run `confluent kafka cluster use <id>`.",
                )
            })
    }

    /// Persist a change to the active context
    pub fn update_context<F>(&self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut Context),
    {
        let name = self.context_name.as_deref().ok_or_else(|| {
            CliError::Config(
                "no active context to save to; create one with `confluent context set <name>`"
                    .to_string(),
            )
        })?;
        self.store.update(name, mutate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextConfig;
    use clap::Parser;
    use tempfile::TempDir;

    fn store_with(dir: &TempDir, contexts: &[(&str, Context)], current: Option<&str>) -> ContextStore {
        let store = ContextStore::with_path(dir.path().join("config.json"));
        let mut config = ContextConfig {
            current_context: current.map(str::to_string),
            ..Default::default()
        };
        for (name, ctx) in contexts {
            config.contexts.insert(name.to_string(), ctx.clone());
        }
        store.save(&config).unwrap();
        store
    }

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["confluent"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["environment", "list"]);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_unknown_explicit_context_errors() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, &[], None);
        assert!(Session::with_store(&cli(&["--context", "ghost"]), store).is_err());
    }

    #[test]
    fn test_base_url_resolution() {
        let dir = TempDir::new().unwrap();
        let ctx = Context {
            url: Some("https://ctx.example".to_string()),
            ..Default::default()
        };
        let store = store_with(&dir, &[("a", ctx)], Some("a"));
        let session = Session::with_store(&cli(&["--context", "a"]), store).unwrap();
        assert_eq!(session.base_url().unwrap(), "https://ctx.example");

        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, &[("a", Context::default())], Some("a"));
        let session =
            Session::with_store(&cli(&["--context", "a", "--url", "http://flag"]), store).unwrap();
        assert_eq!(session.base_url().unwrap(), "http://flag");
    }

    #[test]
    fn test_platform_without_url_errors() {
        let dir = TempDir::new().unwrap();
        let ctx = Context {
            kind: ContextKind::Platform,
            ..Default::default()
        };
        let store = store_with(&dir, &[("mds", ctx)], None);
        let session = Session::with_store(&cli(&["--context", "mds"]), store).unwrap();
        assert!(session.is_platform());
        assert!(session.base_url().is_err());
    }

    #[test]
    fn test_environment_flag_overrides_context() {
        let dir = TempDir::new().unwrap();
        let ctx = Context {
            environment: Some("env-ctx".to_string()),
            ..Default::default()
        };
        let store = store_with(&dir, &[("a", ctx)], None);
        let session = Session::with_store(&cli(&["--context", "a"]), store).unwrap();
        assert_eq!(session.environment(Some("env-flag")).unwrap(), "env-flag");
        assert_eq!(session.environment(None).unwrap(), "env-ctx");
        assert!(session.kafka_cluster(None).is_err());
    }

    #[test]
    fn test_update_context_persists() {
        let dir = TempDir::new().unwrap();
        let store = store_with(&dir, &[("a", Context::default())], None);
        let session = Session::with_store(&cli(&["--context", "a"]), store).unwrap();
        session
            .update_context(|ctx| ctx.kafka_cluster = Some("lkc-1".to_string()))
            .unwrap();

        let reloaded = ContextStore::with_path(dir.path().join("config.json"))
            .load()
            .unwrap();
        assert_eq!(reloaded.contexts["a"].kafka_cluster.as_deref(), Some("lkc-1"));
        // the snapshot itself is unchanged
        assert!(session.context.kafka_cluster.is_none());
    }

    #[tokio::test]
    async fn test_organization_from_context_skips_lookup() {
        let dir = TempDir::new().unwrap();
        let ctx = Context {
            organization: Some("org-1".to_string()),
            ..Default::default()
        };
        let store = store_with(&dir, &[("a", ctx)], None);
        let session = Session::with_store(&cli(&["--context", "a"]), store).unwrap();
        // unroutable URL: any request would fail
        let client = ConfluentClient::test_client("http://127.0.0.1:1");
        assert_eq!(session.organization(&client).await.unwrap(), "org-1");
    }
}
