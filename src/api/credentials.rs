//! Credential resolution from multiple sources

use log::debug;

use crate::config::credentials;
use crate::context::ContextKind;
use crate::error::{CliError, Result};

/// A username/password pair for HTTP basic auth.
///
/// Cloud uses an API key and secret, Platform a username and password.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub key: String,
    pub secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"****")
            .finish()
    }
}

/// Credential resolution with fallback logic
pub struct CredentialResolver {
    kind: ContextKind,
}

impl CredentialResolver {
    pub fn new(kind: ContextKind) -> Self {
        Self { kind }
    }

    fn env_vars(&self) -> (&'static str, &'static str) {
        match self.kind {
            ContextKind::Cloud => (credentials::CLOUD_KEY_ENV, credentials::CLOUD_SECRET_ENV),
            ContextKind::Platform => (
                credentials::PLATFORM_USERNAME_ENV,
                credentials::PLATFORM_PASSWORD_ENV,
            ),
        }
    }

    /// Resolve credentials with fallback:
    /// 1. `--api-key`/`--api-secret`
    /// 2. Environment variables for the context kind
    /// 3. Active context
    ///
    /// Key and secret are resolved independently, so a key from the
    /// context can be paired with a secret from the environment.
    pub fn resolve(
        &self,
        cli: (Option<&str>, Option<&str>),
        context: (Option<&str>, Option<&str>),
    ) -> Result<Credentials> {
        let (key_env, secret_env) = self.env_vars();
        let key = Self::pick("key", cli.0, key_env, context.0);
        let secret = Self::pick("secret", cli.1, secret_env, context.1);

        match (key, secret) {
            (Some(key), Some(secret)) => Ok(Credentials { key, secret }),
            _ => Err(CliError::usage_with_suggestion(
                "no credentials found",
                format!(
                    "Pass `--api-key` and `--api-secret`, set {} and {}, or store them with `confluent context set`.",
                    key_env, secret_env
                ),
            )),
        }
    }

    fn pick(
        label: &str,
        cli: Option<&str>,
        env_var: &str,
        context: Option<&str>,
    ) -> Option<String> {
        if let Some(value) = cli {
            debug!("Using {} from CLI argument", label);
            return Some(value.to_string());
        }
        if let Ok(value) = std::env::var(env_var) {
            if !value.is_empty() {
                debug!("Using {} from {} environment variable", label, env_var);
                return Some(value);
            }
        }
        context.map(|value| {
            debug!("Using {} from active context", label);
            value.to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_wins() {
        let resolver = CredentialResolver::new(ContextKind::Cloud);
        let creds = resolver
            .resolve((Some("cli-key"), Some("cli-secret")), (Some("ctx-key"), Some("ctx-secret")))
            .unwrap();
        assert_eq!(creds.key, "cli-key");
        assert_eq!(creds.secret, "cli-secret");
    }

    #[test]
    fn test_platform_env_var_names() {
        let resolver = CredentialResolver::new(ContextKind::Platform);
        assert_eq!(
            resolver.env_vars(),
            ("CONFLUENT_PLATFORM_USERNAME", "CONFLUENT_PLATFORM_PASSWORD")
        );
    }

    #[test]
    fn test_debug_masks_secret() {
        let creds = Credentials {
            key: "KEY".to_string(),
            secret: "hunter2".to_string(),
        };
        let text = format!("{:?}", creds);
        assert!(text.contains("KEY"));
        assert!(!text.contains("hunter2"));
    }
}
