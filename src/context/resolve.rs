//! Picking the active context

use log::debug;

use crate::config::context as context_config;

use super::models::{Context, ContextConfig};

/// Where the active context name came from, highest precedence first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Flag,
    EnvVar,
    ConfigFile,
}

fn pick_name(
    flag: Option<&str>,
    env_value: Option<String>,
    config: &ContextConfig,
) -> Option<(String, Origin)> {
    flag.map(|n| (n.to_string(), Origin::Flag))
        .or_else(|| {
            env_value
                .filter(|v| !v.is_empty())
                .map(|n| (n, Origin::EnvVar))
        })
        .or_else(|| {
            config
                .current_context
                .clone()
                .map(|n| (n, Origin::ConfigFile))
        })
}

/// Active context from `--context`, then `$CONFLUENT_CONTEXT`, then the
/// file's `current-context`.
///
/// An unknown name yields `None` and the command runs on flags and
/// environment variables alone.
pub fn resolve_active_context(
    flag: Option<&str>,
    config: &ContextConfig,
) -> Option<(String, Context)> {
    let env_value = std::env::var(context_config::ENV_VAR).ok();
    let (name, origin) = pick_name(flag, env_value, config)?;

    let Some(ctx) = config.contexts.get(&name) else {
        debug!("Context \"{}\" ({:?}) is not defined, ignoring", name, origin);
        return None;
    };
    debug!("Active context \"{}\" from {:?}: {}", name, origin, ctx.kind);
    Some((name, ctx.clone()))
}
