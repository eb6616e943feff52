//! Persistence for `~/.confluent/config.json`

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::context as context_config;
use crate::error::CliError;

use super::models::{Context, ContextConfig};

/// On-disk location of the CLI's contexts and credentials.
///
/// Writes go to a sibling `.tmp` file that is renamed into place, so a crash
/// mid-write leaves the previous config intact. The file holds secrets and is
/// created owner-only on unix.
#[derive(Debug, Clone)]
pub struct ContextStore {
    path: PathBuf,
}

impl Default for ContextStore {
    fn default() -> Self {
        Self::new()
    }
}

fn io_failure(what: &str, path: &Path, err: io::Error) -> CliError {
    CliError::Config(format!("cannot {} \"{}\": {}", what, path.display(), err))
}

fn home_config_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    [
        home.as_path(),
        Path::new(context_config::DIR_NAME),
        Path::new(context_config::FILE_NAME),
    ]
    .iter()
    .collect()
}

#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path) -> io::Result<()> {
    Ok(())
}

impl ContextStore {
    pub fn new() -> Self {
        Self::with_path(home_config_path())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is an empty config; an unreadable or malformed one is an error.
    pub fn load(&self) -> Result<ContextConfig, CliError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No config at {}, starting empty", self.path.display());
                return Ok(ContextConfig::default());
            }
            Err(e) => return Err(io_failure("read", &self.path, e)),
        };

        serde_json::from_str(&raw).map_err(|e| {
            CliError::Config(format!(
                "config file \"{}\" is malformed: {}",
                self.path.display(),
                e
            ))
        })
    }

    pub fn save(&self, config: &ContextConfig) -> Result<(), CliError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| io_failure("create", dir, e))?;
        }

        let body = serde_json::to_vec_pretty(config)?;
        let staging = self.path.with_extension("json.tmp");

        fs::write(&staging, body).map_err(|e| io_failure("write", &staging, e))?;
        restrict_to_owner(&staging).map_err(|e| io_failure("restrict", &staging, e))?;
        fs::rename(&staging, &self.path).map_err(|e| io_failure("replace", &self.path, e))?;

        debug!("Wrote {}", self.path.display());
        Ok(())
    }

    /// Apply `mutate` to the context called `name` and persist the result.
    pub fn update<F>(&self, name: &str, mutate: F) -> Result<(), CliError>
    where
        F: FnOnce(&mut Context),
    {
        let mut config = self.load()?;
        match config.contexts.get_mut(name) {
            Some(ctx) => mutate(ctx),
            None => {
                return Err(CliError::Config(format!(
                    "context \"{}\" is missing from \"{}\"",
                    name,
                    self.path.display()
                )))
            }
        }
        self.save(&config)
    }
}
