//! User configuration for `toolhub-markdown`.
//!
//! A single optional TOML file, by default
//! `~/.config/toolhub-markdown/config.toml`:
//!
//! ```toml
//! default_format = "html"
//!
//! [language_labels]
//! hcl = "Terraform"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR: &str = "~/.config/toolhub-markdown";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Config file {} does not exist", .path.display())]
    Missing { path: PathBuf },

    #[error("Failed to write config file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output format used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_format: Option<String>,

    /// Extra or replacement code block labels, keyed by fence tag.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub language_labels: BTreeMap<String, String>,
}

impl Config {
    /// Reads `path`. A file that does not exist is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, ConfigError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no config file at {}", path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(Some(config))
    }

    /// Reads the config at the default location, if there is one.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    /// Loads from a user-supplied path when given (which must exist, after
    /// `~` and `$VAR` expansion), otherwise from the default location.
    pub fn resolve(explicit: Option<&Path>) -> Result<Option<Self>, ConfigError> {
        let Some(path) = explicit else {
            return Self::load();
        };
        let path = expand(path);
        match Self::load_from_path(&path)? {
            Some(config) => Ok(Some(config)),
            None => Err(ConfigError::Missing { path }),
        }
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        let write = || {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)
        };
        write().map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn config_path() -> PathBuf {
        expand(Path::new(CONFIG_DIR)).join(CONFIG_FILE)
    }

    /// `(fence tag, label)` pairs from the `[language_labels]` table.
    pub fn label_overrides(&self) -> impl Iterator<Item = (&str, &str)> {
        self.language_labels
            .iter()
            .map(|(tag, label)| (tag.as_str(), label.as_str()))
    }
}

/// Expands `~` and environment variables; paths that fail to expand are
/// used as given.
fn expand(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => path.to_path_buf(),
    }
}
