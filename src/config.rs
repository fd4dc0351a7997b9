//! Configuration file support for pkgdash.
//!
//! Provides YAML-based configuration through `pkgdash.config.yml` files,
//! including data structures, file loading, validation, and the resolved
//! runtime settings.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "pkgdash.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub pip_command: Option<String>,
    pub python_command: Option<String>,
    pub index_url: Option<String>,
    pub resolve_timeout_secs: Option<u64>,
    pub max_concurrent_lookups: Option<usize>,
    pub offline: Option<bool>,
    pub state_file: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yml::Value>,
}

/// Resolved runtime settings: the config file with defaults applied.
#[derive(Debug, Clone)]
pub struct Settings {
    pub pip_command: String,
    pub python_command: String,
    pub index_url: Option<String>,
    pub resolve_timeout: Duration,
    pub max_concurrent_lookups: usize,
    pub offline: bool,
    pub state_file: PathBuf,
    pub cache_dir: PathBuf,
}

impl Settings {
    pub const DEFAULT_RESOLVE_TIMEOUT_SECS: u64 = 10;
    pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 8;

    pub fn from_config(config: ConfigFile) -> Self {
        Settings {
            pip_command: config.pip_command.unwrap_or_else(|| "pip".to_string()),
            python_command: config
                .python_command
                .unwrap_or_else(|| "python3".to_string()),
            index_url: config.index_url,
            resolve_timeout: Duration::from_secs(
                config
                    .resolve_timeout_secs
                    .unwrap_or(Self::DEFAULT_RESOLVE_TIMEOUT_SECS),
            ),
            max_concurrent_lookups: config
                .max_concurrent_lookups
                .unwrap_or(Self::DEFAULT_MAX_CONCURRENT_LOOKUPS),
            offline: config.offline.unwrap_or(false),
            state_file: PathBuf::from(
                config
                    .state_file
                    .unwrap_or_else(|| "packages.json".to_string()),
            ),
            cache_dir: PathBuf::from(".pkgdash_cache"),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(ConfigFile::default())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yml::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.resolve_timeout_secs == Some(0) {
        bail!(
            "Invalid config: resolve_timeout_secs must be greater than 0.\n\n\
             💡 Hint: Omit the field to use the default of {} seconds.",
            Settings::DEFAULT_RESOLVE_TIMEOUT_SECS
        );
    }

    if config.max_concurrent_lookups == Some(0) {
        bail!(
            "Invalid config: max_concurrent_lookups must be greater than 0.\n\n\
             💡 Hint: Omit the field to use the default of {}.",
            Settings::DEFAULT_MAX_CONCURRENT_LOOKUPS
        );
    }

    if let Some(ref command) = config.pip_command {
        if command.trim().is_empty() {
            bail!("Invalid config: pip_command must not be empty.");
        }
    }

    if let Some(ref command) = config.python_command {
        if command.trim().is_empty() {
            bail!("Invalid config: python_command must not be empty.");
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
