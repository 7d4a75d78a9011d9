//! Configuration loading for fluent checks.
//!
//! An optional TOML file tunes how failure messages are rendered:
//!
//! ```toml
//! [messages]
//! max_value_chars = 120
//! ```
//!
//! The raw file shape stays private here; callers only ever see the resolved
//! [`FluentSettings`] from `fluent-types`.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use fluent_types::{FluentSettings, MessageStyle, ValueWidth, ValueWidthError};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV_VAR: &str = "FLUENT_CONFIG";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    messages: Option<RawMessages>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMessages {
    max_value_chars: Option<usize>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid [messages] section: {0}")]
    Messages(#[from] ValueWidthError),
}

/// Parse TOML content into resolved settings.
pub fn parse(content: &str) -> Result<FluentSettings, ConfigError> {
    let raw: RawConfig = toml::from_str(content)?;
    resolve(raw)
}

pub fn load_from(path: &Path) -> Result<FluentSettings, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content)
}

/// `$FLUENT_CONFIG` when set and non-empty, else `<config dir>/fluent/config.toml`.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    config_path_from(env::var_os(CONFIG_ENV_VAR), dirs::config_dir())
}

fn config_path_from(overridden: Option<OsString>, config_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = overridden.filter(|value| !value.is_empty()) {
        return Some(PathBuf::from(path));
    }
    config_dir.map(|dir| dir.join("fluent").join("config.toml"))
}

/// Load settings from [`config_path`].
///
/// A missing file yields the defaults. An unreadable or invalid file is
/// logged and also yields the defaults: a bad config must not fail a test run.
#[must_use]
pub fn load() -> FluentSettings {
    load_at(config_path().as_deref())
}

/// [`load`] for an explicit location. `None` means no location is known.
#[must_use]
pub fn load_at(path: Option<&Path>) -> FluentSettings {
    let Some(path) = path else {
        return FluentSettings::default();
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No fluent config, using defaults");
        return FluentSettings::default();
    }

    match load_from(path) {
        Ok(settings) => {
            tracing::debug!(path = %path.display(), "Loaded fluent config");
            settings
        }
        Err(err) => {
            tracing::warn!("Ignoring fluent config at {}: {err}", path.display());
            FluentSettings::default()
        }
    }
}

fn resolve(raw: RawConfig) -> Result<FluentSettings, ConfigError> {
    let value_width = match raw.messages.and_then(|messages| messages.max_value_chars) {
        Some(max_chars) => ValueWidth::truncate(max_chars)?,
        None => ValueWidth::Unbounded,
    };
    Ok(FluentSettings::new(MessageStyle::new(value_width)))
}
