//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AnselError, AnselResult};

use super::types::Config;

/// Config file name looked up in the working directory
pub const CONFIG_FILE: &str = "ansel.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AnselResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AnselError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `ansel.toml` from the project root if present, else defaults.
///
/// Environment overrides are applied either way. A present but
/// unparseable file is a fatal configuration error, not a fallback.
pub fn load_or_default(project_root: &Path) -> AnselResult<(Config, Vec<ConfigWarning>)> {
    let config_path = project_root.join(CONFIG_FILE);

    let (config, warnings) = if config_path.exists() {
        load_with_warnings(&config_path)?
    } else {
        (Config::default(), Vec::new())
    };

    Ok((config.with_env_overrides(), warnings))
}

impl Config {
    /// Apply environment variable overrides.
    ///
    /// `SCP_TARGET` is the remote target descriptor and wins over the
    /// config file.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(target) = std::env::var("SCP_TARGET") {
            if !target.is_empty() {
                self.remote.target = Some(target);
            }
        }
        self
    }
}

/// Find the 1-based line a key first appears on, for warning messages
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(key))
        .map(|i| i + 1)
}
