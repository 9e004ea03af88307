use anyhow::{Context, Result};
use chatsheet_client::ClientConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "CHATSHEET_CONFIG";
pub const BASE_URL_ENV: &str = "CHATSHEET_BASE_URL";
pub const API_KEY_ENV: &str = "CHATSHEET_API_KEY";

/// Resolve the config file path based on priority:
/// 1. Explicit `--config` path (with tilde expansion)
/// 2. CHATSHEET_CONFIG environment variable (with tilde expansion)
/// 3. `<user config dir>/chatsheet/config.toml`
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(&path.to_string_lossy()));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("chatsheet").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ClientConfig,
}

impl Config {
    /// Load from the resolved path and apply environment overrides
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match resolve_config_path(explicit_path) {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// A missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.api.base_url = Some(base_url);
        }
        if let Some(api_key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.api.api_key = Some(api_key);
        }
    }
}
