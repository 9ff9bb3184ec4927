use crate::error::{Result, WrkError};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

pub const HOME_ENV: &str = "WRK_HOME";
pub const APP_KEY_ENV: &str = "WRK_APP_KEY";
pub const TOKEN_ENV: &str = "WRK_TOKEN";

/// Configuration for wrk, stored in ~/.wrk/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WrkConfig {
    /// Trello application key
    #[serde(default)]
    pub app_key: Option<String>,

    /// Trello user token granted to the application key
    #[serde(default)]
    pub token: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for WrkConfig {
    fn default() -> Self {
        Self {
            app_key: None,
            token: None,
            base_url: default_base_url(),
        }
    }
}

impl WrkConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WrkError::Io)?;
        let config: WrkConfig = serde_json::from_str(&content).map_err(WrkError::Serialization)?;
        Ok(config)
    }

    /// Credentials from the environment win over the file.
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_overrides(
            std::env::var(APP_KEY_ENV).ok(),
            std::env::var(TOKEN_ENV).ok(),
        );
        self
    }

    fn apply_overrides(&mut self, app_key: Option<String>, token: Option<String>) {
        if let Some(key) = app_key.filter(|k| !k.is_empty()) {
            self.app_key = Some(key);
        }
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.token = Some(token);
        }
    }
}

/// Directory holding `config.json` and `wrk-ids`: `$WRK_HOME`, else `~/.wrk`.
pub fn wrk_home() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".wrk"))
        .ok_or_else(|| WrkError::Config("could not determine home directory".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = WrkConfig::default();
        assert_eq!(config.base_url, "https://api.trello.com/1");
        assert!(config.app_key.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = WrkConfig::load(dir.path()).unwrap();
        assert_eq!(config, WrkConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"app_key": "k", "token": "t"}"#,
        )
        .unwrap();

        let config = WrkConfig::load(dir.path()).unwrap();
        assert_eq!(config.app_key.as_deref(), Some("k"));
        assert_eq!(config.token.as_deref(), Some("t"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_env_overrides_skip_empty_values() {
        let mut config = WrkConfig {
            app_key: Some("file-key".into()),
            token: Some("file-token".into()),
            ..WrkConfig::default()
        };
        config.apply_overrides(Some("env-key".into()), Some(String::new()));
        assert_eq!(config.app_key.as_deref(), Some("env-key"));
        assert_eq!(config.token.as_deref(), Some("file-token"));
    }
}
