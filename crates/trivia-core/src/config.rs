//! Application configuration
//!
//! Configuration is loaded from:
//! 1. Default values
//! 2. Config file (~/.config/trivia/config.toml)
//! 3. Environment variables (TRIVIA_* prefix)
//!
//! Environment variables take precedence over config file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix
const ENV_PREFIX: &str = "TRIVIA";

/// Address the server listens on when nothing else is configured
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the SQLite database
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Socket address for the HTTP server
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Log level for trivia crates (trace, debug, info, warn, error)
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            bind_addr: default_bind_addr(),
            log_level: None,
        }
    }
}

impl Config {
    /// Load configuration from default location and environment
    ///
    /// Order of precedence (highest to lowest):
    /// 1. Environment variables (TRIVIA_DATA_DIR, TRIVIA_BIND_ADDR, TRIVIA_LOG_LEVEL)
    /// 2. Config file (~/.config/trivia/config.toml or TRIVIA_CONFIG)
    /// 3. Default values
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_file_path())
    }

    /// Load configuration from a specific path
    ///
    /// Environment variables are still applied as overrides.
    /// If the file doesn't exist, defaults are used.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a TOML string (useful for testing)
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let mut config: Config =
            toml::from_str(toml_content).context("Failed to parse config TOML")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var(format!("{}_DATA_DIR", ENV_PREFIX)) {
            self.data_dir = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var(format!("{}_BIND_ADDR", ENV_PREFIX)) {
            if !val.is_empty() {
                self.bind_addr = val;
            }
        }

        // Empty string clears the level
        if let Ok(val) = std::env::var(format!("{}_LOG_LEVEL", ENV_PREFIX)) {
            self.log_level = if val.is_empty() { None } else { Some(val) };
        }
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Get the config file path
    ///
    /// Can be overridden with TRIVIA_CONFIG environment variable
    pub fn config_file_path() -> PathBuf {
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trivia")
            .join("config.toml")
    }

    /// Get the path to the SQLite database
    pub fn sqlite_path(&self) -> PathBuf {
        self.data_dir.join("trivia.db")
    }

    /// Effective log level, `info` when unset
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}

/// Get the default data directory
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trivia")
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to serialize tests that touch environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Guard that locks env access and saves/restores env vars
    struct EnvGuard<'a> {
        _lock: std::sync::MutexGuard<'a, ()>,
        saved: Vec<(String, Option<String>)>,
    }

    impl<'a> EnvGuard<'a> {
        fn new(vars: &[&str]) -> Self {
            let lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
            let saved = vars
                .iter()
                .map(|&name| (name.to_string(), env::var(name).ok()))
                .collect();
            for name in vars {
                env::remove_var(name);
            }
            Self { _lock: lock, saved }
        }
    }

    impl Drop for EnvGuard<'_> {
        fn drop(&mut self) {
            for (name, value) in &self.saved {
                match value {
                    Some(v) => env::set_var(name, v),
                    None => env::remove_var(name),
                }
            }
        }
    }

    const ENV_VARS: &[&str] = &["TRIVIA_DATA_DIR", "TRIVIA_BIND_ADDR", "TRIVIA_LOG_LEVEL"];

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert!(config.log_level.is_none());
        assert_eq!(config.log_level(), "info");
        assert!(config.data_dir.ends_with("trivia"));
    }

    #[test]
    fn test_sqlite_path() {
        let config = Config::default();
        assert!(config.sqlite_path().ends_with("trivia.db"));
    }

    #[test]
    fn test_env_override_data_dir() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();

        env::set_var("TRIVIA_DATA_DIR", "/tmp/trivia-test");
        config.apply_env_overrides();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/trivia-test"));
    }

    #[test]
    fn test_env_override_bind_addr() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();

        env::set_var("TRIVIA_BIND_ADDR", "0.0.0.0:8080");
        config.apply_env_overrides();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");

        // Empty value keeps the current address
        env::set_var("TRIVIA_BIND_ADDR", "");
        config.apply_env_overrides();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn test_env_override_log_level() {
        let _guard = EnvGuard::new(ENV_VARS);

        let mut config = Config::default();

        env::set_var("TRIVIA_LOG_LEVEL", "debug");
        config.apply_env_overrides();
        assert_eq!(config.log_level(), "debug");

        env::set_var("TRIVIA_LOG_LEVEL", "");
        config.apply_env_overrides();
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_serialization() {
        let _guard = EnvGuard::new(ENV_VARS);

        let config = Config {
            data_dir: PathBuf::from("/data/trivia"),
            bind_addr: "0.0.0.0:5000".to_string(),
            log_level: Some("warn".to_string()),
        };

        let toml_str = config.to_toml().unwrap();
        assert!(toml_str.contains("data_dir"));
        assert!(toml_str.contains("bind_addr"));

        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.data_dir, config.data_dir);
        assert_eq!(parsed.bind_addr, config.bind_addr);
        assert_eq!(parsed.log_level, config.log_level);
    }

    #[test]
    fn test_load_from_str() {
        let _guard = EnvGuard::new(ENV_VARS);

        let toml = r#"
            data_dir = "/custom/data"
            bind_addr = "127.0.0.1:9000"
        "#;

        let config = Config::load_from_str(toml).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/custom/data"));
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let _guard = EnvGuard::new(ENV_VARS);

        let path = PathBuf::from("/nonexistent/config.toml");
        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn test_load_from_path_reads_file() {
        let _guard = EnvGuard::new(ENV_VARS);

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = \"trace\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.log_level(), "trace");
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }
}
