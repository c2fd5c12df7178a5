//! Configuration management for notekeeper.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::note::DEFAULT_TITLE_PREVIEW_CHARS;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "notekeeper";

/// Prefix for configuration environment variables.
const ENV_PREFIX: &str = "NOTEKEEPER_";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `NOTEKEEPER_`, nested keys
///    separated by `__`, e.g. `NOTEKEEPER_SERVER__PORT`)
/// 2. TOML config file at `~/.config/notekeeper/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Note handling configuration.
    pub notes: NotesConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host or address to listen on.
    pub host: String,
    /// Port to listen on. 0 picks a free port.
    pub port: u16,
    /// Allow cross-origin requests from any origin.
    pub cors_enabled: bool,
}

/// Note handling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Characters of content used as the title of an untitled note.
    pub title_preview_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_enabled: true,
        }
    }
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            title_preview_chars: DEFAULT_TITLE_PREVIEW_CHARS,
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists; `None` uses the default path)
    /// 3. Environment variables (prefixed with `NOTEKEEPER_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "server.host must not be empty".to_string(),
            });
        }

        if self.notes.title_preview_chars == 0 {
            return Err(Error::ConfigValidation {
                message: "notes.title_preview_chars must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Address string the server binds to, in `host:port` form.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert!(config.server.cors_enabled);
        assert_eq!(config.notes.title_preview_chars, 5);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.server.host = "  ".to_string();

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("server.host"));
    }

    #[test]
    fn test_validate_zero_title_preview() {
        let mut config = Config::default();
        config.notes.title_preview_chars = 0;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("title_preview_chars"));
    }

    #[test]
    fn test_bind_addr() {
        let mut config = Config::default();
        config.server.host = "0.0.0.0".to_string();
        config.server.port = 8080;

        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("notekeeper"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        Jail::expect_with(|_jail| {
            let config = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")))
                .expect("defaults should load");
            assert_eq!(config, Config::default());
            Ok(())
        });
    }

    #[test]
    fn test_load_from_toml_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "notekeeper.toml",
                r#"
                [server]
                port = 9090
                cors_enabled = false

                [notes]
                title_preview_chars = 8
                "#,
            )?;

            let config = Config::load_from(Some(PathBuf::from("notekeeper.toml")))
                .expect("file config should load");
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.server.port, 9090);
            assert!(!config.server.cors_enabled);
            assert_eq!(config.notes.title_preview_chars, 8);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("notekeeper.toml", "[server]\nport = 9090\n")?;
            jail.set_env("NOTEKEEPER_SERVER__PORT", "7070");
            jail.set_env("NOTEKEEPER_NOTES__TITLE_PREVIEW_CHARS", "3");

            let config = Config::load_from(Some(PathBuf::from("notekeeper.toml")))
                .expect("env config should load");
            assert_eq!(config.server.port, 7070);
            assert_eq!(config.notes.title_preview_chars, 3);
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        Jail::expect_with(|jail| {
            jail.create_file("notekeeper.toml", "[notes]\ntitle_preview_chars = 0\n")?;

            let err = Config::load_from(Some(PathBuf::from("notekeeper.toml"))).unwrap_err();
            assert!(matches!(err, Error::ConfigValidation { .. }));
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        Jail::expect_with(|jail| {
            jail.create_file("notekeeper.toml", "[server]\nport = \"not a port\"\n")?;

            let err = Config::load_from(Some(PathBuf::from("notekeeper.toml"))).unwrap_err();
            assert!(matches!(err, Error::ConfigLoad(_)));
            Ok(())
        });
    }

    #[test]
    fn test_config_serialize() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(json.contains("title_preview_chars"));
        assert!(json.contains("cors_enabled"));
    }

    #[test]
    fn test_server_config_deserialize_partial() {
        let json = r#"{"port": 1234}"#;
        let server: ServerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(server.port, 1234);
        assert_eq!(server.host, "127.0.0.1");
    }
}
