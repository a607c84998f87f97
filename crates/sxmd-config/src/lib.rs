use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "SXMD_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid log level '{value}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel { value: String },
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default log filter for the CLI; `RUST_LOG` still takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// `$SXMD_CONFIG` if set, otherwise `~/.config/sxmd/config.toml`.
    pub fn config_path() -> PathBuf {
        Self::config_path_from(std::env::var(CONFIG_PATH_ENV).ok())
    }

    fn config_path_from(custom: Option<String>) -> PathBuf {
        if let Some(custom) = custom
            && !custom.is_empty()
        {
            return Self::expand_path(Path::new(&custom)).unwrap_or_else(|| PathBuf::from(custom));
        }
        let config_dir = shellexpand::tilde("~/.config/sxmd");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The configured log filter, or [`Config::DEFAULT_LOG_LEVEL`] when unset.
    pub fn log_filter(&self) -> Result<LevelFilter, ConfigError> {
        match &self.log_level {
            None => Ok(Self::DEFAULT_LOG_LEVEL),
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel {
                    value: value.clone(),
                }),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_path() {
        let config_path = Config::config_path_from(None);
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/sxmd/config.toml"));
    }

    #[test]
    fn test_empty_override_uses_default_path() {
        assert_eq!(
            Config::config_path_from(Some(String::new())),
            Config::config_path_from(None)
        );
    }

    #[test]
    fn test_override_config_path() {
        let path = Config::config_path_from(Some("/etc/sxmd.toml".to_string()));
        assert_eq!(path, PathBuf::from("/etc/sxmd.toml"));
    }

    #[test]
    fn test_override_config_path_with_env_var() {
        unsafe {
            env::set_var("SXMD_TEST_CONFIG_DIR", "/test/env/path");
        }

        let path = Config::config_path_from(Some("$SXMD_TEST_CONFIG_DIR/sxmd.toml".to_string()));
        assert_eq!(path, PathBuf::from("/test/env/path/sxmd.toml"));

        unsafe {
            env::remove_var("SXMD_TEST_CONFIG_DIR");
        }
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            log_level: Some("debug".to_string()),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_empty_file_is_default_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter().unwrap(), LevelFilter::Warn);
    }

    #[test]
    fn test_log_filter_parses_levels() {
        for (value, expected) in [
            ("off", LevelFilter::Off),
            ("error", LevelFilter::Error),
            ("INFO", LevelFilter::Info),
            (" debug ", LevelFilter::Debug),
            ("trace", LevelFilter::Trace),
        ] {
            let config = Config {
                log_level: Some(value.to_string()),
            };
            assert_eq!(config.log_filter().unwrap(), expected, "for {value:?}");
        }
    }

    #[test]
    fn test_log_filter_rejects_unknown_level() {
        let config = Config {
            log_level: Some("loud".to_string()),
        };
        let err = config.log_filter().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel { .. }));
        assert!(err.to_string().contains("loud"));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "log_level = \"info\"\n").unwrap();

        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded.log_level.as_deref(), Some("info"));
        assert_eq!(loaded.log_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_load_malformed_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "log_level = [").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }
}
