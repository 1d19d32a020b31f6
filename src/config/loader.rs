//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.roster.toml` in the working directory
//! 4. `~/.config/roster/config.toml` (global defaults)
//! 5. Built-in defaults

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants;
use crate::env::{Env, EnvValue};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub registry: RegistryConfig,
    pub currency: CurrencyConfig,
    pub logging: LoggingConfig,
}

/// Debounced search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet window in milliseconds before a search burst executes.
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: constants::DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl SearchConfig {
    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// User registry settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Length of generated user ids.
    pub id_length: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            id_length: constants::DEFAULT_ID_LENGTH,
        }
    }
}

/// Defaults for currency rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    /// ISO 4217 code, e.g. `USD`.
    pub code: String,
    /// BCP 47 locale tag, e.g. `en-US`.
    pub locale: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: constants::DEFAULT_CURRENCY.to_string(),
            locale: constants::DEFAULT_LOCALE.to_string(),
        }
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive string.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: constants::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// One config file as written: only the keys it mentions are `Some`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    search: SearchLayer,
    registry: RegistryLayer,
    currency: CurrencyLayer,
    logging: LoggingLayer,
}

#[derive(Debug, Default, Deserialize)]
struct SearchLayer {
    debounce_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct RegistryLayer {
    id_length: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct CurrencyLayer {
    code: Option<String>,
    locale: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingLayer {
    filter: Option<String>,
}

impl ConfigLayer {
    fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, then `work_dir`'s local config, then
    /// applies environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config.merge(ConfigLayer::load(&global_path)?);
            }
        }

        // Layer 3: local config
        if let Some(dir) = work_dir {
            let local_path = dir.join(constants::CONFIG_FILENAME);
            if local_path.exists() {
                config.merge(ConfigLayer::load(&local_path)?);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file, over the built-in defaults.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.merge(ConfigLayer::load(path)?);
        Ok(config)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge a file layer into this config. Every key the layer sets wins,
    /// even when it spells out the built-in default.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(ms) = layer.search.debounce_ms {
            self.search.debounce_ms = ms;
        }
        if let Some(len) = layer.registry.id_length {
            self.registry.id_length = len;
        }
        if let Some(code) = layer.currency.code {
            self.currency.code = code;
        }
        if let Some(locale) = layer.currency.locale {
            self.currency.locale = locale;
        }
        if let Some(filter) = layer.logging.filter {
            self.logging.filter = filter;
        }
    }

    /// Apply environment variable overrides. Unparseable values are
    /// ignored with a warning.
    fn apply_env_vars(&mut self, env: &Env) {
        match env.parse::<u64>(constants::ENV_DEBOUNCE_MS) {
            EnvValue::Parsed(ms) => self.search.debounce_ms = ms,
            EnvValue::Invalid(raw) => warn_ignored(constants::ENV_DEBOUNCE_MS, &raw),
            EnvValue::Unset => {}
        }
        match env.parse::<usize>(constants::ENV_ID_LENGTH) {
            EnvValue::Parsed(len) => self.registry.id_length = len,
            EnvValue::Invalid(raw) => warn_ignored(constants::ENV_ID_LENGTH, &raw),
            EnvValue::Unset => {}
        }
        if let Some(code) = env.get(constants::ENV_CURRENCY) {
            self.currency.code = code.trim().to_uppercase();
        }
        if let Some(locale) = env.get(constants::ENV_LOCALE) {
            self.currency.locale = locale.trim().to_string();
        }
        if let Some(filter) = env.get(constants::ENV_LOG) {
            self.logging.filter = filter;
        }
    }
}

/// Printed directly: config is loaded before the log subscriber exists.
fn warn_ignored(var: &str, raw: &str) {
    eprintln!("Warning: ignoring invalid {var} value: {raw}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.search.debounce_delay(), Duration::from_millis(300));
        assert_eq!(config.registry.id_length, 12);
        assert_eq!(config.currency.code, "USD");
        assert_eq!(config.currency.locale, "en-US");
        assert_eq!(config.logging.filter, "warn");
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[search]
debounce_ms = 150

[currency]
code = "EUR"
locale = "de-DE"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.debounce_ms, 150);
        assert_eq!(config.currency.code, "EUR");
        assert_eq!(config.currency.locale, "de-DE");
        // Untouched sections keep their defaults
        assert_eq!(config.registry.id_length, 12);
    }

    #[test]
    fn merge_overrides_values_set_in_layer() {
        let mut base = Config::default();
        let layer = ConfigLayer::parse(
            r#"
[search]
debounce_ms = 50

[registry]
id_length = 8

[currency]
code = "GBP"
locale = "en-GB"

[logging]
filter = "roster=debug"
"#,
        )
        .unwrap();

        base.merge(layer);

        assert_eq!(base.search.debounce_ms, 50);
        assert_eq!(base.registry.id_length, 8);
        assert_eq!(base.currency.code, "GBP");
        assert_eq!(base.currency.locale, "en-GB");
        assert_eq!(base.logging.filter, "roster=debug");
    }

    #[test]
    fn merge_keeps_base_for_missing_keys() {
        let mut base = Config::default();
        base.currency.locale = "fr-FR".to_string();
        base.search.debounce_ms = 75;

        base.merge(ConfigLayer::parse("[currency]\ncode = \"EUR\"\n").unwrap());

        assert_eq!(base.currency.code, "EUR");
        assert_eq!(base.currency.locale, "fr-FR");
        assert_eq!(base.search.debounce_ms, 75);
    }

    #[test]
    fn later_layer_can_restore_default_values() {
        let global = "[search]\ndebounce_ms = 900\n\n[currency]\ncode = \"EUR\"\n";
        let local = "[search]\ndebounce_ms = 300\n\n[currency]\ncode = \"USD\"\n";

        let mut config = Config::default();
        config.merge(ConfigLayer::parse(global).unwrap());
        assert_eq!(config.search.debounce_ms, 900);
        assert_eq!(config.currency.code, "EUR");

        config.merge(ConfigLayer::parse(local).unwrap());
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.currency.code, "USD");
    }

    #[test]
    fn load_file_fills_unset_keys_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[registry]\nid_length = 6\n").unwrap();

        let config = Config::load_file(&path).unwrap();
        assert_eq!(config.registry.id_length, 6);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.currency.code, "USD");
    }

    #[test]
    fn load_file_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "not valid {{ toml").unwrap();

        let err = Config::load_file(&path).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn load_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_file(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("read"));
    }

    #[test]
    fn load_from_work_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".roster.toml"),
            "[registry]\nid_length = 20\n",
        )
        .unwrap();

        let config = Config::load(Some(dir.path()), &empty_env()).unwrap();
        assert_eq!(config.registry.id_length, 20);
    }

    #[test]
    fn env_overrides_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(".roster.toml"),
            "[search]\ndebounce_ms = 120\n",
        )
        .unwrap();
        let env = Env::mock([
            ("ROSTER_DEBOUNCE_MS", "40"),
            ("ROSTER_CURRENCY", "jpy"),
            ("ROSTER_LOCALE", "ja-JP"),
        ]);

        let config = Config::load(Some(dir.path()), &env).unwrap();
        assert_eq!(config.search.debounce_ms, 40);
        assert_eq!(config.currency.code, "JPY");
        assert_eq!(config.currency.locale, "ja-JP");
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let env = Env::mock([("ROSTER_DEBOUNCE_MS", "fast"), ("ROSTER_ID_LENGTH", "-3")]);
        let mut config = Config::default();
        config.apply_env_vars(&env);
        assert_eq!(config.search.debounce_ms, 300);
        assert_eq!(config.registry.id_length, 12);
    }

    #[test]
    fn global_config_path_mentions_app_dir() {
        if let Some(p) = Config::global_config_path() {
            assert!(p.to_string_lossy().contains("roster"));
        }
    }
}
