use crate::{
    ApiConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, SessionConfig, SyncConfig,
};

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
    /// Directory the config was loaded from; relative paths resolve against it
    #[serde(skip)]
    pub config_dir: PathBuf,
    /// `UD_*` variables whose value did not parse, as `NAME=value`
    #[serde(skip)]
    rejected_overrides: Vec<String>,
}

impl Config {
    /// Load config from the default directory.
    ///
    /// Loading order:
    /// 1. Check for UD_CONFIG_DIR env var, else use ./.ud/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply UD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        Self::load_from(Self::config_dir()?)
    }

    /// Same as [`Config::load`] with an explicit directory.
    pub fn load_from(config_dir: PathBuf) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.config_dir = config_dir;
        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: UD_CONFIG_DIR env var > ./.ud/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.rejected_overrides.is_empty() {
            return Err(ConfigError::config(format!(
                "invalid environment overrides: {}",
                self.rejected_overrides.join(", ")
            )));
        }

        self.api.validate()?;
        self.sync.validate()?;

        Self::validate_relative("database.path", &self.database.path)?;
        Self::validate_relative("session.path", &self.session.path)?;

        Ok(())
    }

    /// Storage files must stay inside the config directory.
    fn validate_relative(name: &str, path: &str) -> ConfigErrorResult<()> {
        if path.is_empty() || Path::new(path).is_absolute() || path.contains("..") {
            return Err(ConfigError::storage(format!(
                "{} must be a non-empty relative path without '..', got '{}'",
                name, path
            )));
        }
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        self.config_dir.join(&self.database.path)
    }

    pub fn session_path(&self) -> PathBuf {
        self.config_dir.join(&self.session.path)
    }

    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.logging.file.as_ref().map(|f| self.config_dir.join(f))
    }

    /// Log configuration summary (NEVER logs the API key).
    pub fn log_summary(&self) {
        info!("Configuration loaded from {}:", self.config_dir.display());
        info!(
            "  api: {} (key: {}, timeout: {})",
            self.api.base_url,
            if self.api.api_key.is_empty() {
                "none"
            } else {
                "set"
            },
            match self.api.timeout_secs {
                0 => String::from("none"),
                secs => format!("{}s", secs),
            }
        );
        info!("  database: {}", self.database.path);
        info!("  session: {}", self.session.path);
        info!(
            "  sync: policy={}, pages={}",
            self.sync.refresh_policy, self.sync.pages
        );
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Api
        Self::apply_env_string("UD_API_BASE_URL", &mut self.api.base_url);
        Self::apply_env_string("UD_API_KEY", &mut self.api.api_key);
        Self::apply_env_parse(
            "UD_API_TIMEOUT_SECS",
            &mut self.api.timeout_secs,
            &mut self.rejected_overrides,
        );

        // Storage
        Self::apply_env_string("UD_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_string("UD_SESSION_PATH", &mut self.session.path);

        // Sync
        Self::apply_env_parse(
            "UD_SYNC_REFRESH_POLICY",
            &mut self.sync.refresh_policy,
            &mut self.rejected_overrides,
        );
        Self::apply_env_parse(
            "UD_SYNC_PAGES",
            &mut self.sync.pages,
            &mut self.rejected_overrides,
        );

        // Logging
        Self::apply_env_parse(
            "UD_LOG_LEVEL",
            &mut self.logging.level,
            &mut self.rejected_overrides,
        );
        Self::apply_env_bool("UD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("UD_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = if val.is_empty() { None } else { Some(val) };
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// The logger is not up yet, so a bad value is recorded for `validate()`.
    fn apply_env_parse<T: FromStr>(var_name: &str, target: &mut T, rejected: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            match val.parse() {
                Ok(parsed) => *target = parsed,
                Err(_) => rejected.push(format!("{}={}", var_name, val)),
            }
        }
    }
}
