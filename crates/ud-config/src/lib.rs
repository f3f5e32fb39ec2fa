mod api_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod refresh_policy;
mod session_config;
mod sync_config;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use refresh_policy::RefreshPolicy;
pub use session_config::SessionConfig;
pub use sync_config::SyncConfig;

const CONFIG_DIR_ENV: &str = "UD_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ud";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "https://reqres.in/api";
const DEFAULT_API_KEY: &str = "reqres-free-v1";
const DEFAULT_API_TIMEOUT_SECS: u64 = 0;
const MAX_API_TIMEOUT_SECS: u64 = 300;

const DEFAULT_DATABASE_FILENAME: &str = "users.db";
const DEFAULT_SESSION_FILENAME: &str = "session.json";

const DEFAULT_SYNC_PAGES: u32 = 1;
const MIN_SYNC_PAGES: u32 = 1;
const MAX_SYNC_PAGES: u32 = 10;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
