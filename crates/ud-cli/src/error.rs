use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ud_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] ud_db::DbError),

    #[error("Remote client error: {0}")]
    Client(#[from] ud_client::ClientError),

    #[error("Session storage error: {0}")]
    Session(#[from] ud_sync::SessionError),

    #[error("{0}")]
    Sync(#[from] ud_sync::SyncError),

    #[error("{}", .0.user_message())]
    Auth(#[from] ud_sync::AuthError),

    #[error("User {id} not found")]
    UserNotFound { id: i64 },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
