use crate::error::Result as CliErrorResult;

use ud_client::{HttpDirectoryClient, RemoteDirectory};
use ud_config::Config;
use ud_db::UserRepository;
use ud_sync::{Authenticator, FileKeyStore, SessionManager, SyncReconciler};

use std::sync::Arc;

use log::info;

/// Everything a command needs, wired from the loaded configuration.
pub struct App {
    pub reconciler: SyncReconciler,
    pub authenticator: Authenticator,
}

impl App {
    pub async fn from_config(config: &Config) -> CliErrorResult<Self> {
        let database_path = config.database_path();
        info!("Opening user store: {}", database_path.display());
        let users = UserRepository::new(ud_db::open(&database_path).await?);

        let api_key = Some(config.api.api_key.as_str());
        let client = match config.api.timeout() {
            Some(timeout) => HttpDirectoryClient::with_timeout(&config.api.base_url, api_key, timeout)?,
            None => HttpDirectoryClient::new(&config.api.base_url, api_key),
        };
        let remote: Arc<dyn RemoteDirectory> = Arc::new(client);

        let key_store = Arc::new(FileKeyStore::new(config.session_path()));
        info!("Loading session from {}", key_store.path().display());
        let session = Arc::new(SessionManager::load(key_store)?);

        Ok(Self {
            reconciler: SyncReconciler::new(users.clone(), remote.clone(), &config.sync),
            authenticator: Authenticator::new(users, remote, session),
        })
    }
}
