use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SYNC_PAGES, MAX_SYNC_PAGES, MIN_SYNC_PAGES,
    RefreshPolicy,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    pub refresh_policy: RefreshPolicy,
    /// Upper bound on `GET /users` pages fetched per reconcile
    pub pages: u32,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            refresh_policy: RefreshPolicy::default(),
            pages: DEFAULT_SYNC_PAGES,
        }
    }
}

impl SyncConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.pages < MIN_SYNC_PAGES || self.pages > MAX_SYNC_PAGES {
            return Err(ConfigError::sync(format!(
                "sync.pages must be {}-{}, got {}",
                MIN_SYNC_PAGES, MAX_SYNC_PAGES, self.pages
            )));
        }

        Ok(())
    }
}
